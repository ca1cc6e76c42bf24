// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence.
//!
//! Classroom files (grid shape, teacher desks, roster) are JSON; seatings
//! import/export as a CSV grid with pipe-delimited cell records. Malformed
//! input surfaces as a store error here and never reaches scoring/placement.

pub mod classroom_file;
pub mod seating_csv;

pub use classroom_file::{load_classroom, parse_classroom, ClassroomFileError};
pub use seating_csv::{
    export_seating, parse_seating, read_seating, write_seating, SeatingCsvError,
};
