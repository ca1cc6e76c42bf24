// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A classroom is a fixed grid with reserved teacher desks; a seating maps each
//! grid cell to at most one student from the roster.

pub mod classroom;
pub mod fixtures;
pub mod seating;
pub mod student;

pub use classroom::{CellPos, Classroom, ClassroomError};
pub use seating::Seating;
pub use student::Student;
