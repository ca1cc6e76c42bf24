// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain-text rendering of a seating grid.
//!
//! Used by headless plan mode; the interactive TUI draws its own widgets.

use crate::model::{CellPos, Classroom, Seating};

const DESK_LABEL: &str = "T";
const MIN_CELL_WIDTH: usize = 3;

/// Renders the seating as a box-drawn grid, one cell per seat.
///
/// Teacher desks render as `T`; empty seats render blank. All cells share
/// one width, sized to the longest seated name.
pub fn render_seating_text(classroom: &Classroom, seating: &Seating) -> String {
    let width = cell_width(seating);
    let cols = classroom.cols();

    let mut out = String::new();
    out.push_str(&border_line(cols, width, '┌', '┬', '┐'));
    for row in 0..classroom.rows() {
        if row > 0 {
            out.push_str(&border_line(cols, width, '├', '┼', '┤'));
        }
        out.push('│');
        for col in 0..cols {
            let cell = CellPos::new(row, col);
            let label = if classroom.is_reserved(cell) {
                DESK_LABEL
            } else {
                seating.occupant(cell).map(|s| s.name()).unwrap_or("")
            };
            out.push(' ');
            out.push_str(label);
            for _ in label.chars().count()..width + 1 {
                out.push(' ');
            }
            out.push('│');
        }
        out.push('\n');
    }
    out.push_str(&border_line(cols, width, '└', '┴', '┘'));
    out
}

fn cell_width(seating: &Seating) -> usize {
    seating
        .occupied()
        .map(|(_, student)| student.name().chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH)
}

fn border_line(cols: usize, width: usize, left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for col in 0..cols {
        if col > 0 {
            line.push(mid);
        }
        for _ in 0..width + 2 {
            line.push('─');
        }
    }
    line.push(right);
    line.push('\n');
    line
}
