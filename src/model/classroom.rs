// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use smallvec::SmallVec;

use super::seating::Seating;

/// A grid position, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    row: usize,
    col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn manhattan_distance(&self, other: CellPos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The classroom grid: dimensions plus the teacher desk cells.
///
/// Teacher desks are reserved (never assignable) and double as the distance
/// anchors for `near_teacher`/`far_teacher` preferences. Construction
/// validates the desks against the grid bounds; every query afterwards is
/// total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classroom {
    rows: usize,
    cols: usize,
    teacher_desks: BTreeSet<CellPos>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassroomError {
    EmptyGrid,
    DeskOutOfBounds { desk: CellPos, rows: usize, cols: usize },
    NoAssignableCells,
}

impl fmt::Display for ClassroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => f.write_str("classroom must have at least one row and column"),
            Self::DeskOutOfBounds { desk, rows, cols } => {
                write!(f, "teacher desk {desk} is outside the {rows}x{cols} grid")
            }
            Self::NoAssignableCells => {
                f.write_str("teacher desks cover the whole grid; no assignable cells remain")
            }
        }
    }
}

impl std::error::Error for ClassroomError {}

impl Classroom {
    pub fn new(
        rows: usize,
        cols: usize,
        teacher_desks: impl IntoIterator<Item = CellPos>,
    ) -> Result<Self, ClassroomError> {
        if rows == 0 || cols == 0 {
            return Err(ClassroomError::EmptyGrid);
        }

        let teacher_desks = teacher_desks.into_iter().collect::<BTreeSet<_>>();
        for desk in &teacher_desks {
            if desk.row() >= rows || desk.col() >= cols {
                return Err(ClassroomError::DeskOutOfBounds { desk: *desk, rows, cols });
            }
        }

        if teacher_desks.len() == rows * cols {
            return Err(ClassroomError::NoAssignableCells);
        }

        Ok(Self { rows, cols, teacher_desks })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn teacher_desks(&self) -> &BTreeSet<CellPos> {
        &self.teacher_desks
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        cell.row() < self.rows && cell.col() < self.cols
    }

    pub fn is_reserved(&self, cell: CellPos) -> bool {
        self.teacher_desks.contains(&cell)
    }

    /// All 4-directional neighbors inside the grid.
    ///
    /// No wraparound and no diagonals; reserved cells are included (callers
    /// that need assignable neighbors filter with [`Classroom::is_reserved`]).
    pub fn neighbors(&self, cell: CellPos) -> SmallVec<[CellPos; 4]> {
        let mut out = SmallVec::new();
        if cell.row() > 0 {
            out.push(CellPos::new(cell.row() - 1, cell.col()));
        }
        if cell.row() + 1 < self.rows {
            out.push(CellPos::new(cell.row() + 1, cell.col()));
        }
        if cell.col() > 0 {
            out.push(CellPos::new(cell.row(), cell.col() - 1));
        }
        if cell.col() + 1 < self.cols {
            out.push(CellPos::new(cell.row(), cell.col() + 1));
        }
        out
    }

    /// All cells minus the teacher desks, in row-major order.
    pub fn assignable_cells(&self) -> Vec<CellPos> {
        let mut out = Vec::with_capacity(self.rows * self.cols - self.teacher_desks.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = CellPos::new(row, col);
                if !self.is_reserved(cell) {
                    out.push(cell);
                }
            }
        }
        out
    }

    pub fn empty_seating(&self) -> Seating {
        Seating::new(self.rows, self.cols)
    }
}
