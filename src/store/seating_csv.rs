// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seating grids as CSV.
//!
//! One line per grid row, one comma-separated field per cell. An occupied
//! cell is a pipe-delimited record:
//!
//! ```text
//! name|skill|avoid|friends|must_front|must_back|must_next_to|near_teacher|far_teacher|avatar
//! ```
//!
//! The avoid/friends/must_next_to fields are comma-joined name lists, so any
//! non-empty cell record contains commas and is double-quoted on export;
//! quotes inside a record are doubled. Empty cells are empty fields. Bools
//! parse case-insensitively, which keeps files written as `True`/`False` by
//! older exporters loadable.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use smol_str::SmolStr;

use crate::model::{CellPos, Classroom, Seating, Student};

const CELL_FIELD_COUNT: usize = 10;

#[derive(Debug)]
pub enum SeatingCsvError {
    Io(io::Error),
    UnclosedQuote { line: usize },
    TooManyRows { rows: usize },
    TooManyColumns { line: usize, found: usize, cols: usize },
    FieldCount { line: usize, column: usize, found: usize },
    EmptyName { line: usize, column: usize },
    InvalidSkill { line: usize, column: usize, value: String },
    InvalidBool { line: usize, column: usize, value: String },
    ReservedCell { line: usize, column: usize },
}

impl fmt::Display for SeatingCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "seating file I/O failed: {err}"),
            Self::UnclosedQuote { line } => {
                write!(f, "line {line}: unclosed quote")
            }
            Self::TooManyRows { rows } => {
                write!(f, "seating has more rows than the {rows}-row classroom")
            }
            Self::TooManyColumns { line, found, cols } => {
                write!(f, "line {line}: {found} cells, but the classroom has {cols} columns")
            }
            Self::FieldCount { line, column, found } => {
                write!(
                    f,
                    "line {line}, cell {column}: expected {CELL_FIELD_COUNT} fields, got {found}"
                )
            }
            Self::EmptyName { line, column } => {
                write!(f, "line {line}, cell {column}: student name is empty")
            }
            Self::InvalidSkill { line, column, value } => {
                write!(f, "line {line}, cell {column}: invalid skill '{value}'")
            }
            Self::InvalidBool { line, column, value } => {
                write!(f, "line {line}, cell {column}: invalid bool '{value}'")
            }
            Self::ReservedCell { line, column } => {
                write!(f, "line {line}, cell {column}: cell is a teacher desk")
            }
        }
    }
}

impl std::error::Error for SeatingCsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Encodes the full grid, teacher desks and empty seats as empty fields.
pub fn export_seating(classroom: &Classroom, seating: &Seating) -> String {
    let mut out = String::new();
    for row in 0..classroom.rows() {
        for col in 0..classroom.cols() {
            if col > 0 {
                out.push(',');
            }
            if let Some(student) = seating.occupant(CellPos::new(row, col)) {
                push_quoted(&mut out, &encode_student(student));
            }
        }
        out.push('\n');
    }
    out
}

/// Decodes a seating for `classroom`, replacing nothing on error.
///
/// Rows beyond the grid must be blank; short rows are padded with empty
/// seats. A record on a teacher desk is rejected rather than seated.
pub fn parse_seating(input: &str, classroom: &Classroom) -> Result<Seating, SeatingCsvError> {
    let mut seating = classroom.empty_seating();

    for (line_idx, line) in input.lines().enumerate() {
        if line_idx >= classroom.rows() {
            if line.trim().is_empty() {
                continue;
            }
            return Err(SeatingCsvError::TooManyRows { rows: classroom.rows() });
        }

        let fields = split_csv_line(line, line_idx)?;
        if fields.len() > classroom.cols() {
            return Err(SeatingCsvError::TooManyColumns {
                line: line_idx + 1,
                found: fields.len(),
                cols: classroom.cols(),
            });
        }

        for (col_idx, field) in fields.iter().enumerate() {
            if field.trim().is_empty() {
                continue;
            }
            let cell = CellPos::new(line_idx, col_idx);
            if classroom.is_reserved(cell) {
                return Err(SeatingCsvError::ReservedCell {
                    line: line_idx + 1,
                    column: col_idx + 1,
                });
            }
            let student = decode_student(field, line_idx, col_idx)?;
            seating.place(cell, student);
        }
    }

    Ok(seating)
}

pub fn read_seating(
    path: impl AsRef<Path>,
    classroom: &Classroom,
) -> Result<Seating, SeatingCsvError> {
    let input = fs::read_to_string(path).map_err(SeatingCsvError::Io)?;
    parse_seating(&input, classroom)
}

pub fn write_seating(
    path: impl AsRef<Path>,
    classroom: &Classroom,
    seating: &Seating,
) -> Result<(), SeatingCsvError> {
    fs::write(path, export_seating(classroom, seating)).map_err(SeatingCsvError::Io)
}

fn encode_student(student: &Student) -> String {
    let join = |set: &BTreeSet<SmolStr>| {
        set.iter().map(SmolStr::as_str).collect::<Vec<_>>().join(",")
    };
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
        student.name(),
        student.skill(),
        join(student.avoid()),
        join(student.friends()),
        student.must_front(),
        student.must_back(),
        join(student.must_next_to()),
        student.near_teacher(),
        student.far_teacher(),
        student.avatar(),
    )
}

fn decode_student(
    record: &str,
    line_idx: usize,
    col_idx: usize,
) -> Result<Student, SeatingCsvError> {
    let line = line_idx + 1;
    let column = col_idx + 1;

    let parts = record.split('|').collect::<Vec<_>>();
    if parts.len() != CELL_FIELD_COUNT {
        return Err(SeatingCsvError::FieldCount { line, column, found: parts.len() });
    }

    let name = parts[0];
    if name.is_empty() {
        return Err(SeatingCsvError::EmptyName { line, column });
    }

    let skill = parts[1].parse::<i32>().map_err(|_| SeatingCsvError::InvalidSkill {
        line,
        column,
        value: parts[1].to_owned(),
    })?;

    let mut student = Student::new(name)
        .with_skill(skill)
        .with_avoid(split_names(parts[2]))
        .with_friends(split_names(parts[3]))
        .with_must_front(parse_bool(parts[4], line, column)?)
        .with_must_back(parse_bool(parts[5], line, column)?)
        .with_must_next_to(split_names(parts[6]))
        .with_near_teacher(parse_bool(parts[7], line, column)?)
        .with_far_teacher(parse_bool(parts[8], line, column)?);
    if !parts[9].is_empty() {
        student = student.with_avatar(parts[9]);
    }
    Ok(student)
}

fn split_names(field: &str) -> Vec<SmolStr> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(',').map(SmolStr::from).collect()
}

fn parse_bool(value: &str, line: usize, column: usize) -> Result<bool, SeatingCsvError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(SeatingCsvError::InvalidBool { line, column, value: value.to_owned() })
    }
}

fn push_quoted(out: &mut String, field: &str) {
    if !field.contains(',') && !field.contains('"') && !field.contains('\n') {
        out.push_str(field);
        return;
    }
    out.push('"');
    for ch in field.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

fn split_csv_line(line: &str, line_idx: usize) -> Result<Vec<String>, SeatingCsvError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else {
            match ch {
                '"' if field.is_empty() => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(ch),
            }
        }
    }

    if in_quotes {
        return Err(SeatingCsvError::UnclosedQuote { line: line_idx + 1 });
    }

    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests;
