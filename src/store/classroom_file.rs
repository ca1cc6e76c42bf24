// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Classroom files on disk.
//!
//! A classroom file describes the grid (rows, cols, teacher desks) and the
//! roster with preference fields. The serde structs here are the on-disk
//! shape; they are validated and mapped into model types on load.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{CellPos, Classroom, ClassroomError, Student};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ClassroomFile {
    rows: usize,
    cols: usize,
    #[serde(default)]
    teacher_desks: Vec<CellSpec>,
    #[serde(default)]
    students: Vec<StudentSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct CellSpec {
    row: usize,
    col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StudentSpec {
    name: String,
    #[serde(default = "default_skill")]
    skill: i32,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    avoid: Vec<String>,
    #[serde(default)]
    friends: Vec<String>,
    #[serde(default)]
    must_next_to: Vec<String>,
    #[serde(default)]
    must_front: bool,
    #[serde(default)]
    must_back: bool,
    #[serde(default)]
    near_teacher: bool,
    #[serde(default)]
    far_teacher: bool,
}

fn default_skill() -> i32 {
    1
}

#[derive(Debug)]
pub enum ClassroomFileError {
    Io(io::Error),
    Json(serde_json::Error),
    Classroom(ClassroomError),
    EmptyStudentName,
    DuplicateStudentName { name: String },
}

impl fmt::Display for ClassroomFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read classroom file: {err}"),
            Self::Json(err) => write!(f, "invalid classroom file: {err}"),
            Self::Classroom(err) => write!(f, "invalid classroom: {err}"),
            Self::EmptyStudentName => f.write_str("student name must not be empty"),
            Self::DuplicateStudentName { name } => {
                write!(f, "duplicate student name '{name}'")
            }
        }
    }
}

impl std::error::Error for ClassroomFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Classroom(err) => Some(err),
            _ => None,
        }
    }
}

/// Parses a classroom file into a validated classroom plus roster.
///
/// Student names must be unique: they are the join key for every relational
/// preference, so a duplicate would make adjacency lookups ambiguous.
pub fn parse_classroom(input: &str) -> Result<(Classroom, Vec<Student>), ClassroomFileError> {
    let file: ClassroomFile = serde_json::from_str(input).map_err(ClassroomFileError::Json)?;

    let desks = file.teacher_desks.iter().map(|desk| CellPos::new(desk.row, desk.col));
    let classroom =
        Classroom::new(file.rows, file.cols, desks).map_err(ClassroomFileError::Classroom)?;

    let mut seen = BTreeSet::<String>::new();
    let mut students = Vec::with_capacity(file.students.len());
    for spec in file.students {
        if spec.name.is_empty() {
            return Err(ClassroomFileError::EmptyStudentName);
        }
        if !seen.insert(spec.name.clone()) {
            return Err(ClassroomFileError::DuplicateStudentName { name: spec.name });
        }

        let mut student = Student::new(spec.name.as_str())
            .with_skill(spec.skill)
            .with_avoid(spec.avoid)
            .with_friends(spec.friends)
            .with_must_next_to(spec.must_next_to)
            .with_must_front(spec.must_front)
            .with_must_back(spec.must_back)
            .with_near_teacher(spec.near_teacher)
            .with_far_teacher(spec.far_teacher);
        if let Some(avatar) = spec.avatar {
            student = student.with_avatar(avatar);
        }
        students.push(student);
    }

    Ok((classroom, students))
}

pub fn load_classroom(
    path: impl AsRef<Path>,
) -> Result<(Classroom, Vec<Student>), ClassroomFileError> {
    let input = fs::read_to_string(path).map_err(ClassroomFileError::Io)?;
    parse_classroom(&input)
}

#[cfg(test)]
mod tests {
    use super::{parse_classroom, ClassroomFileError};
    use crate::model::{CellPos, ClassroomError};

    #[test]
    fn parses_a_full_classroom_file() {
        let input = r#"{
  "rows": 4,
  "cols": 5,
  "teacher_desks": [{ "row": 0, "col": 2 }],
  "students": [
    {
      "name": "Alice",
      "skill": 5,
      "friends": ["Bob"],
      "avoid": ["Eve"],
      "must_back": true
    },
    { "name": "Bob", "avatar": "🦊", "near_teacher": true }
  ]
}"#;

        let (classroom, students) = parse_classroom(input).unwrap();

        assert_eq!(classroom.rows(), 4);
        assert_eq!(classroom.cols(), 5);
        assert!(classroom.is_reserved(CellPos::new(0, 2)));

        assert_eq!(students.len(), 2);
        let alice = &students[0];
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.skill(), 5);
        assert!(alice.befriends("Bob"));
        assert!(alice.avoids("Eve"));
        assert!(alice.must_back());
        assert!(!alice.must_front());

        let bob = &students[1];
        assert_eq!(bob.skill(), 1);
        assert_eq!(bob.avatar(), "🦊");
        assert!(bob.near_teacher());
    }

    #[test]
    fn omitted_fields_default() {
        let input = r#"{ "rows": 2, "cols": 2, "students": [{ "name": "Frank" }] }"#;
        let (classroom, students) = parse_classroom(input).unwrap();

        assert!(classroom.teacher_desks().is_empty());
        let frank = &students[0];
        assert_eq!(frank.skill(), 1);
        assert_eq!(frank.avatar(), "F");
        assert!(frank.friends().is_empty());
    }

    #[test]
    fn rejects_duplicate_student_names() {
        let input = r#"{
  "rows": 2, "cols": 2,
  "students": [{ "name": "Alice" }, { "name": "Alice" }]
}"#;
        match parse_classroom(input) {
            Err(ClassroomFileError::DuplicateStudentName { name }) => assert_eq!(name, "Alice"),
            other => panic!("expected duplicate-name error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_student_names() {
        let input = r#"{ "rows": 2, "cols": 2, "students": [{ "name": "" }] }"#;
        assert!(matches!(parse_classroom(input), Err(ClassroomFileError::EmptyStudentName)));
    }

    #[test]
    fn surfaces_model_validation_errors() {
        let input = r#"{ "rows": 2, "cols": 2, "teacher_desks": [{ "row": 5, "col": 0 }] }"#;
        match parse_classroom(input) {
            Err(ClassroomFileError::Classroom(ClassroomError::DeskOutOfBounds {
                desk, ..
            })) => assert_eq!(desk, CellPos::new(5, 0)),
            other => panic!("expected desk-out-of-bounds error, got {other:?}"),
        }
    }

    #[test]
    fn surfaces_json_errors() {
        assert!(matches!(parse_classroom("{"), Err(ClassroomFileError::Json(_))));
    }
}
