// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{
    export_seating, parse_seating, read_seating, write_seating, SeatingCsvError,
};
use crate::model::{CellPos, Classroom, Seating, Student};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("classcluster-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn cell(row: usize, col: usize) -> CellPos {
    CellPos::new(row, col)
}

#[fixture]
fn classroom() -> Classroom {
    Classroom::new(4, 5, [cell(0, 2)]).unwrap()
}

fn populated(classroom: &Classroom) -> Seating {
    let mut seating = classroom.empty_seating();
    seating.place(
        cell(1, 1),
        Student::new("Alice")
            .with_skill(5)
            .with_friends(["Bob", "Charlie"])
            .with_avoid(["Eve"])
            .with_must_back(true),
    );
    seating.place(cell(1, 2), Student::new("Bob").with_must_front(true).with_avatar("🦊"));
    seating.place(
        cell(3, 4),
        Student::new("Eve").with_near_teacher(true).with_must_next_to(["Alice"]),
    );
    seating
}

#[rstest]
fn export_then_parse_round_trips(classroom: Classroom) {
    let seating = populated(&classroom);

    let encoded = export_seating(&classroom, &seating);
    let decoded = parse_seating(&encoded, &classroom).unwrap();

    assert_eq!(decoded, seating);
}

#[rstest]
fn an_empty_seating_exports_as_empty_fields(classroom: Classroom) {
    let encoded = export_seating(&classroom, &classroom.empty_seating());

    assert_eq!(encoded.lines().count(), 4);
    for line in encoded.lines() {
        assert_eq!(line, ",,,,");
    }
}

#[rstest]
fn records_containing_commas_are_quoted(classroom: Classroom) {
    let seating = populated(&classroom);
    let encoded = export_seating(&classroom, &seating);

    // Alice's friends list is a comma-joined pair, so her record is quoted.
    let alice_line = encoded.lines().nth(1).unwrap();
    assert!(alice_line.contains("\"Alice|5|Eve|Bob,Charlie|"), "got: {alice_line}");
}

#[rstest]
fn unquoted_records_without_commas_parse(classroom: Classroom) {
    let input = ",,,,\n,Frank|2|||false|false||false|false|F,,,\n";
    let seating = parse_seating(input, &classroom).unwrap();

    let frank = seating.occupant(cell(1, 1)).unwrap();
    assert_eq!(frank.name(), "Frank");
    assert_eq!(frank.skill(), 2);
    assert_eq!(frank.avatar(), "F");
}

#[rstest]
fn bools_parse_case_insensitively(classroom: Classroom) {
    // Older exporters wrote Python-style True/False.
    let input = "\"Alice|1|||True|False||False|False|A\",,,,\n";
    let seating = parse_seating(input, &classroom).unwrap();

    let alice = seating.occupant(cell(0, 0)).unwrap();
    assert!(alice.must_front());
    assert!(!alice.must_back());
}

#[rstest]
fn a_blank_avatar_field_falls_back_to_the_default(classroom: Classroom) {
    let input = "\"Alice|1|||false|false||false|false|\",,,,\n";
    let seating = parse_seating(input, &classroom).unwrap();

    assert_eq!(seating.occupant(cell(0, 0)).unwrap().avatar(), "A");
}

#[rstest]
fn short_rows_pad_with_empty_seats(classroom: Classroom) {
    let input = "\n,Frank|1|||false|false||false|false|F\n";
    let seating = parse_seating(input, &classroom).unwrap();

    assert_eq!(seating.occupied_count(), 1);
    assert_eq!(seating.occupant(cell(1, 1)).unwrap().name(), "Frank");
}

#[rstest]
fn trailing_blank_lines_are_ignored(classroom: Classroom) {
    let input = ",,,,\n,,,,\n,,,,\n,,,,\n\n  \n";
    let seating = parse_seating(input, &classroom).unwrap();
    assert!(seating.is_empty());
}

#[rstest]
fn rejects_extra_rows(classroom: Classroom) {
    let input = ",,,,\n,,,,\n,,,,\n,,,,\n,Frank|1|||false|false||false|false|F,,,\n";
    assert!(matches!(
        parse_seating(input, &classroom),
        Err(SeatingCsvError::TooManyRows { rows: 4 })
    ));
}

#[rstest]
fn rejects_extra_columns(classroom: Classroom) {
    let input = ",,,,,\n";
    assert!(matches!(
        parse_seating(input, &classroom),
        Err(SeatingCsvError::TooManyColumns { line: 1, found: 6, cols: 5 })
    ));
}

#[rstest]
fn rejects_an_unclosed_quote(classroom: Classroom) {
    let input = "\"Alice|1|||false|false||false|false|A,,,,\n";
    assert!(matches!(
        parse_seating(input, &classroom),
        Err(SeatingCsvError::UnclosedQuote { line: 1 })
    ));
}

#[rstest]
fn rejects_a_record_with_missing_fields(classroom: Classroom) {
    let input = "Alice|1,,,,\n";
    assert!(matches!(
        parse_seating(input, &classroom),
        Err(SeatingCsvError::FieldCount { line: 1, column: 1, found: 2 })
    ));
}

#[rstest]
fn rejects_a_non_numeric_skill(classroom: Classroom) {
    let input = "\"Alice|high|||false|false||false|false|A\",,,,\n";
    match parse_seating(input, &classroom) {
        Err(SeatingCsvError::InvalidSkill { line: 1, column: 1, value }) => {
            assert_eq!(value, "high");
        }
        other => panic!("expected invalid-skill error, got {other:?}"),
    }
}

#[rstest]
fn rejects_an_unparseable_bool(classroom: Classroom) {
    let input = "\"Alice|1|||maybe|false||false|false|A\",,,,\n";
    match parse_seating(input, &classroom) {
        Err(SeatingCsvError::InvalidBool { line: 1, column: 1, value }) => {
            assert_eq!(value, "maybe");
        }
        other => panic!("expected invalid-bool error, got {other:?}"),
    }
}

#[rstest]
fn rejects_a_student_on_a_teacher_desk(classroom: Classroom) {
    let input = ",,\"Alice|1|||false|false||false|false|A\",,\n";
    assert!(matches!(
        parse_seating(input, &classroom),
        Err(SeatingCsvError::ReservedCell { line: 1, column: 3 })
    ));
}

#[rstest]
fn rejects_an_empty_name(classroom: Classroom) {
    let input = "\"|1|||false|false||false|false|A\",,,,\n";
    assert!(matches!(
        parse_seating(input, &classroom),
        Err(SeatingCsvError::EmptyName { line: 1, column: 1 })
    ));
}

#[rstest]
fn doubled_quotes_round_trip_inside_records(classroom: Classroom) {
    let seating = {
        let mut seating = classroom.empty_seating();
        seating.place(cell(2, 2), Student::new("Mary \"MJ\" Jane").with_friends(["Bob"]));
        seating
    };

    let encoded = export_seating(&classroom, &seating);
    let decoded = parse_seating(&encoded, &classroom).unwrap();

    assert_eq!(decoded, seating);
    assert_eq!(decoded.occupant(cell(2, 2)).unwrap().name(), "Mary \"MJ\" Jane");
}

#[rstest]
fn write_then_read_round_trips_through_a_file(classroom: Classroom) {
    let tmp = TempDir::new("seating-csv");
    let path = tmp.path().join("seating.csv");
    let seating = populated(&classroom);

    write_seating(&path, &classroom, &seating).unwrap();
    let loaded = read_seating(&path, &classroom).unwrap();

    assert_eq!(loaded, seating);
}

#[rstest]
fn read_surfaces_io_errors(classroom: Classroom) {
    let tmp = TempDir::new("seating-csv-missing");
    let path = tmp.path().join("does-not-exist.csv");

    assert!(matches!(read_seating(&path, &classroom), Err(SeatingCsvError::Io(_))));
}
