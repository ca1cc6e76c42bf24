// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Greedy clustered placement.
//!
//! Students are committed one at a time, each into the empty seat that
//! maximizes the seating score at that moment. Once anything is placed,
//! later candidates are restricted to the empty neighbors of already-placed
//! seats, so related students cluster without lookahead or backtracking.
//! The heuristic is order-dependent and makes no optimality guarantee; the
//! worst outcome is a low score or leftover unplaced students.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::model::{CellPos, Classroom, Seating, Student};
use crate::score::score_seating;

/// Places `students`, in order, into empty assignable cells of `seating`.
///
/// The assignable cell list is shuffled once up front with the caller's rng,
/// which is the only source of randomness: a fixed seed reproduces the exact
/// assignment. Ties keep the first candidate encountered. Students that no
/// longer fit (no empty assignable cell) are left unplaced.
pub fn greedy_place(
    classroom: &Classroom,
    seating: &mut Seating,
    students: &[Student],
    rng: &mut StdRng,
) {
    let mut seats = classroom.assignable_cells();
    seats.shuffle(rng);

    let mut placed = BTreeSet::<CellPos>::new();

    for student in students {
        let cluster = placed
            .iter()
            .flat_map(|&seat| classroom.neighbors(seat))
            .filter(|&cell| !classroom.is_reserved(cell) && seating.occupant(cell).is_none())
            .collect::<Vec<_>>();
        let candidates: &[CellPos] = if cluster.is_empty() { &seats } else { &cluster };

        let mut best: Option<(f64, CellPos)> = None;
        for &cell in candidates {
            if seating.occupant(cell).is_some() {
                continue;
            }
            let trial = TrialPlacement::begin(seating, cell, student.clone());
            let score = score_seating(classroom, trial.seating());
            drop(trial);

            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, cell));
            }
        }

        if let Some((_, cell)) = best {
            seating.place(cell, student.clone());
            placed.insert(cell);
        }
    }
}

/// A tentative placement that is rolled back when dropped.
///
/// Keeps the place/score/remove sequence balanced on every exit path out of
/// the trial loop.
struct TrialPlacement<'a> {
    seating: &'a mut Seating,
    cell: CellPos,
}

impl<'a> TrialPlacement<'a> {
    fn begin(seating: &'a mut Seating, cell: CellPos, student: Student) -> Self {
        let displaced = seating.place(cell, student);
        debug_assert!(displaced.is_none(), "trial cell must be empty");
        Self { seating, cell }
    }

    fn seating(&self) -> &Seating {
        self.seating
    }
}

impl Drop for TrialPlacement<'_> {
    fn drop(&mut self) {
        self.seating.clear(self.cell);
    }
}
