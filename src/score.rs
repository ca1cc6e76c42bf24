// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seating quality scoring.
//!
//! The score is a single scalar: a fixed baseline plus the sum of per-student
//! local contributions (neighbor bonuses/penalties, teacher-distance terms,
//! row-constraint penalties), saturated into a fixed display range. Scoring is
//! a pure read over the seating; it never mutates and never fails.

use crate::model::{Classroom, Seating};

/// Starting value before any per-student contribution.
pub const BASE_SCORE: f64 = 10.0;

/// Saturating display range for the final score.
pub const SCORE_MIN: f64 = 1.0;
pub const SCORE_MAX: f64 = 10.0;

const AVOID_PENALTY: f64 = 1.0;
const FRIEND_BONUS: f64 = 0.5;
const REQUIRED_ADJACENCY_BONUS: f64 = 1.0;
const ROW_CONSTRAINT_PENALTY: f64 = 1.0;

/// Scores a seating against the classroom's constraints.
///
/// Deterministic for a given seating content, independent of how the seating
/// was built. Neighbor terms are counted once per direction: mutual
/// friendship between adjacent students contributes from both sides, while a
/// one-sided avoidance penalizes only from the avoiding student's side.
///
/// An empty seating scores exactly [`BASE_SCORE`].
pub fn score_seating(classroom: &Classroom, seating: &Seating) -> f64 {
    debug_assert_eq!(seating.rows(), classroom.rows());
    debug_assert_eq!(seating.cols(), classroom.cols());

    let last_row = classroom.rows() - 1;
    let mut score = BASE_SCORE;

    for (cell, student) in seating.occupied() {
        for neighbor_cell in classroom.neighbors(cell) {
            let Some(neighbor) = seating.occupant(neighbor_cell) else {
                continue;
            };
            if student.avoids(neighbor.name()) {
                score -= AVOID_PENALTY;
            }
            if student.befriends(neighbor.name()) {
                score += FRIEND_BONUS;
            }
            if student.requires_next_to(neighbor.name()) {
                score += REQUIRED_ADJACENCY_BONUS;
            }
        }

        for desk in classroom.teacher_desks() {
            let dist = cell.manhattan_distance(*desk);
            if student.near_teacher() {
                score += 1.0 / (dist as f64 + 1.0);
            }
            if student.far_teacher() {
                score -= 1.0 / (dist as f64 + 1.0);
            }
        }

        if student.must_front() && cell.row() != 0 {
            score -= ROW_CONSTRAINT_PENALTY;
        }
        if student.must_back() && cell.row() != last_row {
            score -= ROW_CONSTRAINT_PENALTY;
        }
    }

    score.clamp(SCORE_MIN, SCORE_MAX)
}
