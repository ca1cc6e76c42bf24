// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in demo classroom and roster, shared by the CLI demo mode and tests.

use super::classroom::{CellPos, Classroom};
use super::student::Student;

/// A 4x5 classroom with the teacher desk at (0, 2).
pub fn demo_classroom() -> Classroom {
    Classroom::new(4, 5, [CellPos::new(0, 2)]).expect("demo classroom is valid")
}

pub fn demo_roster() -> Vec<Student> {
    vec![
        Student::new("Alice")
            .with_skill(5)
            .with_friends(["Bob"])
            .with_avoid(["Eve"])
            .with_must_back(true),
        Student::new("Bob").with_skill(3).with_friends(["Alice"]).with_must_front(true),
        Student::new("Charlie").with_skill(2).with_friends(["Eve"]).with_near_teacher(true),
        Student::new("David").with_skill(4).with_avoid(["Alice"]).with_far_teacher(true),
        Student::new("Eve").with_friends(["Charlie"]).with_avoid(["Bob"]),
        Student::new("Frank").with_skill(2),
    ]
}
