// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use smol_str::SmolStr;

/// A student on the roster.
///
/// Preference sets reference other students by name. Names are the join key
/// for every relational constraint and are never validated against the
/// roster: a name that matches no seated student simply never matches a
/// neighbor. Names must be unique within a seating session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: SmolStr,
    skill: i32,
    avatar: SmolStr,
    avoid: BTreeSet<SmolStr>,
    friends: BTreeSet<SmolStr>,
    must_next_to: BTreeSet<SmolStr>,
    must_front: bool,
    must_back: bool,
    near_teacher: bool,
    far_teacher: bool,
}

impl Student {
    /// Creates a student with every preference defaulted.
    ///
    /// The avatar defaults to the uppercased first character of the name.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        let name = name.into();
        let avatar = default_avatar(&name);
        Self {
            name,
            skill: 1,
            avatar,
            avoid: BTreeSet::new(),
            friends: BTreeSet::new(),
            must_next_to: BTreeSet::new(),
            must_front: false,
            must_back: false,
            near_teacher: false,
            far_teacher: false,
        }
    }

    pub fn with_skill(mut self, skill: i32) -> Self {
        self.skill = skill;
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<SmolStr>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn with_avoid<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.avoid = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_friends<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.friends = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_must_next_to<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.must_next_to = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_must_front(mut self, must_front: bool) -> Self {
        self.must_front = must_front;
        self
    }

    pub fn with_must_back(mut self, must_back: bool) -> Self {
        self.must_back = must_back;
        self
    }

    pub fn with_near_teacher(mut self, near_teacher: bool) -> Self {
        self.near_teacher = near_teacher;
        self
    }

    pub fn with_far_teacher(mut self, far_teacher: bool) -> Self {
        self.far_teacher = far_teacher;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill(&self) -> i32 {
        self.skill
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn avoid(&self) -> &BTreeSet<SmolStr> {
        &self.avoid
    }

    pub fn friends(&self) -> &BTreeSet<SmolStr> {
        &self.friends
    }

    pub fn must_next_to(&self) -> &BTreeSet<SmolStr> {
        &self.must_next_to
    }

    pub fn must_front(&self) -> bool {
        self.must_front
    }

    pub fn must_back(&self) -> bool {
        self.must_back
    }

    pub fn near_teacher(&self) -> bool {
        self.near_teacher
    }

    pub fn far_teacher(&self) -> bool {
        self.far_teacher
    }

    pub fn avoids(&self, name: &str) -> bool {
        self.avoid.contains(name)
    }

    pub fn befriends(&self, name: &str) -> bool {
        self.friends.contains(name)
    }

    pub fn requires_next_to(&self, name: &str) -> bool {
        self.must_next_to.contains(name)
    }
}

fn default_avatar(name: &str) -> SmolStr {
    match name.chars().next() {
        Some(ch) => ch.to_uppercase().collect::<String>().into(),
        None => SmolStr::default(),
    }
}
