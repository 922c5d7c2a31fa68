// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! Pool roles and their size requirements.

use std::fmt;

/// The intended relative position of a sample pool.
///
/// Every pool handed to the verifier is labelled with one of these roles.
/// The role fixes what the engine may assume about the pool's elements:
/// every `Lesser` element sits strictly below every `Equal` element, which
/// in turn sits strictly below every `Greater` element, and all `Equal`
/// elements are mutually equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Lesser,
    Equal,
    Greater,
}

impl Role {
    /// Minimum number of elements a pool with this role must supply.
    ///
    /// `Equal` needs two because equality-consistency is only observable
    /// on pairs that are equal without being the same element.
    pub fn minimum_size(self) -> usize {
        match self {
            Role::Lesser | Role::Greater => 1,
            Role::Equal => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Lesser => "lesser",
            Role::Equal => "equal",
            Role::Greater => "greater",
        };
        f.write_str(name)
    }
}
