// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! The check pipeline, one module per property family.
//!
//! Each check is a standalone function from validated pools to
//! `Result<(), Violation>`; the engine strings them together in the fixed
//! pipeline order and stops at the first failure. Configuration checks are
//! separate ([`config`]) because they run on raw, unvalidated pools and
//! produce [`Misconfiguration`](crate::Misconfiguration) rather than
//! violations.

pub(crate) mod absent;
pub(crate) mod config;
pub(crate) mod connexity;
pub(crate) mod consistency;
pub(crate) mod transitivity;

use crate::role::Role;

/// Borrowed view over the three validated pools.
///
/// Iteration order over roles is fixed (lesser, equal, greater) so that
/// reported counterexamples are deterministic.
pub(crate) struct Pools<'a, T> {
    pub lesser: &'a [T],
    pub equal: &'a [T],
    pub greater: &'a [T],
}

// Hand-written so the view copies even when `T` itself does not; a derive
// would bound `T: Copy` and the engine hands the same view to every check.
impl<T> Clone for Pools<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Pools<'_, T> {}

impl<'a, T> Pools<'a, T> {
    pub(crate) fn by_role(&self) -> [(Role, &'a [T]); 3] {
        [
            (Role::Lesser, self.lesser),
            (Role::Equal, self.equal),
            (Role::Greater, self.greater),
        ]
    }
}
