// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! Hygiene checks around the absent operand.
//!
//! Two widely expected rules: no value is equal to the absent value, and
//! comparing a value against the absent value panics instead of producing
//! an ordering.

use std::fmt;

use crate::checks::Pools;
use crate::error::{render, Violation};
use crate::strategy::{capture, AbsentOrd, Compare, QuietPanics};

/// Check that no element across the three pools claims equality with the
/// absent value.
pub(crate) fn equality_with_absent<T: AbsentOrd + fmt::Debug>(
    pools: Pools<'_, T>,
) -> Result<(), Violation> {
    for (role, pool) in pools.by_role() {
        for instance in pool {
            if instance.eq_absent() {
                return Err(Violation::EqualToAbsent {
                    role,
                    instance: render(instance),
                });
            }
        }
    }
    Ok(())
}

/// Check that comparing any element against the absent value panics.
///
/// A panic is the expected outcome here; a returned ordering, whatever its
/// sign, is the violation.
pub(crate) fn comparison_with_absent<T: fmt::Debug>(
    pools: Pools<'_, T>,
    compare: &dyn Compare<T>,
) -> Result<(), Violation> {
    let _quiet = QuietPanics::install();
    for (role, pool) in pools.by_role() {
        for instance in pool {
            if capture(|| compare.compare(instance, None)).is_ok() {
                return Err(Violation::NoPanicOnCompareToAbsent {
                    role,
                    instance: render(instance),
                });
            }
        }
    }
    Ok(())
}
