// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! Consistency of the ordering's zero class with equality.

use std::cmp::Ordering;

use crate::error::Violation;
use crate::strategy::Compare;

/// Check that `a == b` holds exactly when `compare(a, b)` is zero.
///
/// Restricted to the `Equal` pool: it is the only pool whose elements are
/// known to be mutually equal, so it is the only place where both sides of
/// the biconditional are exercised. The first element is the pivot.
pub(crate) fn consistency_with_equals<T: PartialEq>(
    equal: &[T],
    compare: &dyn Compare<T>,
) -> Result<(), Violation> {
    // size check has already guaranteed at least two elements
    let pivot = &equal[0];
    for candidate in equal {
        let by_equality = pivot == candidate;
        let by_comparison = compare.compare(pivot, Some(candidate)) == Ordering::Equal;
        if by_equality != by_comparison {
            return Err(Violation::ConsistencyWithEquals);
        }
    }
    Ok(())
}
