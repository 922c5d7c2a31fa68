// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! Transitivity checks: strict order across the pools and equality within
//! the `Equal` pool.

use std::cmp::Ordering;
use std::fmt;

use crate::checks::Pools;
use crate::error::{render, Violation};
use crate::strategy::Compare;

/// Check strict ascending order over every `(lesser, equal, greater)`
/// triple.
///
/// All three sign conditions are demanded at once: equal above lesser,
/// greater above equal, and greater above lesser. The third is what makes
/// the witnessed strictness transitive.
pub(crate) fn strict_order<T: fmt::Debug>(
    pools: Pools<'_, T>,
    compare: &dyn Compare<T>,
) -> Result<(), Violation> {
    for lesser in pools.lesser {
        for equal in pools.equal {
            for greater in pools.greater {
                let equal_over_lesser = compare.compare(equal, Some(lesser));
                let greater_over_equal = compare.compare(greater, Some(equal));
                let greater_over_lesser = compare.compare(greater, Some(lesser));

                let ascending = equal_over_lesser == Ordering::Greater
                    && greater_over_equal == Ordering::Greater
                    && greater_over_lesser == Ordering::Greater;

                if !ascending {
                    return Err(Violation::NotTransitive {
                        lesser: render(lesser),
                        equal: render(equal),
                        greater: render(greater),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Check that equality propagates across triples of the `Equal` pool.
///
/// For positions `i < j < k` holding `a`, `b`, `c`: if `a` equals `c` and
/// `b` equals `c`, then `a` must equal `b`. Pools shorter than three are
/// padded by repeated self-concatenation so the check is never silently
/// skipped.
pub(crate) fn equality<T: fmt::Debug>(
    equal: &[T],
    compare: &dyn Compare<T>,
) -> Result<(), Violation> {
    let mut padded: Vec<&T> = equal.iter().collect();
    while padded.len() < 3 {
        padded.extend(equal.iter());
    }

    for i in 0..padded.len() {
        for j in (i + 1)..padded.len() {
            for k in (j + 1)..padded.len() {
                let (a, b, c) = (padded[i], padded[j], padded[k]);

                if compare.compare(a, Some(c)) != Ordering::Equal {
                    return Err(Violation::ItemsNotEqual {
                        first: render(a),
                        second: render(c),
                    });
                }
                if compare.compare(b, Some(c)) != Ordering::Equal {
                    return Err(Violation::ItemsNotEqual {
                        first: render(b),
                        second: render(c),
                    });
                }
                if compare.compare(a, Some(b)) != Ordering::Equal {
                    return Err(Violation::EqualityNotTransitive {
                        first: render(a),
                        second: render(b),
                        third: render(c),
                    });
                }
            }
        }
    }
    Ok(())
}
