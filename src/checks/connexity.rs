// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! Connexity and antisymmetry of the comparison sign.
//!
//! For every relevant ordered pair the comparison is evaluated in both
//! directions. Each direction may either return an ordering or panic; the
//! panic is captured as data, not treated as a failure of the check itself.
//! The contract then demands that panics are symmetric and that returned
//! signs are mutual negations.

use std::fmt;

use crate::checks::Pools;
use crate::error::{render, Violation};
use crate::strategy::{capture, Compare, QuietPanics};

/// Check `sgn(compare(a, b)) == -sgn(compare(b, a))` over the pair sets
/// (equal, equal), (equal, lesser), (equal, greater), (lesser, greater).
///
/// A pair where both directions panic is symmetric and passes; the sign
/// rule only applies when both directions returned.
pub(crate) fn sign_antisymmetry<T: fmt::Debug>(
    pools: Pools<'_, T>,
    compare: &dyn Compare<T>,
) -> Result<(), Violation> {
    let _quiet = QuietPanics::install();
    let pairs = [
        (pools.equal, pools.equal),
        (pools.equal, pools.lesser),
        (pools.equal, pools.greater),
        (pools.lesser, pools.greater),
    ];

    for (first_pool, second_pool) in pairs {
        for a in first_pool {
            for b in second_pool {
                let forward = capture(|| compare.compare(a, Some(b)));
                let backward = capture(|| compare.compare(b, Some(a)));

                match (forward, backward) {
                    (Err(()), Ok(_)) => {
                        return Err(Violation::PanicAsymmetry {
                            first: render(a),
                            second: render(b),
                        });
                    }
                    (Ok(_), Err(())) => {
                        return Err(Violation::PanicAsymmetry {
                            first: render(b),
                            second: render(a),
                        });
                    }
                    (Ok(ab), Ok(ba)) if ab != ba.reverse() => {
                        return Err(Violation::NotTotalOrder);
                    }
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{External, Natural};
    use std::cmp::Ordering;

    fn view<'a, T>(lesser: &'a [T], equal: &'a [T], greater: &'a [T]) -> Pools<'a, T> {
        Pools {
            lesser,
            equal,
            greater,
        }
    }

    #[test]
    fn natural_integer_order_is_antisymmetric() {
        let (l, e, g) = (vec![1, 2], vec![5, 5], vec![9]);
        assert!(sign_antisymmetry(view(&l, &e, &g), &Natural).is_ok());
    }

    #[test]
    fn one_sided_sign_breaks_the_order() {
        // always answers Less, so both directions agree instead of negating
        let biased = External(|_: &i32, _: Option<&i32>| Ordering::Less);
        let (l, e, g) = (vec![1], vec![5, 5], vec![9]);
        assert_eq!(
            sign_antisymmetry(view(&l, &e, &g), &biased),
            Err(Violation::NotTotalOrder)
        );
    }

    #[test]
    fn one_sided_panic_is_reported_with_both_operands() {
        // panics only when the larger value is on the left
        let trapdoor = External(|a: &i32, b: Option<&i32>| {
            let b = b.unwrap();
            if *a > *b {
                panic!("boom");
            }
            a.cmp(b)
        });
        let (l, e, g) = (vec![1], vec![5, 5], vec![9]);
        let err = sign_antisymmetry(view(&l, &e, &g), &trapdoor).unwrap_err();
        // first pair to trip is equal=5 against lesser=1, with 5 on the left
        assert_eq!(
            err,
            Violation::PanicAsymmetry {
                first: "5".into(),
                second: "1".into()
            }
        );
    }

    #[test]
    fn symmetric_panics_pass() {
        let allergic = External(|a: &i32, b: Option<&i32>| {
            let b = b.unwrap();
            if *a == 5 || *b == 5 {
                panic!("boom");
            }
            a.cmp(b)
        });
        let (l, e, g) = (vec![1], vec![5, 5], vec![9]);
        assert!(sign_antisymmetry(view(&l, &e, &g), &allergic).is_ok());
    }
}
