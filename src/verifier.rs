// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! The verification engine.
//!
//! A [`Verifier`] holds the three pool providers, the comparison strategy
//! and the suppression flags, and drives the check pipeline in its fixed
//! order:
//!
//! 1. configuration checks (never suppressible),
//! 2. consistency with equals,
//! 3. equality with the absent value,
//! 4. comparison with the absent value,
//! 5. connexity / sign antisymmetry,
//! 6. strict-order transitivity,
//! 7. equality transitivity.
//!
//! The pipeline short-circuits on the first failure: the cheap, diagnostic
//! checks run before the cubic ones, so a misconfigured test fails fast
//! with a message about the test rather than slow with a message about the
//! type.

use std::cmp::Ordering;
use std::fmt;

use crate::checks::{absent, config, connexity, consistency, transitivity, Pools};
use crate::error::VerifyError;
use crate::pool::Provider;
use crate::role::Role;
use crate::strategy::{AbsentOrd, Compare, External, Natural};

/// Runtime contract verifier for a total-order relation on `T`.
///
/// Construct with [`Verifier::for_ord`] when `T` orders itself, or with
/// [`Verifier::for_comparator`] when the ordering lives in a standalone
/// comparison function. Suppression toggles chain fluently; [`verify`]
/// terminates the chain.
///
/// ```
/// use ordcheck::{Provider, Verifier};
///
/// Verifier::for_ord(
///     Provider::of(vec![1, 2, 3]),
///     Provider::of(vec![42, 42]),
///     Provider::of(vec![100, 101]),
/// )
/// .verify();
/// ```
///
/// [`verify`]: Verifier::verify
pub struct Verifier<T> {
    strategy: Box<dyn Compare<T>>,
    lesser: Provider<T>,
    equal: Provider<T>,
    greater: Provider<T>,
    suppress_consistent_with_equals: bool,
    suppress_equals_to_null_returns_false: bool,
    suppress_exception_on_compare_to_null: bool,
}

impl<T> Verifier<T>
where
    T: PartialEq + fmt::Debug + AbsentOrd,
{
    /// Verifier for a type carrying its own total order.
    pub fn for_ord(lesser: Provider<T>, equal: Provider<T>, greater: Provider<T>) -> Self
    where
        T: Ord + 'static,
    {
        Self::with_strategy(Box::new(Natural), lesser, equal, greater)
    }

    /// Verifier for an externally supplied comparator.
    ///
    /// The comparator's second operand is `None` for the absent value; the
    /// contract expects it to panic in that case.
    pub fn for_comparator<F>(
        comparator: F,
        lesser: Provider<T>,
        equal: Provider<T>,
        greater: Provider<T>,
    ) -> Self
    where
        F: Fn(&T, Option<&T>) -> Ordering + 'static,
        T: 'static,
    {
        Self::with_strategy(Box::new(External(comparator)), lesser, equal, greater)
    }

    fn with_strategy(
        strategy: Box<dyn Compare<T>>,
        lesser: Provider<T>,
        equal: Provider<T>,
        greater: Provider<T>,
    ) -> Self {
        Self {
            strategy,
            lesser,
            equal,
            greater,
            suppress_consistent_with_equals: false,
            suppress_equals_to_null_returns_false: false,
            suppress_exception_on_compare_to_null: false,
        }
    }

    /// Skip the check that the ordering's zero class coincides with
    /// equality.
    ///
    /// Some orderings are deliberately coarser than equality; suppressing
    /// this check is how such a type documents the fact in its tests.
    pub fn suppress_consistent_with_equals(mut self, suppress: bool) -> Self {
        self.suppress_consistent_with_equals = suppress;
        self
    }

    /// Skip the check that no instance claims equality with the absent
    /// value.
    pub fn suppress_equals_to_null_returns_false(mut self, suppress: bool) -> Self {
        self.suppress_equals_to_null_returns_false = suppress;
        self
    }

    /// Skip the check that comparing against the absent value panics.
    pub fn suppress_exception_on_compare_to_null(mut self, suppress: bool) -> Self {
        self.suppress_exception_on_compare_to_null = suppress;
        self
    }

    /// Run the pipeline, panicking with the first failure's message.
    ///
    /// The panic integrates with the test harness the same way a failed
    /// `assert!` does. Use [`try_verify`](Verifier::try_verify) to inspect
    /// the failure structurally instead.
    #[track_caller]
    pub fn verify(&self) {
        if let Err(error) = self.try_verify() {
            panic!("{}", error);
        }
    }

    /// Run the pipeline, returning the first failure.
    ///
    /// Each invocation re-materialises the pools and starts over.
    pub fn try_verify(&self) -> Result<(), VerifyError> {
        config::provider_present(&self.lesser, Role::Lesser)?;
        config::provider_present(&self.equal, Role::Equal)?;
        config::provider_present(&self.greater, Role::Greater)?;

        // all three pools materialise exactly once, before any check
        let raw_lesser = self.lesser.create();
        let raw_equal = self.equal.create();
        let raw_greater = self.greater.create();

        let lesser = config::validated(raw_lesser, Role::Lesser)?;
        let equal = config::validated(raw_equal, Role::Equal)?;
        let greater = config::validated(raw_greater, Role::Greater)?;

        let pools = Pools {
            lesser: &lesser,
            equal: &equal,
            greater: &greater,
        };
        let strategy = self.strategy.as_ref();

        if !self.suppress_consistent_with_equals {
            consistency::consistency_with_equals(pools.equal, strategy)?;
        }
        if !self.suppress_equals_to_null_returns_false {
            absent::equality_with_absent(pools)?;
        }
        if !self.suppress_exception_on_compare_to_null {
            absent::comparison_with_absent(pools, strategy)?;
        }

        connexity::sign_antisymmetry(pools, strategy)?;
        transitivity::strict_order(pools, strategy)?;
        transitivity::equality(pools.equal, strategy)?;

        Ok(())
    }
}
