// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! Sample pool providers.
//!
//! A [`Provider`] is a zero-argument factory for one of the three sample
//! pools. The verifier invokes it exactly once per run, so re-running a
//! verifier re-materialises fresh pools.
//!
//! Internally a materialised pool is `Option<Vec<Option<T>>>`: the outer
//! option models a factory that hands back no sequence at all, the inner
//! options model absent elements. Both shapes are rejected by the
//! configuration checks; the deliberately-broken constructors below exist
//! so that rejection machinery itself can be exercised.

use std::fmt;

/// A pool as the factory produced it, before any validation.
pub(crate) type Instances<T> = Option<Vec<Option<T>>>;

/// Factory for a sample pool of `T`.
pub struct Provider<T> {
    factory: Option<Box<dyn Fn() -> Instances<T>>>,
}

impl<T: 'static> Provider<T> {
    /// A pool built by a user-supplied callable.
    ///
    /// The callable runs once per verification; it is free to build the
    /// values fresh each time.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Vec<T> + 'static,
    {
        Self {
            factory: Some(Box::new(move || {
                Some(factory().into_iter().map(Some).collect())
            })),
        }
    }

    /// A pool of literal values, cloned into every run.
    pub fn of(values: Vec<T>) -> Self
    where
        T: Clone,
    {
        Self {
            factory: Some(Box::new(move || {
                Some(values.iter().cloned().map(Some).collect())
            })),
        }
    }

    /// A pool holding a single absent element.
    ///
    /// Rejected by verification; useful for testing null-element handling.
    pub fn single_absent() -> Self {
        Self {
            factory: Some(Box::new(|| Some(vec![None]))),
        }
    }

    /// A pool with no elements. Rejected by verification.
    pub fn empty() -> Self {
        Self {
            factory: Some(Box::new(|| Some(Vec::new()))),
        }
    }

    /// A factory that produces no sequence at all. Rejected by verification.
    pub fn null_list() -> Self {
        Self {
            factory: Some(Box::new(|| None)),
        }
    }

    /// The absent factory. Rejected by verification.
    pub fn none() -> Self {
        Self { factory: None }
    }
}

impl<T> Provider<T> {
    /// Whether no factory was supplied at all.
    pub(crate) fn is_missing(&self) -> bool {
        self.factory.is_none()
    }

    /// Materialise the pool. Called exactly once per verification run.
    pub(crate) fn create(&self) -> Instances<T> {
        self.factory.as_ref().and_then(|factory| factory())
    }
}

impl<T> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("missing", &self.factory.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_values_come_back_in_order() {
        let provider = Provider::of(vec![3, 1, 2]);
        let pool = provider.create().unwrap();
        assert_eq!(pool, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn literal_values_survive_rematerialisation() {
        let provider = Provider::of(vec![5]);
        assert_eq!(provider.create(), provider.create());
    }

    #[test]
    fn callable_runs_per_materialisation() {
        let provider = Provider::new(|| vec![1, 2]);
        assert_eq!(provider.create().unwrap().len(), 2);
    }

    #[test]
    fn broken_constructors_produce_broken_pools() {
        assert_eq!(Provider::<i32>::single_absent().create(), Some(vec![None]));
        assert_eq!(Provider::<i32>::empty().create(), Some(vec![]));
        assert_eq!(Provider::<i32>::null_list().create(), None);
        assert!(Provider::<i32>::none().is_missing());
    }
}
