// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! Structured failure types and their rendered messages.
//!
//! Two disjoint kinds of failure come out of a verification run:
//!
//! 1. [`Misconfiguration`] - the test itself is broken: a missing pool, a
//!    pool that is too small, or a pool containing absent elements.
//! 2. [`Violation`] - the type under test is broken: one of the ordered
//!    contract properties was falsified.
//!
//! The distinction matters because the first points at the test author and
//! the second at the implementation being tested.
//!
//! The `Display` output of these types is a public contract: user tests and
//! CI logs match on the exact strings, so changing them is a breaking change.
//! Offending operands are carried pre-rendered (their `Debug` output captured
//! at failure time) so the error type stays free of borrows.

use std::fmt;

use crate::role::Role;

/// A programmer error in the test configuration, detected before any
/// contract property is exercised. Never suppressible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Misconfiguration {
    /// No provider was supplied for the role.
    MissingProvider { role: Role },
    /// The provider produced an absent sequence instead of a list.
    MissingInstances { role: Role },
    /// The provider produced fewer elements than the role requires.
    TooFewInstances { role: Role, minimum: usize },
    /// The provider produced a sequence containing an absent element.
    AbsentElement { role: Role },
}

impl fmt::Display for Misconfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Misconfiguration::MissingProvider { role } => {
                write!(f, "provider for {} instances cannot be null", role)
            }
            Misconfiguration::MissingInstances { role } => {
                write!(f, "provided {} instances cannot be null", role)
            }
            Misconfiguration::TooFewInstances { role, minimum } => {
                write!(
                    f,
                    "provided {} instances cannot have fewer elements than {}",
                    role, minimum
                )
            }
            Misconfiguration::AbsentElement { role } => {
                write!(f, "provided {} instances cannot contain null elements", role)
            }
        }
    }
}

impl std::error::Error for Misconfiguration {}

/// A falsified contract property of the type under test.
///
/// The variants appear in pipeline order; the engine reports the first one
/// it finds and stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The ordering's zero class does not coincide with equality on the
    /// `Equal` pool.
    ConsistencyWithEquals,
    /// An instance claims equality with the absent value.
    EqualToAbsent { role: Role, instance: String },
    /// Comparing an instance against the absent value returned a result
    /// instead of panicking.
    NoPanicOnCompareToAbsent { role: Role, instance: String },
    /// One comparison direction panicked while the reverse direction
    /// returned a value. `first` is the panicking side's left operand.
    PanicAsymmetry { first: String, second: String },
    /// The signs of the two comparison directions are not mutual negations.
    NotTotalOrder,
    /// A `(lesser, equal, greater)` triple is not in strictly ascending
    /// order under the comparison.
    NotTransitive {
        lesser: String,
        equal: String,
        greater: String,
    },
    /// Two elements of the `Equal` pool do not compare as equal.
    ItemsNotEqual { first: String, second: String },
    /// Equality fails to propagate across a triple of the `Equal` pool:
    /// both outer elements equal the pivot, yet not each other.
    EqualityNotTransitive {
        first: String,
        second: String,
        third: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::ConsistencyWithEquals => {
                f.write_str("consistency with equals missing")
            }
            Violation::EqualToAbsent { role, instance } => {
                write!(f, "provided {} instance {} is equal to null", role, instance)
            }
            Violation::NoPanicOnCompareToAbsent { role, instance } => {
                write!(
                    f,
                    "provided {} instance {} compared to null should throw an exception",
                    role, instance
                )
            }
            Violation::PanicAsymmetry { first, second } => {
                write!(
                    f,
                    "comparing {} to {} threw an exception but {} to {} did not",
                    first, second, second, first
                )
            }
            Violation::NotTotalOrder => {
                f.write_str("instances do not implement a total order")
            }
            Violation::NotTransitive {
                lesser,
                equal,
                greater,
            } => {
                write!(
                    f,
                    "instances {}, {}, {} are not transitive",
                    lesser, equal, greater
                )
            }
            Violation::ItemsNotEqual { first, second } => {
                write!(
                    f,
                    "items {} and {} are not equal while they should be",
                    first, second
                )
            }
            Violation::EqualityNotTransitive {
                first,
                second,
                third,
            } => {
                write!(
                    f,
                    "equality is not transitive: {a} equals {c}, {b} equals {c}, \
                     but {a} does not equal {b}",
                    a = first,
                    b = second,
                    c = third
                )
            }
        }
    }
}

impl std::error::Error for Violation {}

/// The outcome of a failed verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    Misconfiguration(Misconfiguration),
    Violation(Violation),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::Misconfiguration(inner) => inner.fmt(f),
            VerifyError::Violation(inner) => inner.fmt(f),
        }
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VerifyError::Misconfiguration(inner) => Some(inner),
            VerifyError::Violation(inner) => Some(inner),
        }
    }
}

impl From<Misconfiguration> for VerifyError {
    fn from(inner: Misconfiguration) -> Self {
        VerifyError::Misconfiguration(inner)
    }
}

impl From<Violation> for VerifyError {
    fn from(inner: Violation) -> Self {
        VerifyError::Violation(inner)
    }
}

/// Render an operand for inclusion in a failure message.
///
/// Captured eagerly so errors own their text and outlive the borrowed pools.
pub(crate) fn render<T: fmt::Debug>(value: &T) -> String {
    format!("{:?}", value)
}
