// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! Fixture types shared across the integration suites.
//!
//! Each fixture models one specific way an ordering implementation can be
//! right or wrong. They are deliberately tiny; the interesting part is
//! which contract rule each one breaks.

// not every suite exercises every fixture
#![allow(dead_code)]

use std::cmp::Ordering;

use ordcheck::AbsentOrd;

/// A lawful implementation: orders by value, equality matches the zero
/// class, absent operands take the healthy defaults.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Correct(pub i32);

impl AbsentOrd for Correct {}

/// A fixed-point decimal whose equality is sensitive to trailing zeros
/// while its ordering is not: `42.0` and `42.00` compare equal but are not
/// equal. Models the classic consistency-with-equals offender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    digits: i64,
    scale: u32,
}

impl Decimal {
    pub fn new(digits: i64, scale: u32) -> Self {
        Self { digits, scale }
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        // cross-multiply onto a common scale so 420/1 == 4200/2
        let lhs = self.digits * 10i64.pow(other.scale);
        let rhs = other.digits * 10i64.pow(self.scale);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AbsentOrd for Decimal {}

/// Claims equality with the absent value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EqualToAbsent(pub i32);

impl AbsentOrd for EqualToAbsent {
    fn eq_absent(&self) -> bool {
        true
    }
}

/// Answers an ordering for the absent operand instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReturnsOnAbsent(pub i32);

impl AbsentOrd for ReturnsOnAbsent {
    fn cmp_absent(&self) -> Ordering {
        Ordering::Greater
    }
}

/// Panics when it appears on the left of a comparison while armed; the
/// reverse direction stays calm, breaking panic symmetry.
#[derive(Debug, Clone)]
pub struct Grenade {
    pub value: i32,
    pub armed: bool,
}

impl Grenade {
    pub fn armed(value: i32) -> Self {
        Self { value, armed: true }
    }

    pub fn calm(value: i32) -> Self {
        Self {
            value,
            armed: false,
        }
    }
}

impl PartialEq for Grenade {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Grenade {}

impl Ord for Grenade {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.armed {
            panic!("armed grenade compared");
        }
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Grenade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AbsentOrd for Grenade {}
