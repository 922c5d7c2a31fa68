// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! Runtime contract verification for total-order implementations.
//!
//! A correct `Ord` implementation (or standalone comparator) obeys a small
//! mathematical contract: comparison signs negate under operand swap,
//! strict order is transitive, the zero class matches equality, and absent
//! operands are handled hygienically. None of that is checked by the
//! compiler. This crate falsifies the contract at test time, exhaustively,
//! over three small sample pools you supply:
//!
//! - **lesser** - values strictly below everything in the other two pools,
//! - **equal** - at least two mutually equal but distinct values,
//! - **greater** - values strictly above everything in the other two pools.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   pool.rs    │────▶│ verifier.rs  │────▶│   checks/    │
//! │ (Provider,   │     │ (pipeline    │     │ (one module  │
//! │  three pools)│     │  driver)     │     │  per check)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │ strategy.rs  │     │   error.rs   │
//!                      │ (Natural /   │     │ (structured  │
//!                      │  External)   │     │  failures)   │
//!                      └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ordcheck::{Provider, Verifier};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
//! struct Version(u32);
//!
//! impl ordcheck::AbsentOrd for Version {}
//!
//! Verifier::for_ord(
//!     Provider::of(vec![Version(0), Version(1)]),
//!     Provider::of(vec![Version(42), Version(42)]),
//!     Provider::of(vec![Version(100)]),
//! )
//! .verify();
//! ```
//!
//! On the first falsified property `verify()` panics with a message naming
//! the property and the offending values, which is what the surrounding
//! test framework reports. The checks run in a fixed order, cheapest and
//! most diagnostic first; see [`Verifier`] for the pipeline.
//!
//! The three hygiene checks (equality consistency and the two absent-operand
//! rules) can be individually suppressed through the fluent toggles; the
//! mathematical checks cannot. The verifier samples nothing and proves
//! nothing: it exhaustively falsifies over the finite pools, and the pools
//! should stay small (a handful of elements) because the transitivity
//! checks are cubic.

mod checks;
mod error;
mod pool;
mod role;
mod strategy;
mod verifier;

pub use error::{Misconfiguration, VerifyError, Violation};
pub use pool::Provider;
pub use role::Role;
pub use strategy::{AbsentOrd, Compare, External, Natural};
pub use verifier::Verifier;
