// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! The comparison abstraction the engine runs against.
//!
//! The verifier never cares whether a type is ordered through its own [`Ord`]
//! implementation or through a standalone comparator. Both are funnelled
//! through [`Compare`], which exposes a single sign-only operation. The
//! second operand is optional: `None` stands in for the absent value, the
//! operand against which a well-behaved comparison must panic.
//!
//! A comparison is allowed to panic at any time. The engine decides per
//! check whether a panic is an expected outcome (comparison against absent),
//! an observation that must be symmetric (connexity), or simply propagates.

use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Behaviour of a value toward the absent operand.
///
/// Rust has no null, so the two hygiene rules around null operands need an
/// explicit seam. The defaults encode the healthy behaviour - equality with
/// absent answers `false`, comparison with absent panics - which makes a
/// conforming implementation a one-liner:
///
/// ```
/// # use ordcheck::AbsentOrd;
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct Version(u32);
///
/// impl AbsentOrd for Version {}
/// ```
///
/// Implementations under test that mishandle null operands override the
/// defaults, which is exactly what the verifier exists to catch.
pub trait AbsentOrd {
    /// Whether this value claims equality with the absent value.
    fn eq_absent(&self) -> bool {
        false
    }

    /// Compare this value against the absent value.
    ///
    /// Returning instead of panicking is a contract violation the verifier
    /// reports.
    fn cmp_absent(&self) -> Ordering {
        panic!("comparison against an absent operand")
    }
}

macro_rules! impl_absent_ord {
    ($($ty:ty),* $(,)?) => {
        $(impl AbsentOrd for $ty {})*
    };
}

impl_absent_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, String, &str,
);

/// Sign-only comparison over values of `T`, with an optional second operand.
///
/// The engine consumes this trait alone; it never inspects which variant is
/// behind it.
pub trait Compare<T> {
    /// Compare `first` against `second`, where `None` is the absent value.
    ///
    /// May panic; the caller decides whether the panic is observable data
    /// or a plain failure.
    fn compare(&self, first: &T, second: Option<&T>) -> Ordering;
}

/// The type's own ordering, with absent-operand behaviour taken from
/// [`AbsentOrd`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord + AbsentOrd> Compare<T> for Natural {
    fn compare(&self, first: &T, second: Option<&T>) -> Ordering {
        match second {
            Some(second) => first.cmp(second),
            None => first.cmp_absent(),
        }
    }
}

/// An injected standalone comparator.
pub struct External<F>(pub F);

impl<T, F> Compare<T> for External<F>
where
    F: Fn(&T, Option<&T>) -> Ordering,
{
    fn compare(&self, first: &T, second: Option<&T>) -> Ordering {
        (self.0)(first, second)
    }
}

/// Run a comparison and capture a panic as an outcome instead of unwinding.
pub(crate) fn capture<R>(run: impl FnOnce() -> R) -> Result<R, ()> {
    panic::catch_unwind(AssertUnwindSafe(run)).map_err(drop)
}

/// Silences the panic hook for the lifetime of the guard.
///
/// Checks that treat panics as data would otherwise spray backtraces onto
/// stderr on every healthy run. The hook is process-wide state, so the
/// bookkeeping is too: guards share a counted slot, the first active guard
/// saves the hook and the last one to drop restores it. Guards from
/// different threads may overlap freely.
pub(crate) struct QuietPanics {
    _private: (),
}

struct HookSlot {
    active: usize,
    saved: Option<Box<dyn Fn(&panic::PanicHookInfo<'_>) + Sync + Send + 'static>>,
}

static HOOK_SLOT: Mutex<HookSlot> = Mutex::new(HookSlot {
    active: 0,
    saved: None,
});

fn hook_slot() -> MutexGuard<'static, HookSlot> {
    HOOK_SLOT.lock().unwrap_or_else(PoisonError::into_inner)
}

impl QuietPanics {
    pub(crate) fn install() -> Self {
        let mut slot = hook_slot();
        if slot.active == 0 {
            slot.saved = Some(panic::take_hook());
            panic::set_hook(Box::new(|_| {}));
        }
        slot.active += 1;
        Self { _private: () }
    }
}

impl Drop for QuietPanics {
    fn drop(&mut self) {
        let mut slot = hook_slot();
        slot.active -= 1;
        if slot.active == 0 {
            if let Some(saved) = slot.saved.take() {
                panic::set_hook(saved);
            }
        }
    }
}
