// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! The verifier silences the panic hook while it treats panics as data.
//! The hook is process-wide, so concurrent runs must not trample each
//! other's bookkeeping: once the last run finishes, whatever hook the host
//! test suite had installed has to be back in place.

mod common;

use common::Correct;
use ordcheck::{Provider, Verifier};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

static SENTINEL_FIRED: AtomicBool = AtomicBool::new(false);

#[test]
fn concurrent_runs_hand_back_the_panic_hook() {
    panic::set_hook(Box::new(|_| SENTINEL_FIRED.store(true, Ordering::SeqCst)));

    let workers: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..25 {
                    Verifier::for_ord(
                        Provider::of(vec![Correct(0), Correct(1)]),
                        Provider::of(vec![Correct(42), Correct(42)]),
                        Provider::of(vec![Correct(100)]),
                    )
                    .verify();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let _ = panic::catch_unwind(|| panic!("observed"));
    assert!(
        SENTINEL_FIRED.load(Ordering::SeqCst),
        "the hook installed before verification was lost"
    );
    let _ = panic::take_hook();
}
