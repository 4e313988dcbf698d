//! Concurrency and thread safety tests

use std::sync::Arc;
use std::thread;

use v6canon::{CanonicalizeConfig, DEMO_CASES, canonicalize, process_address};

#[test]
fn concurrent_canonicalize_same_input() {
    let input = "1111:2222:0000:0000:5555:0000:0000:8888";

    let handles: Vec<_> = (0..10)
        .map(|_| thread::spawn(move || canonicalize(input).expect("canonicalize should succeed")))
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for (i, result) in results.iter().enumerate() {
        assert_eq!(
            result, "1111:2222::5555:0:0:8888",
            "Thread {i} produced different canonical text",
        );
    }
}

#[test]
fn concurrent_reference_cases_with_shared_config() {
    let config = Arc::new(CanonicalizeConfig::default());

    let handles: Vec<_> = DEMO_CASES
        .iter()
        .copied()
        .map(|case| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                (0..200)
                    .map(|_| process_address(case.input, &config).map(|a| a.canonical))
                    .all(|out| out.as_deref() == Ok(case.expected))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert!(handle.join().unwrap(), "case {i} diverged under concurrency");
    }
}

#[test]
fn concurrent_failures_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                if i % 2 == 0 {
                    canonicalize("0000:0000:0000:0000:0000:0000:0000:0000").is_ok()
                } else {
                    canonicalize("0000:0000:0000").is_err()
                }
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
