//! Shared-instance identity tests for the process-wide registry.
//!
//! These are the only tests that touch `MarksRegistry::instance()`; the
//! contract tests in `registry_tests.rs` use fresh registries so global
//! state cannot leak between cases.

use std::thread;

use marks_registry::{ExamMark, MarksRegistry};

#[test]
fn instance_returns_the_same_registry_every_time() {
    let first = MarksRegistry::instance();
    let second = MarksRegistry::instance();

    assert!(std::ptr::eq(first, second));
}

#[test]
fn concurrent_access_observes_one_instance() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| MarksRegistry::instance() as *const MarksRegistry as usize))
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread should not panic"))
        .collect();

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn state_is_shared_across_handles() {
    let first = MarksRegistry::instance();
    let second = MarksRegistry::instance();

    first.capture(ExamMark::new("330000001", "SHRD301", 80.0));
    second.set_mode(true);

    assert_eq!(first.average_for("330000001"), 80.0);
}
