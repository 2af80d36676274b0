#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Tests against the process-wide instance. Only one test in this binary
//! calls `init`, since the instance outlives every test.

use std::thread;
use std::time::{Duration, Instant};

use faultline_core::{logger, FaultlineError, LoggerFacade};

#[test]
fn test_global_returns_same_instance_across_threads() {
    let handles: Vec<_> = (0..32)
        .map(|_| thread::spawn(|| LoggerFacade::global() as *const LoggerFacade as usize))
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = addresses[0];
    assert!(addresses.iter().all(|a| *a == first));
    assert!(std::ptr::eq(logger(), LoggerFacade::global()));
}

#[test]
fn test_global_lifecycle() {
    let log = logger();

    // before init: flush is a no-op and logging falls back
    let started = Instant::now();
    log.flush();
    assert!(started.elapsed() < Duration::from_millis(500));
    log.info("before init", None);

    log.init("", "test").unwrap();
    assert_eq!(log.init("", "test"), Err(FaultlineError::AlreadyInitialized));
    assert_eq!(log.environment(), "test");

    log.error("after init", None);
    log.flush();
}
