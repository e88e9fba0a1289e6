//! Dispatch edges: the inert base signal and the executor requirements of
//! the two delivery strategies.

use signalfan::{Context, Signal, SignalError};

mod common;
use common::{new_log, noop, recorder, snapshot};

#[tokio::test]
async fn test_inert_emit_always_fails_and_invokes_nothing() {
    let log = new_log::<u8>();
    let signal = Signal::<u8>::inert();
    signal.add_listener(recorder(&log));

    for payload in [1, 2] {
        let err = signal.emit(&Context::new(), payload).await.unwrap_err();
        assert!(matches!(err, SignalError::EmitUnsupported));
        assert_eq!(err.as_label(), "emit_unsupported");
    }

    assert!(snapshot(&log).is_empty(), "inert emission must not reach listeners");
    assert_eq!(signal.len(), 1, "the registry itself keeps working");
}

#[test]
fn test_inert_registry_operations_still_work() {
    let signal = Signal::<u8>::inert();

    assert_eq!(signal.add_listener(noop()), 1);
    assert_eq!(signal.add_listener_keyed(noop(), "K").unwrap(), 2);
    assert_eq!(signal.remove_listener("K").unwrap(), 1);

    signal.reset();
    assert!(signal.is_empty());
}

#[test]
fn test_concurrent_emit_without_a_runtime_reports_dispatch_failure() {
    let signal = Signal::<u8>::new();
    signal.add_listener(noop());

    // futures' executor has no tokio runtime to spawn listener tasks onto
    let err = futures::executor::block_on(signal.emit(&Context::new(), 1)).unwrap_err();
    assert!(matches!(err, SignalError::Dispatch { .. }));
    assert_eq!(err.as_label(), "dispatch_failed");
}

#[test]
fn test_sequential_emit_runs_on_any_executor() {
    let log = new_log::<u8>();
    let signal = Signal::<u8>::sequential();
    signal.add_listener(recorder(&log));

    futures::executor::block_on(signal.emit(&Context::new(), 3)).unwrap();
    assert_eq!(snapshot(&log), [3]);
}
