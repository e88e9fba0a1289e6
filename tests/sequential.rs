//! Sequential delivery: strict registration order, inline on the emitter's
//! task, snapshot isolation for mutations landing mid-emission.

use std::sync::Arc;
use std::time::Duration;

use signalfan::{Context, ListenerFn, Signal};

mod common;
use common::{new_log, recorder, snapshot};

#[tokio::test]
async fn test_emission_follows_registration_order() {
    let log = new_log::<(&'static str, u32)>();
    let signal = Signal::<u32>::sequential();

    for tag in ["first", "second", "third"] {
        let log = Arc::clone(&log);
        signal.add_listener(ListenerFn::arc(move |_ctx: Context, v: u32| {
            let log = Arc::clone(&log);
            async move {
                log.lock().unwrap().push((tag, v));
            }
        }));
    }

    let ctx = Context::new();
    signal.emit(&ctx, 1).await.unwrap();
    signal.emit(&ctx, 2).await.unwrap();

    // listener-major within an emission, emission-major across emissions
    assert_eq!(
        snapshot(&log),
        [
            ("first", 1),
            ("second", 1),
            ("third", 1),
            ("first", 2),
            ("second", 2),
            ("third", 2),
        ]
    );
}

#[tokio::test]
async fn test_two_listeners_interleave_by_emission() {
    let log = new_log::<u32>();
    let signal = Signal::<u32>::sequential();
    signal.add_listener(recorder(&log));
    signal.add_listener(recorder(&log));

    let ctx = Context::new();
    for v in [1, 2, 3] {
        signal.emit(&ctx, v).await.unwrap();
    }

    assert_eq!(snapshot(&log), [1, 1, 2, 2, 3, 3]);
}

#[tokio::test(start_paused = true)]
async fn test_invocation_completes_fully_before_the_next() {
    let log = new_log::<&'static str>();
    let signal = Signal::<&'static str>::sequential();

    {
        let log = Arc::clone(&log);
        signal.add_listener(ListenerFn::arc(move |_ctx: Context, _v: &'static str| {
            let log = Arc::clone(&log);
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                log.lock().unwrap().push("slow finished");
            }
        }));
    }
    {
        let log = Arc::clone(&log);
        signal.add_listener(ListenerFn::arc(move |_ctx: Context, _v: &'static str| {
            let log = Arc::clone(&log);
            async move {
                log.lock().unwrap().push("fast ran");
            }
        }));
    }

    signal.emit(&Context::new(), "payload").await.unwrap();

    // concurrent delivery would flip this order
    assert_eq!(snapshot(&log), ["slow finished", "fast ran"]);
}

#[tokio::test]
async fn test_mutations_mid_emission_apply_to_the_next_round() {
    let log = new_log::<&'static str>();
    let signal = Signal::<u8>::sequential();

    // first listener rewires the signal while the emission is running
    {
        let handle = signal.clone();
        let log = Arc::clone(&log);
        signal.add_listener(ListenerFn::arc(move |_ctx: Context, _v: u8| {
            let handle = handle.clone();
            let log = Arc::clone(&log);
            async move {
                log.lock().unwrap().push("mutator");
                let late = {
                    let log = Arc::clone(&log);
                    ListenerFn::arc(move |_ctx: Context, _v: u8| {
                        let log = Arc::clone(&log);
                        async move {
                            log.lock().unwrap().push("late");
                        }
                    })
                };
                // second round onwards these collide / find nothing; ignore
                let _ = handle.add_listener_keyed(late, "late");
                let _ = handle.remove_listener("victim");
            }
        }));
    }
    {
        let log = Arc::clone(&log);
        signal
            .add_listener_keyed(
                ListenerFn::arc(move |_ctx: Context, _v: u8| {
                    let log = Arc::clone(&log);
                    async move {
                        log.lock().unwrap().push("victim");
                    }
                }),
                "victim",
            )
            .unwrap();
    }

    let ctx = Context::new();

    // round 1 runs the snapshot taken before the mutation: the victim still
    // fires, the late listener does not
    signal.emit(&ctx, 1).await.unwrap();
    assert_eq!(snapshot(&log), ["mutator", "victim"]);
    assert_eq!(signal.len(), 2, "mutator + late remain registered");

    // round 2 sees the mutated registry
    signal.emit(&ctx, 2).await.unwrap();
    assert_eq!(snapshot(&log), ["mutator", "victim", "mutator", "late"]);
}

#[tokio::test]
async fn test_listener_can_remove_itself_mid_emission() {
    let log = new_log::<&'static str>();
    let signal = Signal::<u8>::sequential();

    {
        let handle = signal.clone();
        let log = Arc::clone(&log);
        signal
            .add_listener_keyed(
                ListenerFn::arc(move |_ctx: Context, _v: u8| {
                    let handle = handle.clone();
                    let log = Arc::clone(&log);
                    async move {
                        log.lock().unwrap().push("ran");
                        let _ = handle.remove_listener("once");
                    }
                }),
                "once",
            )
            .unwrap();
    }

    let ctx = Context::new();
    signal.emit(&ctx, 1).await.unwrap();
    signal.emit(&ctx, 2).await.unwrap();

    assert_eq!(snapshot(&log), ["ran"], "self-removal takes effect after its round");
    assert!(signal.is_empty());
}

#[tokio::test]
async fn test_emit_with_no_listeners_is_ok() {
    let signal = Signal::<u8>::sequential();
    assert!(signal.is_empty());
    signal.emit(&Context::new(), 9).await.unwrap();
}

#[tokio::test]
#[should_panic(expected = "listener blew up")]
async fn test_listener_panic_unwinds_through_emit() {
    let signal = Signal::<u8>::sequential();
    signal.add_listener(ListenerFn::arc(|_ctx: Context, _v: u8| async {
        panic!("listener blew up");
    }));

    let _ = signal.emit(&Context::new(), 1).await;
}
