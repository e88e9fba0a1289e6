//! # Example: keyed_listeners
//!
//! Dynamically add and remove listeners at runtime using registration keys.
//!
//! Demonstrates how to:
//! - Register listeners under unique keys with `add_listener_keyed`.
//! - Handle the `DuplicateKey` / `KeyNotFound` outcomes as values.
//! - Remove a listener by key while the signal keeps emitting.
//! - Wipe everything with `reset`.
//!
//! ## Flow
//! ```text
//! add_listener_keyed("metrics") ─► ok, size 1
//! add_listener_keyed("audit")   ─► ok, size 2
//! add_listener_keyed("audit")   ─► Err(DuplicateKey), size still 2
//! emit(1)                       ─► metrics + audit run
//! remove_listener("audit")      ─► ok, size 1
//! remove_listener("audit")      ─► Err(KeyNotFound)
//! emit(2)                       ─► only metrics runs
//! reset()                       ─► size 0
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example keyed_listeners
//! ```

use signalfan::{Context, ListenerFn, ListenerRef, Signal, SignalError};

fn printer(tag: &'static str) -> ListenerRef<u64> {
    ListenerFn::arc(move |_ctx: Context, v: u64| async move {
        println!("[{tag}] handled event {v}");
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Surface the registry's debug traces (optional)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let signal = Signal::<u64>::new();

    // 2. Register two keyed listeners
    println!("[main] registering 'metrics' and 'audit'");
    signal.add_listener_keyed(printer("metrics"), "metrics")?;
    signal.add_listener_keyed(printer("audit"), "audit")?;

    // 3. A second registration under 'audit' is rejected, nothing is replaced
    match signal.add_listener_keyed(printer("audit-2"), "audit") {
        Err(SignalError::DuplicateKey { key }) => {
            println!("[main] rejected duplicate registration under {key:?}");
        }
        other => panic!("expected DuplicateKey, got {other:?}"),
    }
    assert_eq!(signal.len(), 2);

    // 4. Both listeners see the first event
    signal.emit(&Context::new(), 1).await?;

    // 5. Drop 'audit'; removing it twice reports KeyNotFound
    let remaining = signal.remove_listener("audit")?;
    println!("[main] removed 'audit', {remaining} listener(s) left");
    if let Err(e) = signal.remove_listener("audit") {
        println!("[main] second removal reports: {e} (label: {})", e.as_label());
    }

    // 6. Only 'metrics' sees the second event
    signal.emit(&Context::new(), 2).await?;

    // 7. Reset wipes keyed and unkeyed listeners alike
    signal.reset();
    assert!(signal.is_empty());
    println!("[main] reset: registry drained");

    Ok(())
}
