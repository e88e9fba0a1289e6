//! # Example: concurrent_join
//!
//! Fan-out with join-all semantics under concurrent delivery.
//!
//! Demonstrates how to:
//! - Build the default concurrent signal (`Signal::new`).
//! - Register listeners of very different speeds.
//! - Watch `emit` wait for the slowest listener, not the sum of all.
//!
//! ## Flow
//! ```text
//! emit(payload)
//!   ├─► spawn fast   (50ms)  ┐
//!   ├─► spawn medium (150ms) ├─ run overlapped
//!   └─► spawn slow   (300ms) ┘
//!                      │
//!           join all ──┴─► emit returns after ~300ms (slowest), not ~500ms (sum)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example concurrent_join
//! ```

use std::time::{Duration, Instant};

use signalfan::{Context, ListenerFn, Signal};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Surface the library's emission traces (optional)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // 2. Default construction is concurrent delivery
    let signal = Signal::<&'static str>::new();

    // 3. Register three listeners with staggered runtimes
    for (tag, millis) in [("fast", 50u64), ("medium", 150), ("slow", 300)] {
        signal.add_listener(ListenerFn::arc(
            move |_ctx: Context, payload: &'static str| async move {
                tokio::time::sleep(Duration::from_millis(millis)).await;
                println!("[{tag}] finished handling {payload:?} after {millis}ms");
            },
        ));
    }

    // 4. Emit once and time the join
    let started = Instant::now();
    signal.emit(&Context::new(), "deploy").await?;
    let elapsed = started.elapsed();

    println!("[main] emit returned after {elapsed:?}");
    assert!(
        elapsed >= Duration::from_millis(300),
        "emit waits for the slowest listener"
    );
    assert!(
        elapsed < Duration::from_millis(500),
        "listeners ran overlapped, not summed"
    );

    Ok(())
}
