//! # Example: sequential_order
//!
//! Strict ordering with sequential delivery.
//!
//! Demonstrates how to:
//! - Build a signal with sequential delivery (`Signal::sequential`).
//! - Register listeners whose side effects must interleave by emission.
//! - Observe the listener-major order `[1, 1, 2, 2, 3, 3]`.
//!
//! ## Flow
//! ```text
//! emit(1) ──► alpha(1) ──► beta(1)     (inline, registration order)
//! emit(2) ──► alpha(2) ──► beta(2)
//! emit(3) ──► alpha(3) ──► beta(3)
//!
//! combined observation log: [1, 1, 2, 2, 3, 3]
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example sequential_order
//! ```

use std::sync::{Arc, Mutex};

use signalfan::{Context, ListenerFn, Signal};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a sequential signal: listeners run inline, in registration order
    let signal = Signal::<u32>::sequential();

    // 2. Register two listeners appending to one shared log
    let log = Arc::new(Mutex::new(Vec::new()));
    for tag in ["alpha", "beta"] {
        let log = Arc::clone(&log);
        signal.add_listener(ListenerFn::arc(move |_ctx: Context, v: u32| {
            let log = Arc::clone(&log);
            async move {
                println!("[{tag}] observed {v}");
                log.lock().unwrap().push(v);
            }
        }));
    }

    // 3. Emit 1, 2, 3 — each emission completes fully before the next starts
    let ctx = Context::new();
    for v in 1..=3 {
        signal.emit(&ctx, v).await?;
    }

    // 4. The combined log interleaves by emission, never by listener
    let observed = log.lock().unwrap().clone();
    println!("[main] combined log: {observed:?}");
    assert_eq!(observed, [1, 1, 2, 2, 3, 3]);

    Ok(())
}
