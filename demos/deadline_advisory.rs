//! # Example: deadline_advisory
//!
//! Cooperative cancellation: deadlines are visible to listeners, never enforced.
//!
//! Demonstrates how to:
//! - Attach a deadline to a `Context` with `with_timeout`.
//! - Let one listener respect the deadline (race its work against `ctx.cancelled()`).
//! - Let another listener ignore the context and simply finish late.
//! - Verify `emit` still waits for both and still succeeds.
//!
//! ## Flow
//! ```text
//! ctx = Context::new().with_timeout(100ms)
//! emit(ctx, payload)
//!   ├─► [polite]   select { work(250ms) | ctx.cancelled() } ─► stops at ~100ms
//!   └─► [stubborn] sleep(250ms), then checks ctx            ─► "finished late"
//!
//! emit returns Ok after ~250ms — the deadline never aborted anyone.
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example deadline_advisory
//! ```

use std::time::{Duration, Instant};

use signalfan::{Context, ListenerFn, Signal};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let signal = Signal::<&'static str>::new();

    // 1. A polite listener: races its work against the context
    signal.add_listener(ListenerFn::arc(
        |ctx: Context, payload: &'static str| async move {
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(250)) => {
                    println!("[polite] finished {payload:?} in time");
                }
                _ = ctx.cancelled() => {
                    println!("[polite] deadline hit, abandoning {payload:?}");
                }
            }
        },
    ));

    // 2. A stubborn listener: ignores the context until the work is done
    signal.add_listener(ListenerFn::arc(
        |ctx: Context, payload: &'static str| async move {
            tokio::time::sleep(Duration::from_millis(250)).await;
            if ctx.is_cancelled() {
                println!("[stubborn] finished {payload:?} late, deadline already passed");
            } else {
                println!("[stubborn] finished {payload:?} in time");
            }
        },
    ));

    // 3. Emit with a 100ms deadline; both listeners still run to completion
    let ctx = Context::new().with_timeout(Duration::from_millis(100));
    let started = Instant::now();
    signal.emit(&ctx, "reindex").await?;
    let elapsed = started.elapsed();

    // 4. The deadline shaped what listeners observed, not what emit did
    println!("[main] emit returned Ok after {elapsed:?}");
    assert!(
        elapsed >= Duration::from_millis(250),
        "emit waited for the stubborn listener"
    );

    Ok(())
}
