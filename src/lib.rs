//! # signalfan
//!
//! **Signalfan** is a typed in-process pub/sub primitive for Rust.
//!
//! A [`Signal`] holds an insertion-ordered registry of listeners and a
//! delivery policy fixed at construction; [`Signal::emit`] fans one payload
//! out to every listener registered at that moment. The crate is designed as
//! a building block: no transport, no persistence, no delivery guarantees
//! beyond "every listener in the snapshot runs once per emission".
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌───────────────┐   ┌───────────────┐   ┌────────────────┐
//!   │  ListenerFn   │   │  ListenerFn   │   │ impl Listener  │
//!   │   (unkeyed)   │   │ (key "cache") │   │  (key "audit") │
//!   └──────┬────────┘   └──────┬────────┘   └──────┬─────────┘
//!          │ add_listener      │ add_listener_keyed│
//!          ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Signal<T>                                                  │
//! │  - ListenerRegistry (insertion-ordered, single RwLock)      │
//! │  - DeliveryPolicy   (Concurrent | Sequential | Inert)       │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │ emit(ctx, payload)
//!                                ▼
//!               registry snapshot (lock released before any listener runs)
//!              ┌────────────────┼──────────────────────┐
//!              ▼                ▼                      ▼
//!   Sequential:          Concurrent:            Inert:
//!   L1 … Ln awaited      one task per listener  SignalError::EmitUnsupported
//!   inline, in order     join all (slowest      (zero invocations)
//!                        bounds the emission)
//! ```
//!
//! ### Emission lifecycle
//! ```text
//! Signal::emit(ctx, payload)
//!   ├─► policy == Inert ─► Err(EmitUnsupported), nothing runs
//!   ├─► snapshot = registry.snapshot()      (read lock, Arc-clones, release)
//!   │
//!   ├─ Sequential:
//!   │    for listener in snapshot (registration order):
//!   │        listener.on_emit(ctx, payload).await    ← fully before the next
//!   │
//!   └─ Concurrent:
//!        Handle::try_current()  ── Err ─► Err(Dispatch), nothing runs
//!        spawn one task per snapshot entry (JoinSet)
//!        drain join_next() until empty               ← waits for the slowest,
//!                                                      deadline notwithstanding
//!
//! Registrations/removals landing after the snapshot affect the next
//! emission, never the one in flight. Cancellation is advisory: listeners
//! observe ctx, the engine never aborts them.
//! ```
//!
//! ## Features
//! | Area          | Description                                                      | Key types / traits                          |
//! |---------------|------------------------------------------------------------------|---------------------------------------------|
//! | **Listeners** | Define listeners as closures or trait impls, optionally keyed.   | [`Listener`], [`ListenerFn`], [`ListenerRef`] |
//! | **Signals**   | Typed handle combining a registry with a fixed delivery policy.  | [`Signal`], [`DeliveryPolicy`]              |
//! | **Context**   | Advisory cancellation, deadline, and caller values per emission. | [`Context`]                                 |
//! | **Errors**    | Typed failures returned as values, never panics.                 | [`SignalError`]                             |
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use signalfan::{Context, ListenerFn, Signal};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), signalfan::SignalError> {
//!     // Sequential delivery: listeners run inline, in registration order.
//!     let signal = Signal::<u32>::sequential();
//!
//!     signal.add_listener(ListenerFn::arc(|_ctx: Context, v: u32| async move {
//!         println!("first: {v}");
//!     }));
//!
//!     signal.add_listener_keyed(
//!         ListenerFn::arc(|ctx: Context, v: u32| async move {
//!             if ctx.is_cancelled() {
//!                 return; // deadline passed while we were queued; skip the work
//!             }
//!             println!("second: {v}");
//!         }),
//!         "audit",
//!     )?;
//!
//!     // The deadline is advisory: listeners may observe it, emit still
//!     // waits for every listener to finish.
//!     let ctx = Context::new().with_timeout(Duration::from_secs(1));
//!     signal.emit(&ctx, 7).await?;
//!
//!     signal.remove_listener("audit")?;
//!     assert_eq!(signal.len(), 1);
//!     Ok(())
//! }
//! ```
mod context;
mod error;
mod listeners;
mod signals;

// ---- Public re-exports ----

pub use context::Context;
pub use error::SignalError;
pub use listeners::{Listener, ListenerFn, ListenerRef};
pub use signals::{DeliveryPolicy, Signal};
