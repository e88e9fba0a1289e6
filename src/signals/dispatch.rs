//! # Run one emission against a registry snapshot.
//!
//! Executes a single emission under one of the two delivery strategies.
//! Both take the emission's [`Context`], the payload, and the snapshot taken
//! when the emission began; registry mutations landing after the snapshot
//! never affect an emission already in flight.
//!
//! ## Strategy flow
//!
//! ```text
//! Sequential:
//!   for each listener (registration order):
//!       listener.on_emit(ctx, payload).await      ← inline, fully before the next
//!
//! Concurrent:
//!   Handle::try_current()  ── Err → SignalError::Dispatch (nothing ran)
//!   for each listener: JoinSet::spawn_on(listener.on_emit(ctx, payload))
//!   drain join_next() until the set is empty      ← waits for the slowest
//!   re-raise the first listener panic, if any
//! ```
//!
//! ## Rules
//! - The registry lock is **not** held here; the snapshot is an owned copy.
//! - Cancellation is advisory: neither strategy inspects the context and
//!   neither aborts a listener, deadlines only change what listeners observe.
//! - The payload is cloned per listener; the final listener receives the
//!   original (one clone is elided).
//! - A listener panic is not isolated: sequential delivery unwinds through
//!   the emitter directly, concurrent delivery re-raises on the emitting task
//!   after the remaining listeners finish.

use std::any::Any;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinSet;

use crate::context::Context;
use crate::error::SignalError;
use crate::listeners::ListenerRef;

/// Awaits every listener inline, in registration order.
///
/// Runs on whatever executor polls it; never spawns.
pub(crate) async fn run_sequential<T>(ctx: &Context, payload: T, snapshot: Vec<ListenerRef<T>>)
where
    T: Clone + Send + 'static,
{
    if let Some((last, rest)) = snapshot.split_last() {
        for listener in rest {
            listener.on_emit(ctx.clone(), payload.clone()).await;
        }
        last.on_emit(ctx.clone(), payload).await;
    }
}

/// Spawns one task per listener onto the ambient runtime and waits for all
/// of them, regardless of the context's state.
///
/// Fails with [`SignalError::Dispatch`] before anything runs when no Tokio
/// runtime is available to spawn onto.
pub(crate) async fn run_concurrent<T>(
    ctx: &Context,
    payload: T,
    snapshot: Vec<ListenerRef<T>>,
) -> Result<(), SignalError>
where
    T: Clone + Send + 'static,
{
    let handle = Handle::try_current().map_err(|e| SignalError::Dispatch {
        reason: e.to_string(),
    })?;

    let mut set = JoinSet::new();
    if let Some((last, rest)) = snapshot.split_last() {
        for listener in rest {
            let listener = Arc::clone(listener);
            let ctx = ctx.clone();
            let payload = payload.clone();
            set.spawn_on(async move { listener.on_emit(ctx, payload).await }, &handle);
        }
        let last = Arc::clone(last);
        let ctx = ctx.clone();
        set.spawn_on(async move { last.on_emit(ctx, payload).await }, &handle);
    }

    // Drain the whole set before surfacing a panic: emission waits for the
    // slowest listener even when a sibling blew up.
    let mut panicked: Option<Box<dyn Any + Send>> = None;
    while let Some(joined) = set.join_next().await {
        if let Err(err) = joined {
            if err.is_panic() && panicked.is_none() {
                panicked = Some(err.into_panic());
            }
        }
    }
    if let Some(cause) = panicked {
        std::panic::resume_unwind(cause);
    }
    Ok(())
}
