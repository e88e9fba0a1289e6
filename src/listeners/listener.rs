//! # Listener abstraction.
//!
//! This module defines the [`Listener`] trait (async, context-aware) and the
//! common handle type [`ListenerRef`], an `Arc<dyn Listener<T>>` suitable for
//! sharing between a signal and in-flight emissions.
//!
//! A listener receives a [`Context`] and an owned payload on every emission.
//! Checking the context is optional and cooperative: the engine never aborts
//! a running listener, it only waits for it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::context::Context;

/// Shared handle to a listener (`Arc<dyn Listener<T>>`).
pub type ListenerRef<T> = Arc<dyn Listener<T>>;

/// # Asynchronous subscriber invoked on every emission.
///
/// Implementors get the emission's [`Context`] and an owned copy of the
/// payload. A listener interested in deadlines should check
/// [`Context::is_cancelled`] to distinguish "finished in time" from
/// "finished late"; one that is not can ignore the context entirely.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use signalfan::{Context, Listener};
///
/// struct Audit;
///
/// #[async_trait]
/// impl Listener<u64> for Audit {
///     async fn on_emit(&self, ctx: Context, payload: u64) {
///         if ctx.is_cancelled() {
///             return;
///         }
///         println!("audit: {payload}");
///     }
///
///     fn label(&self) -> &str {
///         "audit"
///     }
/// }
/// ```
#[async_trait]
pub trait Listener<T: Send + 'static>: Send + Sync + 'static {
    /// Handles one emitted payload.
    ///
    /// Called once per emission this listener was registered for. Under
    /// concurrent delivery it runs on its own task; under sequential delivery
    /// it runs inline on the emitter's task, in registration order.
    async fn on_emit(&self, ctx: Context, payload: T);

    /// Returns the listener name used in logs.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit").
    /// The default uses `type_name::<Self>()`, which can be verbose - override
    /// it when possible.
    fn label(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
