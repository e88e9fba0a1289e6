//! # Signal: a typed pub/sub handle with a fixed delivery policy.
//!
//! [`Signal`] combines one listener registry with one [`DeliveryPolicy`],
//! chosen at construction. Any number of tasks may register, remove, reset,
//! and emit concurrently on clones of the same signal.
//!
//! ## Architecture
//! ```text
//! Signal<T> ──► registry snapshot (under read lock, then released)
//!                   │
//!     Sequential:   └─► L1.on_emit() … Ln.on_emit()     (inline, in order)
//!     Concurrent:   └─► spawn L1 … spawn Ln ─► join all (waits for slowest)
//!     Inert:        └─► SignalError::EmitUnsupported    (nothing runs)
//! ```
//!
//! ## Properties
//! - **Cloneable**: clones share the same registry and policy (internally `Arc`-backed).
//! - **Snapshot emission**: listeners added or removed mid-emission affect
//!   the next emission, never the one in flight.
//! - **Lock-free listener execution**: the registry lock is released before
//!   any listener runs, so a blocked listener cannot stall mutations or new
//!   emissions.

use std::sync::Arc;

use crate::context::Context;
use crate::error::SignalError;
use crate::listeners::{ListenerRef, ListenerRegistry};
use crate::signals::dispatch;
use crate::signals::policy::DeliveryPolicy;

/// Typed pub/sub handle: ordered listener registry plus a delivery policy.
///
/// # Example
/// ```
/// use signalfan::{Context, ListenerFn, Signal};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), signalfan::SignalError> {
///     let signal = Signal::<u32>::sequential();
///
///     signal.add_listener(ListenerFn::arc(|_ctx: Context, v: u32| async move {
///         println!("observed {v}");
///     }));
///
///     signal.emit(&Context::new(), 7).await?;
///     Ok(())
/// }
/// ```
pub struct Signal<T: Send + 'static> {
    registry: Arc<ListenerRegistry<T>>,
    policy: DeliveryPolicy,
}

impl<T: Send + 'static> Signal<T> {
    /// Creates a signal with concurrent delivery (the default).
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(DeliveryPolicy::Concurrent)
    }

    /// Creates a signal with sequential delivery.
    #[must_use]
    pub fn sequential() -> Self {
        Self::with_policy(DeliveryPolicy::Sequential)
    }

    /// Creates an inert signal: the registry works normally, but
    /// [`Signal::emit`] always reports [`SignalError::EmitUnsupported`].
    ///
    /// Useful for composition: a wrapping type can share the registry surface
    /// while supplying its own delivery behavior, and a stray direct `emit`
    /// surfaces as an error instead of silently doing nothing.
    ///
    /// # Example
    /// ```
    /// use signalfan::{Context, ListenerFn, Signal, SignalError};
    ///
    /// let signal = Signal::<u8>::inert();
    /// signal.add_listener(ListenerFn::arc(|_ctx: Context, _v: u8| async {}));
    /// assert_eq!(signal.len(), 1);
    ///
    /// let err = tokio_test::block_on(signal.emit(&Context::new(), 1)).unwrap_err();
    /// assert!(matches!(err, SignalError::EmitUnsupported));
    /// ```
    #[must_use]
    pub fn inert() -> Self {
        Self::with_policy(DeliveryPolicy::Inert)
    }

    /// Creates a signal with an explicit delivery policy.
    #[must_use]
    pub fn with_policy(policy: DeliveryPolicy) -> Self {
        Self {
            registry: Arc::new(ListenerRegistry::new()),
            policy,
        }
    }

    /// Returns the delivery policy fixed at construction.
    #[must_use]
    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    /// Registers an unkeyed listener at the end of the current order.
    ///
    /// Returns the new number of live registrations. Unkeyed listeners cannot
    /// be removed individually; only [`Signal::reset`] discards them.
    pub fn add_listener(&self, listener: ListenerRef<T>) -> usize {
        self.registry.push(listener)
    }

    /// Registers a listener under a unique key, at the end of the current order.
    ///
    /// Returns the new number of live registrations, or
    /// [`SignalError::DuplicateKey`] when a live registration already holds
    /// `key` (the registry is left unchanged, nothing is replaced).
    ///
    /// # Example
    /// ```
    /// use signalfan::{Context, ListenerFn, Signal, SignalError};
    ///
    /// let signal = Signal::<u8>::new();
    /// signal
    ///     .add_listener_keyed(ListenerFn::arc(|_ctx: Context, _v: u8| async {}), "worker")
    ///     .unwrap();
    ///
    /// let err = signal
    ///     .add_listener_keyed(ListenerFn::arc(|_ctx: Context, _v: u8| async {}), "worker")
    ///     .unwrap_err();
    /// assert!(matches!(err, SignalError::DuplicateKey { .. }));
    /// assert_eq!(signal.len(), 1);
    /// ```
    pub fn add_listener_keyed(
        &self,
        listener: ListenerRef<T>,
        key: impl Into<Arc<str>>,
    ) -> Result<usize, SignalError> {
        self.registry.insert(listener, key.into())
    }

    /// Removes the listener registered under `key`, preserving the relative
    /// order of the rest.
    ///
    /// Returns the new number of live registrations, or
    /// [`SignalError::KeyNotFound`] when no live registration holds `key`.
    /// An emission already in flight still delivers to the removed listener;
    /// the next one does not.
    pub fn remove_listener(&self, key: &str) -> Result<usize, SignalError> {
        self.registry.remove(key)
    }

    /// Current number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True when no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Atomically discards every registration, keyed and unkeyed.
    ///
    /// Subsequent emissions touch zero listeners. Idempotent.
    pub fn reset(&self) {
        self.registry.clear();
    }
}

impl<T: Clone + Send + 'static> Signal<T> {
    /// Broadcasts one payload to every listener registered right now.
    ///
    /// The registry is snapshotted once at the start; the lock is released
    /// before any listener runs. Each listener receives `ctx` and an owned
    /// copy of `payload`.
    ///
    /// ### Per policy
    /// - **Sequential**: listeners are awaited inline in registration order;
    ///   returns after the last one. Works on any executor.
    /// - **Concurrent**: one task per listener on the ambient Tokio runtime;
    ///   returns once all of them finish, even when `ctx`'s deadline elapses
    ///   first. Overlapping emissions on the same signal are independent and
    ///   wait only for their own listeners.
    /// - **Inert**: [`SignalError::EmitUnsupported`], zero invocations.
    ///
    /// ### Errors
    /// Fails only when the dispatch itself cannot be carried out
    /// ([`SignalError::Dispatch`]: concurrent delivery with no ambient
    /// runtime) or on an inert signal. A listener observing an expired
    /// context is not an emission failure.
    pub async fn emit(&self, ctx: &Context, payload: T) -> Result<(), SignalError> {
        match self.policy {
            DeliveryPolicy::Inert => Err(SignalError::EmitUnsupported),
            DeliveryPolicy::Sequential => {
                let snapshot = self.registry.snapshot();
                tracing::trace!(listeners = snapshot.len(), policy = "sequential", "emit");
                dispatch::run_sequential(ctx, payload, snapshot).await;
                Ok(())
            }
            DeliveryPolicy::Concurrent => {
                let snapshot = self.registry.snapshot();
                tracing::trace!(listeners = snapshot.len(), policy = "concurrent", "emit");
                dispatch::run_concurrent(ctx, payload, snapshot).await
            }
        }
    }
}

impl<T: Send + 'static> Clone for Signal<T> {
    /// Returns a handle to the **same** signal: one shared registry, one policy.
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            policy: self.policy,
        }
    }
}

impl<T: Send + 'static> Default for Signal<T> {
    /// Returns [`Signal::new`] (concurrent delivery).
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("policy", &self.policy)
            .field("listeners", &self.len())
            .finish()
    }
}
