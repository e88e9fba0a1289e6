//! # Function-backed listener (`ListenerFn`)
//!
//! [`ListenerFn`] wraps a closure `F: Fn(Context, T) -> Fut`, producing a
//! fresh future per invocation. This avoids shared mutable state: each call
//! owns its own state, and anything shared between invocations goes through
//! an explicit `Arc<...>` captured by the closure.
//!
//! ## Example
//! ```
//! use signalfan::{Context, ListenerFn, ListenerRef};
//!
//! let l: ListenerRef<u32> = ListenerFn::arc(|_ctx: Context, v: u32| async move {
//!     println!("observed {v}");
//! });
//!
//! assert!(l.label().contains("closure"));
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::context::Context;
use crate::listeners::listener::Listener;

/// Function-backed listener implementation.
///
/// Wraps a closure that *creates* a new future per emission.
pub struct ListenerFn<F> {
    label: Option<Cow<'static, str>>,
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a [`ListenerRef`](crate::ListenerRef).
    pub fn new(f: F) -> Self {
        Self { label: None, f }
    }

    /// Creates the listener and returns it as a shared handle.
    ///
    /// ## Example
    /// ```
    /// use signalfan::{Context, ListenerFn, ListenerRef};
    ///
    /// let l: ListenerRef<&'static str> = ListenerFn::arc(|_ctx: Context, s: &'static str| async move {
    ///     let _ = s;
    /// });
    /// ```
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }

    /// Attaches a stable label used in logs instead of the closure's type name.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[async_trait]
impl<T, F, Fut> Listener<T> for ListenerFn<F>
where
    T: Send + 'static,
    F: Fn(Context, T) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn on_emit(&self, ctx: Context, payload: T) {
        (self.f)(ctx, payload).await;
    }

    fn label(&self) -> &str {
        match &self.label {
            Some(label) => label,
            None => std::any::type_name::<F>(),
        }
    }
}
