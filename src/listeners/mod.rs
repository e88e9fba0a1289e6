//! # Listener abstractions and storage.
//!
//! This module provides the listener-side types:
//! - [`Listener`] - trait for implementing async listeners
//! - [`ListenerFn`] - function-backed listener implementation
//! - [`ListenerRef`] - shared reference to a listener (`Arc<dyn Listener<T>>`)
//! - `ListenerRegistry` - crate-private ordered storage behind [`Signal`](crate::Signal)

mod listener;
mod listener_fn;
mod registry;

pub use listener::{Listener, ListenerRef};
pub use listener_fn::ListenerFn;

pub(crate) use registry::ListenerRegistry;
