//! Signal handle and emission machinery.
//!
//! This module groups the emitter-side types: the user-facing [`Signal`]
//! handle, the [`DeliveryPolicy`] it is constructed with, and the dispatch
//! routines that run one emission against a registry snapshot.
//!
//! ## Contents
//! - [`Signal`] typed pub/sub handle (registry + fixed delivery policy)
//! - [`DeliveryPolicy`] how one emission reaches the listeners
//! - `dispatch` sequential and concurrent emission runners (crate-private)
//!
//! ## Quick wiring
//! ```text
//! Signal::emit(ctx, payload)
//!      ├─ Inert       ─► SignalError::EmitUnsupported (nothing runs)
//!      ├─ Sequential  ─► dispatch::run_sequential (inline, in order)
//!      └─ Concurrent  ─► dispatch::run_concurrent (spawn per listener, join all)
//! ```

pub(crate) mod dispatch;

mod policy;
mod signal;

pub use policy::DeliveryPolicy;
pub use signal::Signal;
