//! # Delivery policies for signal emission.
//!
//! [`DeliveryPolicy`] determines how one emission reaches the registered
//! listeners. It is fixed per signal at construction and never swapped.
//!
//! - [`DeliveryPolicy::Concurrent`] listeners run on their own tasks, emission waits for all of them (default).
//! - [`DeliveryPolicy::Sequential`] listeners run one after another on the emitter's task, in registration order.
//! - [`DeliveryPolicy::Inert`] no delivery at all; `emit` always fails.
//!
//! ## Choosing the right policy
//!
//! **Independent side effects** (metrics, notifications, cache invalidation):
//! ```text
//! DeliveryPolicy::Concurrent    → slowest listener bounds the emission, not the sum
//! ```
//!
//! **Order-sensitive observation** (logs, pipelines, deterministic tests):
//! ```text
//! DeliveryPolicy::Sequential    → strict registration order, no spawning, any executor
//! ```
//!
//! **Registry-only composition** (a wrapping type supplies real delivery):
//! ```text
//! DeliveryPolicy::Inert         → emit is a reported error, never a silent no-op
//! ```

/// Policy controlling how an emission is delivered to listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// One task per listener, emission waits until every task finishes (default).
    Concurrent,
    /// Listeners awaited inline in registration order, each completing before the next starts.
    Sequential,
    /// No delivery behavior: registry operations work, `emit` always reports failure.
    Inert,
}

impl Default for DeliveryPolicy {
    /// Returns [`DeliveryPolicy::Concurrent`].
    fn default() -> Self {
        DeliveryPolicy::Concurrent
    }
}
