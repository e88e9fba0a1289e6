//! Error types used by the signal engine.
//!
//! This module defines a single error enum:
//!
//! - [`SignalError`] — failures reported by registry operations and by `emit`.
//!
//! All failures are returned as values to the immediate caller; nothing in the
//! engine panics on a contract violation. The type provides helper methods
//! (`as_label`, `as_message`) for logging/metrics.
//!
//! Listener code that panics during an emission is *not* caught or converted
//! here: a panicking listener is a programming error in that listener, and the
//! unwind reaches the emitting caller.

use std::sync::Arc;
use thiserror::Error;

/// # Errors produced by the signal engine.
///
/// Registry failures (`DuplicateKey`, `KeyNotFound`) leave the registry
/// unchanged. `EmitUnsupported` and `Dispatch` are reported before any
/// listener is invoked.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SignalError {
    /// A keyed registration collided with a live registration holding the same key.
    #[error("duplicate listener key: {key}")]
    DuplicateKey {
        /// The rejected key.
        key: Arc<str>,
    },

    /// No live registration holds the given key.
    #[error("listener key not found: {key}")]
    KeyNotFound {
        /// The key that matched nothing.
        key: Arc<str>,
    },

    /// `emit` was invoked on an inert signal, which has no delivery behavior.
    #[error("emit is not supported on an inert signal")]
    EmitUnsupported,

    /// Concurrent delivery could not construct its dispatch (no ambient
    /// Tokio runtime to spawn listener tasks onto).
    #[error("dispatch failed: {reason}")]
    Dispatch {
        /// What the runtime reported when the spawn handle was resolved.
        reason: String,
    },
}

impl SignalError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use signalfan::SignalError;
    ///
    /// let err = SignalError::DuplicateKey { key: "worker".into() };
    /// assert_eq!(err.as_label(), "duplicate_key");
    ///
    /// let err = SignalError::EmitUnsupported;
    /// assert_eq!(err.as_label(), "emit_unsupported");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SignalError::DuplicateKey { .. } => "duplicate_key",
            SignalError::KeyNotFound { .. } => "key_not_found",
            SignalError::EmitUnsupported => "emit_unsupported",
            SignalError::Dispatch { .. } => "dispatch_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SignalError::DuplicateKey { key } => format!("duplicate key: {key}"),
            SignalError::KeyNotFound { key } => format!("unknown key: {key}"),
            SignalError::EmitUnsupported => "emit unsupported".to_string(),
            SignalError::Dispatch { reason } => format!("dispatch: {reason}"),
        }
    }
}
