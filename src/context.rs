//! # Execution context threaded through every listener invocation.
//!
//! [`Context`] carries cancellation, an optional deadline, and arbitrary
//! caller-supplied values from the emitter to each listener. The signal engine
//! passes it through opaquely: it never inspects, mutates, or acts on it.
//!
//! ## Cancellation is advisory
//! Nothing in the engine aborts a running listener. A listener that wants to
//! shorten its own work polls [`Context::is_cancelled`] or awaits
//! [`Context::cancelled`]; one that ignores the context simply runs to
//! completion, and emission waits for it either way.
//!
//! ## Derivation
//! ```text
//! parent ──► child()              same deadline/values, child token
//!        ──► with_timeout(d)      deadline = now + d (clamped to parent's)
//!        ──► with_deadline(at)    deadline = at      (clamped to parent's)
//!        ──► with_value(v)        values + v (same-type value shadows)
//! ```
//!
//! Derived contexts hold a **child token**: cancelling the parent cancels
//! every derived context, while cancelling a derived context never affects
//! the parent.
//!
//! ## Rules
//! - The deadline never fires the token; it only changes what
//!   [`Context::is_cancelled`] and [`Context::cancelled`] observe.
//! - Values are typed by their Rust type: one slot per type, written once at
//!   derivation, immutable afterwards.
//! - Awaiting [`Context::cancelled`] on a context with a deadline arms a Tokio
//!   timer and therefore needs a runtime; the synchronous methods do not.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Shared carrier for cancellation, deadline, and caller-supplied values.
///
/// Cheap to clone; clones observe the same token, deadline, and values.
/// Passed by value to every listener invocation.
///
/// # Example
/// ```
/// use signalfan::Context;
///
/// #[derive(Debug, PartialEq)]
/// struct RequestId(u64);
///
/// let ctx = Context::new().with_value(RequestId(7));
/// assert_eq!(ctx.value::<RequestId>().as_deref(), Some(&RequestId(7)));
/// assert!(!ctx.is_cancelled());
///
/// ctx.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Clone)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
    values: Arc<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Context {
    /// Creates a root context: fresh token, no deadline, no values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: None,
            values: Arc::new(HashMap::new()),
        }
    }

    /// Creates a root context backed by an existing cancellation token.
    ///
    /// The context shares the given token: cancelling either cancels both.
    /// Call [`Context::child`] on the result first when that coupling is not
    /// wanted.
    #[must_use]
    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
            values: Arc::new(HashMap::new()),
        }
    }

    /// Derives a child context: child token, same deadline and values.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
            values: Arc::clone(&self.values),
        }
    }

    /// Derives a child context that expires `timeout` from now.
    ///
    /// Equivalent to `with_deadline(Instant::now() + timeout)`.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derives a child context that expires at `deadline`.
    ///
    /// The child never outlives the parent: when the parent already carries an
    /// earlier deadline, that earlier instant wins.
    #[must_use]
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let clamped = match self.deadline {
            Some(parent) => deadline.min(parent),
            None => deadline,
        };
        let mut child = self.child();
        child.deadline = Some(clamped);
        child
    }

    /// Derives a child context carrying `value`, retrievable by its type via
    /// [`Context::value`].
    ///
    /// One slot per Rust type: a later value of the same type shadows the
    /// earlier one for the derived context and everything below it.
    #[must_use]
    pub fn with_value<V>(&self, value: V) -> Self
    where
        V: Send + Sync + 'static,
    {
        let mut values: HashMap<TypeId, Arc<dyn Any + Send + Sync>> = self.values.as_ref().clone();
        values.insert(TypeId::of::<V>(), Arc::new(value));
        let mut child = self.child();
        child.values = Arc::new(values);
        child
    }

    /// Cancels this context and every context derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once the token has fired **or** the deadline has passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        if self.token.is_cancelled() {
            return true;
        }
        matches!(self.deadline, Some(at) if Instant::now() >= at)
    }

    /// Completes when the token fires or the deadline passes, whichever is
    /// first. Completes immediately if either already happened.
    pub async fn cancelled(&self) {
        match self.deadline {
            Some(at) => tokio::select! {
                _ = self.token.cancelled() => {}
                _ = tokio::time::sleep_until(at) => {}
            },
            None => self.token.cancelled().await,
        }
    }

    /// Returns the effective deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the value of type `V` carried by this context, if any.
    #[must_use]
    pub fn value<V>(&self) -> Option<Arc<V>>
    where
        V: Send + Sync + 'static,
    {
        let entry = self.values.get(&TypeId::of::<V>())?;
        Arc::clone(entry).downcast::<V>().ok()
    }
}

impl Default for Context {
    /// Returns [`Context::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("cancelled", &self.is_cancelled())
            .field("deadline", &self.deadline)
            .field("values", &self.values.len())
            .finish()
    }
}
