//! # Listener registry - ordered, key-aware listener storage.
//!
//! [`ListenerRegistry`] owns the live registrations of one signal:
//! an insertion-ordered list where each entry optionally carries a unique key
//! for later removal.
//!
//! ## Rules
//! - Insertion order is the emission order (observable for sequential delivery).
//! - At most one live registration per key; a colliding insert is rejected,
//!   never replaces.
//! - Unkeyed registrations cannot be removed individually, only by [`ListenerRegistry::clear`].
//! - Every operation takes the single `RwLock` exactly once, so concurrent
//!   calls linearize: each appears atomic relative to the others.
//! - Emission never holds the lock: [`ListenerRegistry::snapshot`] copies the
//!   listener handles out under the read guard, and listeners run lock-free.
//!   A slow listener therefore never blocks registration or removal.

use std::sync::{Arc, RwLock};

use crate::error::SignalError;
use crate::listeners::listener::ListenerRef;

/// One live registration: a listener plus its optional removal key.
struct Registration<T: Send + 'static> {
    key: Option<Arc<str>>,
    listener: ListenerRef<T>,
}

/// Insertion-ordered collection of live registrations.
pub(crate) struct ListenerRegistry<T: Send + 'static> {
    entries: RwLock<Vec<Registration<T>>>,
}

impl<T: Send + 'static> ListenerRegistry<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Appends an unkeyed registration; returns the new size.
    pub(crate) fn push(&self, listener: ListenerRef<T>) -> usize {
        let mut entries = self.entries.write().unwrap();
        entries.push(Registration {
            key: None,
            listener,
        });
        let len = entries.len();
        tracing::debug!(len, "listener registered");
        len
    }

    /// Appends a keyed registration; returns the new size.
    ///
    /// Rejected with [`SignalError::DuplicateKey`] when a live registration
    /// already holds `key`; the registry is left untouched. The duplicate
    /// check and the append happen under one write guard.
    pub(crate) fn insert(&self, listener: ListenerRef<T>, key: Arc<str>) -> Result<usize, SignalError> {
        let mut entries = self.entries.write().unwrap();
        if entries.iter().any(|r| r.key.as_deref() == Some(&*key)) {
            return Err(SignalError::DuplicateKey { key });
        }
        entries.push(Registration {
            key: Some(Arc::clone(&key)),
            listener,
        });
        let len = entries.len();
        tracing::debug!(key = %key, len, "keyed listener registered");
        Ok(len)
    }

    /// Removes the registration holding `key`, preserving the relative order
    /// of the rest; returns the new size.
    ///
    /// Reports [`SignalError::KeyNotFound`] and mutates nothing when no live
    /// registration holds `key`.
    pub(crate) fn remove(&self, key: &str) -> Result<usize, SignalError> {
        let mut entries = self.entries.write().unwrap();
        match entries.iter().position(|r| r.key.as_deref() == Some(key)) {
            Some(pos) => {
                entries.remove(pos);
                let len = entries.len();
                tracing::debug!(key, len, "listener removed");
                Ok(len)
            }
            None => Err(SignalError::KeyNotFound {
                key: Arc::from(key),
            }),
        }
    }

    /// Current number of live registrations.
    pub(crate) fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// True when no registration is live.
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Atomically discards every registration.
    pub(crate) fn clear(&self) {
        let mut entries = self.entries.write().unwrap();
        entries.clear();
        tracing::debug!("registry cleared");
    }

    /// Copies the listener handles out in registration order.
    ///
    /// The copy is what an emission iterates over, so registrations and
    /// removals that land after the snapshot do not affect that emission.
    pub(crate) fn snapshot(&self) -> Vec<ListenerRef<T>> {
        let entries = self.entries.read().unwrap();
        entries.iter().map(|r| Arc::clone(&r.listener)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::listeners::listener_fn::ListenerFn;

    fn noop(label: &'static str) -> ListenerRef<u8> {
        Arc::new(ListenerFn::new(|_ctx: Context, _v: u8| async {}).with_label(label))
    }

    #[test]
    fn test_push_returns_new_size() {
        let registry = ListenerRegistry::new();
        assert_eq!(registry.push(noop("a")), 1);
        assert_eq!(registry.push(noop("b")), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_insert_rejects_duplicate_key() {
        let registry = ListenerRegistry::new();
        assert_eq!(registry.insert(noop("a"), "worker".into()).unwrap(), 1);

        let err = registry.insert(noop("b"), "worker".into()).unwrap_err();
        assert!(matches!(err, SignalError::DuplicateKey { .. }));
        assert_eq!(registry.len(), 1, "rejected insert must not grow the registry");
    }

    #[test]
    fn test_remove_missing_key_reports_not_found() {
        let registry = ListenerRegistry::new();
        registry.push(noop("unkeyed"));

        let err = registry.remove("worker").unwrap_err();
        assert!(matches!(err, SignalError::KeyNotFound { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let registry = ListenerRegistry::new();
        registry.insert(noop("a"), "ka".into()).unwrap();
        registry.insert(noop("b"), "kb".into()).unwrap();
        registry.insert(noop("c"), "kc".into()).unwrap();

        assert_eq!(registry.remove("kb").unwrap(), 2);

        let snapshot = registry.snapshot();
        let order: Vec<&str> = snapshot.iter().map(|l| l.label()).collect();
        assert_eq!(order, ["a", "c"]);
    }

    #[test]
    fn test_clear_discards_everything() {
        let registry = ListenerRegistry::new();
        registry.push(noop("a"));
        registry.insert(noop("b"), "kb".into()).unwrap();

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        // clearing an empty registry is a no-op
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached_from_later_mutation() {
        let registry = ListenerRegistry::new();
        registry.push(noop("a"));

        let snapshot = registry.snapshot();
        registry.push(noop("b"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.len(), 2);
    }
}
