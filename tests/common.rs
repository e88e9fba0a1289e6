use std::sync::{Arc, Mutex};

use signalfan::{Context, ListenerFn, ListenerRef};

/// Shared observation log appended to by [`recorder`] listeners.
pub type Log<T> = Arc<Mutex<Vec<T>>>;

#[allow(unused)]
pub fn new_log<T>() -> Log<T> {
    Arc::new(Mutex::new(Vec::new()))
}

/// Listener that appends every payload it receives to `log`.
#[allow(unused)]
pub fn recorder<T: Clone + Send + Sync + 'static>(log: &Log<T>) -> ListenerRef<T> {
    let log = Arc::clone(log);
    ListenerFn::arc(move |_ctx: Context, payload: T| {
        let log = Arc::clone(&log);
        async move {
            log.lock().unwrap().push(payload);
        }
    })
}

/// Listener that ignores everything it receives.
#[allow(unused)]
pub fn noop<T: Send + 'static>() -> ListenerRef<T> {
    ListenerFn::arc(|_ctx: Context, _payload: T| async {})
}

#[allow(unused)]
pub fn snapshot<T: Clone>(log: &Log<T>) -> Vec<T> {
    log.lock().unwrap().clone()
}
