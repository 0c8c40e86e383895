//! Router path stream.
//!
//! The router publishes the current route path to subscribers. Consumers
//! such as the navigation sidebar hold a [`Subscription`] guard for as long
//! as they are mounted; dropping the guard releases the listener.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::debug;

/// Callback invoked with every path the router emits.
pub type PathListener = Arc<dyn Fn(&str) + Send + Sync>;

type ReleaseFn = Box<dyn FnOnce() + Send + Sync>;

/// Guard for a path stream subscription.
///
/// The release callback runs exactly once: on [`Subscription::unsubscribe`]
/// or on drop, whichever comes first.
#[must_use = "dropping a Subscription immediately releases the listener"]
pub struct Subscription {
    release: Option<ReleaseFn>,
}

impl Subscription {
    /// Create a guard that runs `release` when the subscription ends.
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub const fn empty() -> Self {
        Self { release: None }
    }

    /// Whether the release callback has not run yet.
    pub const fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release the subscription now.
    pub fn unsubscribe(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// A subscribable stream of route paths.
pub trait PathStream {
    /// The path most recently emitted.
    fn current_path(&self) -> String;

    /// Register `listener`.
    ///
    /// The listener receives the current path immediately, then every
    /// subsequent change, until the returned guard is dropped.
    fn subscribe(&self, listener: PathListener) -> Subscription;
}

struct RouterInner {
    current: String,
    listeners: Vec<(u64, PathListener)>,
    next_id: u64,
}

/// In-memory router state shared by the application.
///
/// Cloning yields another handle to the same router.
#[derive(Clone)]
pub struct RouterService {
    inner: Arc<Mutex<RouterInner>>,
}

impl RouterService {
    /// Create a router positioned at `initial_path`.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RouterInner {
                current: initial_path.into(),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Move to `path` and notify listeners.
    ///
    /// Returns `false` without emitting when `path` is already current.
    pub fn navigate(&self, path: impl Into<String>) -> bool {
        let path = path.into();
        let listeners: Vec<PathListener> = {
            let mut inner = self.inner.lock();
            if inner.current == path {
                return false;
            }
            inner.current.clone_from(&path);
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };

        debug!(path = %path, listeners = listeners.len(), "Navigated");
        // Listeners run outside the lock so they may query the router.
        for listener in listeners {
            listener(&path);
        }
        true
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    fn remove_listener(inner: &Weak<Mutex<RouterInner>>, id: u64) {
        if let Some(inner) = inner.upgrade() {
            inner.lock().listeners.retain(|(lid, _)| *lid != id);
            debug!(subscription = id, "Path subscription released");
        }
    }
}

impl Default for RouterService {
    fn default() -> Self {
        Self::new("/")
    }
}

impl fmt::Debug for RouterService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("RouterService")
            .field("current", &inner.current)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl PathStream for RouterService {
    fn current_path(&self) -> String {
        self.inner.lock().current.clone()
    }

    fn subscribe(&self, listener: PathListener) -> Subscription {
        let (id, current) = {
            let mut inner = self.inner.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.current.clone())
        };
        debug!(subscription = id, "Path subscription added");

        listener(&current);

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || Self::remove_listener(&weak, id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, PathListener) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener: PathListener = Arc::new(move |path: &str| sink.lock().push(path.to_string()));
        (seen, listener)
    }

    #[test]
    fn test_subscribe_replays_current_path() {
        let router = RouterService::new("/core/jsx");
        let (seen, listener) = recorder();
        let _sub = router.subscribe(listener);
        assert_eq!(*seen.lock(), vec!["/core/jsx".to_string()]);
    }

    #[test]
    fn test_navigate_notifies_in_order() {
        let router = RouterService::default();
        let (seen, listener) = recorder();
        let _sub = router.subscribe(listener);

        assert!(router.navigate("/a"));
        assert!(router.navigate("/b"));
        assert_eq!(*seen.lock(), vec!["/", "/a", "/b"]);
        assert_eq!(router.current_path(), "/b");
    }

    #[test]
    fn test_navigate_to_current_path_does_not_emit() {
        let router = RouterService::new("/a");
        let (seen, listener) = recorder();
        let _sub = router.subscribe(listener);

        assert!(!router.navigate("/a"));
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_drop_releases_listener() {
        let router = RouterService::default();
        let (seen, listener) = recorder();
        let sub = router.subscribe(listener);
        assert_eq!(router.listener_count(), 1);

        drop(sub);
        assert_eq!(router.listener_count(), 0);

        router.navigate("/after");
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_release_runs_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sub = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(sub.is_active());

        sub.unsubscribe();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_outliving_router() {
        let router = RouterService::default();
        let (_seen, listener) = recorder();
        let sub = router.subscribe(listener);
        drop(router);
        // Releasing after the router is gone is a no-op.
        drop(sub);
    }

    #[test]
    fn test_listener_may_query_router() {
        let router = RouterService::default();
        let probe = router.clone();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = router.subscribe(Arc::new(move |_path: &str| {
            sink.lock().push(probe.current_path());
        }));

        router.navigate("/guides/best-practices");
        assert_eq!(seen.lock().last().map(String::as_str), Some("/guides/best-practices"));
    }
}
