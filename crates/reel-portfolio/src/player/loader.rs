use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Script that provides the embeddable player API
pub const PLAYER_API_SCRIPT_URL: &str = "https://www.youtube.com/iframe_api";

type ReadyCallback = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct LoaderState {
    ready: bool,
    script_requested: bool,
    pending: Vec<ReadyCallback>,
}

/// Process-wide readiness of the player API
///
/// Callbacks registered before readiness are queued and run exactly once, in
/// registration order, when [`mark_ready`](Self::mark_ready) is first called.
#[derive(Default)]
pub struct PlayerApiLoader {
    state: Mutex<LoaderState>,
}

static GLOBAL_LOADER: LazyLock<Arc<PlayerApiLoader>> =
    LazyLock::new(|| Arc::new(PlayerApiLoader::new()));

impl PlayerApiLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared loader for the whole process
    pub fn global() -> Arc<PlayerApiLoader> {
        Arc::clone(&GLOBAL_LOADER)
    }

    fn lock(&self) -> MutexGuard<'_, LoaderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_ready(&self) -> bool {
        self.lock().ready
    }

    /// Run `callback` once the API is ready
    ///
    /// # Returns
    /// `true` when the caller is the first to wait on an unloaded API and must
    /// inject [`PLAYER_API_SCRIPT_URL`]; `false` otherwise.
    pub fn when_ready<F>(&self, callback: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.lock();
        if state.ready {
            drop(state);
            callback();
            return false;
        }

        state.pending.push(Box::new(callback));
        let must_inject = !state.script_requested;
        state.script_requested = true;
        debug!(
            "Player API not ready, {} init callbacks pending",
            state.pending.len()
        );
        must_inject
    }

    /// Signal that the API has loaded and drain the pending queue
    ///
    /// Later calls are no-ops.
    pub fn mark_ready(&self) {
        let pending = {
            let mut state = self.lock();
            if state.ready {
                return;
            }
            state.ready = true;
            std::mem::take(&mut state.pending)
        };

        debug!("Player API ready, running {} pending callbacks", pending.len());
        for callback in pending {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_callbacks_queue_until_ready() {
        let loader = PlayerApiLoader::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&calls);
        assert!(loader.when_ready(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        let c = Arc::clone(&calls);
        assert!(!loader.when_ready(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        loader.mark_ready();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        loader.mark_ready();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_ready_loader_runs_immediately() {
        let loader = PlayerApiLoader::new();
        loader.mark_ready();

        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        assert!(!loader.when_ready(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callbacks_run_in_registration_order() {
        let loader = PlayerApiLoader::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for i in 0..3 {
            let o = Arc::clone(&order);
            loader.when_ready(move || o.lock().unwrap().push(i));
        }
        loader.mark_ready();
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_callback_may_reenter_loader() {
        let loader = Arc::new(PlayerApiLoader::new());
        let inner = Arc::clone(&loader);
        loader.when_ready(move || {
            assert!(inner.is_ready());
        });
        loader.mark_ready();
    }

    #[test]
    fn test_global_is_shared() {
        assert!(Arc::ptr_eq(&PlayerApiLoader::global(), &PlayerApiLoader::global()));
    }
}
