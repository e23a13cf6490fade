//! Process-lifecycle management.
//!
//! Cleanup callbacks are owned by an explicit [`LifecycleManager`] rather
//! than registered as ambient process state. The signal-delivery mechanism
//! is a narrow adapter around tokio's signal futures, so the core
//! delete-then-terminate logic stays independent of any particular signal
//! API.
//!
//! Single-process, single-attachment assumption: one manager, one set of
//! cleanups, attached once. Attaching twice is out of contract.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

type Cleanup = Box<dyn FnOnce() + Send>;

/// Owns cleanup callbacks and runs them exactly once.
pub struct LifecycleManager {
    cleanups: Mutex<Vec<Cleanup>>,
}

impl std::fmt::Debug for LifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleManager")
            .field("pending", &self.cleanups.lock().len())
            .finish()
    }
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self {
            cleanups: Mutex::new(Vec::new()),
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a cleanup callback. Callbacks run in registration order.
    pub fn register_cleanup(&self, cleanup: impl FnOnce() + Send + 'static) {
        self.cleanups.lock().push(Box::new(cleanup));
    }

    /// Run all registered cleanups.
    ///
    /// Idempotent: callbacks are drained as they run, so a second
    /// invocation is a no-op.
    pub fn run_cleanups(&self) {
        let cleanups = std::mem::take(&mut *self.cleanups.lock());
        for cleanup in cleanups {
            cleanup();
        }
    }

    /// Wait for a termination signal, run cleanups, then force process
    /// exit.
    ///
    /// Exit is immediate and bypasses any further asynchronous work; every
    /// signal vector routes through the same idempotent cleanup path. This
    /// future never resolves.
    pub async fn listen(&self) {
        shutdown_signal().await;
        debug!("termination signal received, running cleanups");
        self.run_cleanups();
        std::process::exit(0);
    }
}

/// Resolve when the process receives a termination request.
///
/// Listens for Ctrl-C (interrupt) on all platforms, plus SIGHUP and
/// SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut hangup =
            signal(SignalKind::hangup()).expect("failed to install SIGHUP handler");
        let mut terminate =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

        tokio::select! {
            _ = ctrl_c => {}
            _ = hangup.recv() => {}
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_cleanups_run_in_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let manager = LifecycleManager::new();

        for i in 0..3 {
            let order = order.clone();
            manager.register_cleanup(move || order.lock().push(i));
        }

        manager.run_cleanups();
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_run_cleanups_is_idempotent() {
        let count = Arc::new(AtomicUsize::new(0));
        let manager = LifecycleManager::new();

        let counter = count.clone();
        manager.register_cleanup(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        manager.run_cleanups();
        manager.run_cleanups();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cleanups_registered_after_run_still_pending() {
        let manager = LifecycleManager::new();
        manager.run_cleanups();

        let ran = Arc::new(AtomicUsize::new(0));
        let counter = ran.clone();
        manager.register_cleanup(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        manager.run_cleanups();
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }
}
