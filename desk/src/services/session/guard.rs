//! # Session Guard
//!
//! Two-state gate in front of every protected screen.
//!
//! ```text
//!   AUTHENTICATED ──(token missing or expired)──▶ UNAUTHENTICATED
//!         ▲                                              │
//!         └──────────── successful login ────────────────┘
//! ```
//!
//! The transition is evaluated at two points:
//!
//! 1. synchronously, on every protected screen transition and every frame that renders
//!    a protected screen ([`SessionGuard::enforce`]);
//! 2. by an [`ExpiryWatcher`] ticking once per second while the protected area is shown.
//!
//! Expiry is terminal: there is no refresh. Leaving the protected area drops the
//! watcher, which aborts its task.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::store::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Authenticated,
    Unauthenticated,
}

#[derive(Clone)]
pub struct SessionGuard {
    session: Arc<SessionStore>,
}

impl SessionGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    /// Evaluate without side effects.
    pub fn check(&self) -> GuardState {
        if self.session.token().is_none() || self.session.is_token_expired() {
            GuardState::Unauthenticated
        } else {
            GuardState::Authenticated
        }
    }

    /// Evaluate and, when unauthenticated, clear whatever is left of the session.
    pub fn enforce(&self) -> GuardState {
        let state = self.check();
        if state == GuardState::Unauthenticated {
            if let Err(e) = self.session.clear_session() {
                tracing::error!(error = %e, "Failed to clear session after expiry");
            }
        }
        state
    }
}

/// Background expiry poll, owned by whoever shows protected screens.
///
/// Calls `on_expired` at most once, then stops. Dropping the watcher aborts the task.
pub struct ExpiryWatcher {
    handle: JoinHandle<()>,
}

impl ExpiryWatcher {
    pub const TICK: Duration = Duration::from_secs(1);

    /// Start polling on the current tokio runtime.
    pub fn spawn<F>(guard: SessionGuard, on_expired: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Self::TICK);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if guard.enforce() == GuardState::Unauthenticated {
                    tracing::info!("Session expired, expiry watcher stopping");
                    on_expired();
                    break;
                }
            }
        });
        tracing::debug!("Expiry watcher started");
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ExpiryWatcher {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("Expiry watcher stopped");
    }
}
