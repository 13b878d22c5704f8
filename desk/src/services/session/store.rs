//! # Session Store
//!
//! Single source of truth for "is the caller authenticated".
//!
//! Three keys make up a session:
//!
//! | Key | Value |
//! |---|---|
//! | `token` | opaque bearer credential |
//! | `expiration` | absolute epoch-millisecond instant, as text |
//! | `user` | JSON `{name, email, avatarBase64?}` |
//!
//! `token` and `expiration` are always written and removed in the same storage
//! operation. Nothing else in the client writes these keys.

use std::sync::Arc;

use shared::dto::SessionUser;

use super::clock::Clock;
use super::storage::KeyValueStore;
use crate::core::error::{AppError, Result};

pub const TOKEN_KEY: &str = "token";
pub const EXPIRATION_KEY: &str = "expiration";
pub const USER_KEY: &str = "user";

/// Session lifecycle over a [`KeyValueStore`].
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Persist a new session, replacing any previous one.
    ///
    /// `expires_at = now + expires_in_secs * 1000`. Storage failures are returned
    /// to the caller.
    #[tracing::instrument(skip(self, token, user), fields(email = %user.email))]
    pub fn save_session(&self, token: &str, expires_in_secs: i64, user: &SessionUser) -> Result<()> {
        let expires_at = self
            .clock
            .now_millis()
            .saturating_add(expires_in_secs.saturating_mul(1000));
        let user_json = serde_json::to_string(user).map_err(|e| AppError::Storage(e.to_string()))?;

        self.store.set_many(&[
            (TOKEN_KEY, token.to_string()),
            (EXPIRATION_KEY, expires_at.to_string()),
            (USER_KEY, user_json),
        ])?;

        tracing::info!(expires_at, "Session saved");
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Cached user; malformed stored JSON reads as absent.
    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Stored user is not valid JSON, ignoring");
                None
            }
        }
    }

    /// Replace only the cached profile; token and expiration are left alone.
    pub fn set_user(&self, user: &SessionUser) -> Result<()> {
        let user_json = serde_json::to_string(user).map_err(|e| AppError::Storage(e.to_string()))?;
        self.store.set(USER_KEY, user_json)?;
        Ok(())
    }

    /// Stored expiry instant, epoch milliseconds.
    pub fn expires_at(&self) -> Option<i64> {
        self.read(EXPIRATION_KEY)?.trim().parse().ok()
    }

    /// True when no (parseable) expiry is stored or the current time is past it.
    pub fn is_token_expired(&self) -> bool {
        match self.expires_at() {
            Some(expires_at) => self.clock.now_millis() > expires_at,
            None => true,
        }
    }

    /// Remove token, expiration and user. Idempotent.
    pub fn clear_session(&self) -> Result<()> {
        self.store.remove_many(&[TOKEN_KEY, EXPIRATION_KEY, USER_KEY])?;
        tracing::info!("Session cleared");
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Session storage read failed");
                None
            }
        }
    }
}
