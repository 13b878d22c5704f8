//! Theme preference, stored next to the session but independent of it: logging out
//! keeps the chosen theme.

use std::sync::Arc;

use super::storage::KeyValueStore;
use crate::core::error::Result;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Clone)]
pub struct ThemePreference {
    store: Arc<dyn KeyValueStore>,
}

impl ThemePreference {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored theme, dark when unset or unrecognised
    pub fn load(&self) -> ThemeMode {
        self.store
            .get(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|v| ThemeMode::parse(&v))
            .unwrap_or_default()
    }

    pub fn save(&self, mode: ThemeMode) -> Result<()> {
        self.store.set(THEME_KEY, mode.as_str().to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::{ManualClock, MemoryStore, SessionStore};

    #[test]
    fn test_theme_defaults_to_dark() {
        let prefs = ThemePreference::new(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.load(), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_survives_logout() {
        let store = Arc::new(MemoryStore::new());
        let prefs = ThemePreference::new(store.clone());
        let session = SessionStore::new(store.clone(), Arc::new(ManualClock::new(0)));

        prefs.save(ThemeMode::Light).unwrap();
        session.clear_session().unwrap();

        assert_eq!(prefs.load(), ThemeMode::Light);
    }
}
