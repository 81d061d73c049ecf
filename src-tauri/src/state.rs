//! Application state managed by Tauri.
//!
//! [`AppState`] is registered with `tauri::Builder::manage` and accessed from
//! command handlers via `tauri::State<AppState>`.

use crate::config::StudioConfig;
use crate::store::{ContentStore, FileStorage, LoadGuard};

/// Root application state managed by Tauri.
pub struct AppState {
    /// The portfolio content; guards its own locks.
    pub store: ContentStore,
    pub config: StudioConfig,
    /// Cancels the startup load when the main window goes away.
    pub load_guard: LoadGuard,
}

impl AppState {
    /// State backed by file storage in the configured directory.
    pub fn new(config: StudioConfig) -> Self {
        let storage = FileStorage::new(config.storage_dir());
        Self {
            store: ContentStore::new(storage, config.storage_key.clone()),
            config,
            load_guard: LoadGuard::new(),
        }
    }
}

impl Default for AppState {
    /// In-memory storage.
    fn default() -> Self {
        Self {
            store: ContentStore::in_memory(),
            config: StudioConfig::default(),
            load_guard: LoadGuard::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LoadPhase;

    #[test]
    fn app_state_default_constructs_without_panic() {
        let state = AppState::default();
        assert_eq!(state.store.phase().expect("phase"), LoadPhase::Uninitialized);
        assert!(!state.load_guard.is_cancelled());
    }

    #[test]
    fn app_state_new_follows_config() {
        let dir = std::env::temp_dir().join("portfolio_state_test");
        let config = StudioConfig {
            storage_key: "portfolio-state-test".to_string(),
            storage_dir: Some(dir.clone()),
            ..StudioConfig::default()
        };
        let state = AppState::new(config);
        assert_eq!(state.store.storage_key(), "portfolio-state-test");
        assert_eq!(state.config.storage_dir(), dir);
    }
}
