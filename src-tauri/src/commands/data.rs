//! Whole-snapshot IPC command handlers: read, reset, import and export,
//! plus the icon catalogue for pickers.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::AppError;
use crate::models::{IconKey, IconOption, PortfolioSnapshot};
use crate::store::{ContentStore, LoadPhase};

#[cfg(feature = "desktop")]
use crate::state::AppState;

// ── Reads ─────────────────────────────────────────────────────────────────────

/// Testable inner logic for [`get_snapshot`].
pub(crate) fn get_snapshot_inner(store: &ContentStore) -> Result<PortfolioSnapshot, AppError> {
    store.snapshot()
}

/// Testable inner logic for [`get_load_phase`].
///
/// The frontend shows a loading state until this reports `ready`.
pub(crate) fn get_load_phase_inner(store: &ContentStore) -> Result<LoadPhase, AppError> {
    store.phase()
}

/// Testable inner logic for [`list_icons`]: every icon key with its label,
/// in picker order.
pub(crate) fn list_icons_inner() -> Vec<IconOption> {
    IconKey::options()
}

// ── Reset / export / import ───────────────────────────────────────────────────

/// Testable inner logic for [`reset_data`].
pub(crate) fn reset_data_inner(store: &ContentStore) -> Result<PortfolioSnapshot, AppError> {
    store.reset()
}

/// Testable inner logic for [`export_data`]; the frontend saves the returned
/// document itself.
pub(crate) fn export_data_inner(store: &ContentStore) -> Result<PortfolioSnapshot, AppError> {
    store.export_snapshot()
}

/// Testable inner logic for [`export_data_to_dir`].
///
/// Writes `portfolio-data-<date>.json` into `dir` and returns its path.
pub(crate) fn export_data_to_dir_inner(
    dir: &Path,
    date: NaiveDate,
    store: &ContentStore,
) -> Result<PathBuf, AppError> {
    store.export_to_dir(dir, date)
}

/// Testable inner logic for [`import_data`].
///
/// The document is sanitized against the current content; a rejected
/// document leaves the store untouched.
pub(crate) fn import_data_inner(
    data: &Value,
    store: &ContentStore,
) -> Result<PortfolioSnapshot, AppError> {
    store.import_snapshot(data)
}

/// Testable inner logic for [`import_data_from_path`].
pub(crate) fn import_data_from_path_inner(
    path: &Path,
    store: &ContentStore,
) -> Result<PortfolioSnapshot, AppError> {
    store.import_from_path(path)
}

// ── Tauri command wrappers ────────────────────────────────────────────────────

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_snapshot(
    state: tauri::State<'_, AppState>,
) -> Result<PortfolioSnapshot, AppError> {
    get_snapshot_inner(&state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_load_phase(state: tauri::State<'_, AppState>) -> Result<LoadPhase, AppError> {
    get_load_phase_inner(&state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub fn list_icons() -> Vec<IconOption> {
    list_icons_inner()
}

/// Drop the stored data and return to the default content.
#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn reset_data(state: tauri::State<'_, AppState>) -> Result<PortfolioSnapshot, AppError> {
    reset_data_inner(&state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn export_data(
    state: tauri::State<'_, AppState>,
) -> Result<PortfolioSnapshot, AppError> {
    export_data_inner(&state.store)
}

/// Export to `dir`, or to the configured export directory when `dir` is
/// omitted. The file is dated with today's UTC date.
#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn export_data_to_dir(
    dir: Option<String>,
    state: tauri::State<'_, AppState>,
) -> Result<String, AppError> {
    let dir = dir
        .map(PathBuf::from)
        .unwrap_or_else(|| state.config.export_dir());
    let today = chrono::Utc::now().date_naive();
    let path = export_data_to_dir_inner(&dir, today, &state.store)?;
    Ok(path.to_string_lossy().into_owned())
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn import_data(
    data: Value,
    state: tauri::State<'_, AppState>,
) -> Result<PortfolioSnapshot, AppError> {
    import_data_inner(&data, &state.store)
}

/// Import a JSON file picked through the dialog plugin.
#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn import_data_from_path(
    path: String,
    state: tauri::State<'_, AppState>,
) -> Result<PortfolioSnapshot, AppError> {
    import_data_from_path_inner(Path::new(&path), &state.store)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::defaults::default_snapshot;
    use crate::store::{BootstrapSource, LoadGuard};

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("portfolio_data_cmd_{name}_{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn icon_list_covers_every_key_once() {
        let icons = list_icons_inner();
        assert_eq!(icons.len(), 15);
        assert_eq!(icons[0].value, IconKey::Server);
        let value = serde_json::to_value(&icons).expect("to_value");
        assert!(value
            .as_array()
            .expect("array")
            .iter()
            .any(|o| o["value"] == "hardDrive"));
    }

    #[tokio::test]
    async fn load_phase_reports_ready_after_load() {
        let store = ContentStore::in_memory();
        assert_eq!(get_load_phase_inner(&store).expect("phase"), LoadPhase::Uninitialized);
        store
            .load(&BootstrapSource::None, &LoadGuard::new())
            .await
            .expect("load");
        let value = serde_json::to_value(get_load_phase_inner(&store).expect("phase"))
            .expect("to_value");
        assert_eq!(value, "ready");
    }

    #[test]
    fn reset_restores_defaults() {
        let store = ContentStore::in_memory();
        import_data_inner(&json!({ "projects": [] }), &store).expect("import");
        assert!(get_snapshot_inner(&store).expect("snapshot").projects.is_empty());
        let snapshot = reset_data_inner(&store).expect("reset");
        assert_eq!(snapshot, default_snapshot());
        assert_eq!(get_snapshot_inner(&store).expect("snapshot"), default_snapshot());
    }

    #[test]
    fn rejected_import_maps_to_import_error() {
        let store = ContentStore::in_memory();
        let err = import_data_inner(&json!(["not", "an", "object"]), &store).expect_err("rejected");
        let value = serde_json::to_value(&err).expect("to_value");
        assert_eq!(value["kind"], "Import");
    }

    #[test]
    fn export_matches_live_state() {
        let store = ContentStore::in_memory();
        assert_eq!(
            export_data_inner(&store).expect("export"),
            get_snapshot_inner(&store).expect("snapshot")
        );
    }

    #[test]
    fn export_to_dir_then_import_from_path() {
        let dir = temp_dir("files");
        let source = ContentStore::in_memory();
        import_data_inner(&json!({ "skills": [{ "id": "rust", "name": "Rust" }] }), &source)
            .expect("import");
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).expect("date");
        let path = export_data_to_dir_inner(&dir, date, &source).expect("export");
        assert!(path.ends_with("portfolio-data-2025-01-31.json"));

        let target = ContentStore::in_memory();
        let snapshot = import_data_from_path_inner(&path, &target).expect("import");
        assert_eq!(snapshot.skills.len(), 1);
        assert_eq!(snapshot.skills[0].id, "rust");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
