//! Export to and import from JSON files on disk.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::storage::write_atomic;
use super::ContentStore;
use crate::error::AppError;
use crate::models::PortfolioSnapshot;

/// `portfolio-data-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("portfolio-data-{}.json", date.format("%Y-%m-%d"))
}

impl ContentStore {
    /// Write the exported snapshot as pretty JSON into `dir`, named after
    /// `date`. Returns the written path.
    pub fn export_to_dir(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf, AppError> {
        let snapshot = self.export_snapshot()?;
        let text = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| AppError::Export(format!("cannot serialize portfolio data: {e}")))?;

        std::fs::create_dir_all(dir)
            .map_err(|e| AppError::Export(format!("cannot create {}: {e}", dir.display())))?;
        let path = dir.join(export_file_name(date));
        write_atomic(&path, text.as_bytes())
            .map_err(|e| AppError::Export(format!("cannot write {}: {e}", path.display())))?;

        tracing::info!(path = %path.display(), "portfolio content exported");
        Ok(path)
    }

    /// Import the JSON document at `path`.
    pub fn import_from_path(&self, path: &Path) -> Result<PortfolioSnapshot, AppError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AppError::Import(format!("cannot read {}: {e}", path.display())))?;
        self.import_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::Project;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("portfolio_transfer_{name}_{}", uuid::Uuid::new_v4()))
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date")
    }

    #[test]
    fn export_file_name_is_zero_padded() {
        assert_eq!(export_file_name(date()), "portfolio-data-2024-03-09.json");
    }

    #[test]
    fn export_then_import_restores_state() {
        let dir = temp_dir("roundtrip");
        let store = ContentStore::in_memory();
        store
            .add::<Project>(&json!({ "title": "Exporté", "icon": "cloud" }))
            .expect("add");
        let exported = store.snapshot().expect("snapshot");

        let path = store.export_to_dir(&dir, date()).expect("export");
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("portfolio-data-2024-03-09.json"));

        let other = ContentStore::in_memory();
        let imported = other.import_from_path(&path).expect("import");
        assert_eq!(imported, exported);
        assert_eq!(other.snapshot().expect("snapshot"), exported);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn exported_file_is_pretty_printed() {
        let dir = temp_dir("pretty");
        let store = ContentStore::in_memory();
        let path = store.export_to_dir(&dir, date()).expect("export");
        let text = std::fs::read_to_string(&path).expect("read");
        assert!(text.starts_with("{\n"));
        assert!(text.contains("\"projects\""));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_import_file_is_an_import_error() {
        let store = ContentStore::in_memory();
        let err = store
            .import_from_path(&temp_dir("missing").join("nothing.json"))
            .expect_err("missing file");
        assert!(matches!(err, AppError::Import(_)));
    }
}
