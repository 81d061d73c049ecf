//! Application-level error type returned by all Tauri command handlers.
//!
//! `AppError` is serialized to `{ kind, message }` JSON payloads so the
//! TypeScript frontend can pattern-match on a stable `kind` string.

use crate::config::ConfigError;
use crate::sanitize::SnapshotError;
use crate::store::StorageError;

/// Top-level error returned by Tauri command handlers.
///
/// Serialized with serde's adjacently-tagged representation:
/// `{ "kind": "<variant>", "message": "<human-readable text>" }`
///
/// The TypeScript counterpart is:
/// ```ts
/// type AppError = { kind: string; message: string };
/// ```
#[derive(Debug, thiserror::Error, serde::Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum AppError {
    /// An imported document could not be parsed or was rejected as a whole.
    #[error("{0}")]
    Import(String),

    /// The export file could not be written.
    #[error("{0}")]
    Export(String),

    /// The local storage backend failed.
    #[error("{0}")]
    Storage(String),

    /// The bootstrap document could not be read.
    #[error("{0}")]
    Bootstrap(String),

    /// The configuration file is unreadable or invalid.
    #[error("{0}")]
    Config(String),

    /// Shared state is unusable (a lock was poisoned by a panicking writer).
    #[error("{0}")]
    State(String),

    /// A generic I/O error; the inner [`std::io::Error`] is converted to a
    /// string at the system boundary so it remains serializable.
    #[error("{0}")]
    Io(String),
}

impl From<SnapshotError> for AppError {
    /// A rejected snapshot only ever reaches the frontend through an import.
    fn from(e: SnapshotError) -> Self {
        Self::Import(e.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    /// Convert an [`std::io::Error`] into an [`AppError::Io`].
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_error_serializes_to_kind_message() {
        let err = AppError::Import("invalid JSON".to_string());
        let value = serde_json::to_value(&err).expect("serialize AppError::Import");
        assert_eq!(value["kind"], "Import");
        assert_eq!(value["message"], "invalid JSON");
    }

    #[test]
    fn io_error_serializes_to_kind_message() {
        let err = AppError::Io("disk full".to_string());
        let value = serde_json::to_value(&err).expect("serialize AppError::Io");
        assert_eq!(value["kind"], "Io");
        assert_eq!(value["message"], "disk full");
    }

    #[test]
    fn from_snapshot_error_produces_import_variant() {
        let app_err = AppError::from(SnapshotError::NoRecognizedContent);
        assert!(matches!(app_err, AppError::Import(_)));
        let value = serde_json::to_value(&app_err).expect("serialize");
        assert_eq!(value["kind"], "Import");
        assert_eq!(
            value["message"],
            "the JSON document contains no recognized content"
        );
    }

    #[test]
    fn from_storage_error_produces_storage_variant() {
        let app_err = AppError::from(StorageError::InvalidKey("../x".to_string()));
        assert!(matches!(app_err, AppError::Storage(_)));
    }

    #[test]
    fn from_config_error_produces_config_variant() {
        let app_err = AppError::from(ConfigError::InvalidLogLevel("loud".to_string()));
        let value = serde_json::to_value(&app_err).expect("serialize");
        assert_eq!(value["kind"], "Config");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let app_err = AppError::from(io_err);
        assert!(matches!(app_err, AppError::Io(_)));
        let value = serde_json::to_value(&app_err).expect("serialize");
        assert_eq!(value["kind"], "Io");
    }

    #[test]
    fn app_error_display_is_human_readable() {
        assert_eq!(
            AppError::Export("write failed".to_string()).to_string(),
            "write failed"
        );
        assert_eq!(
            AppError::State("store lock poisoned".to_string()).to_string(),
            "store lock poisoned"
        );
    }
}
