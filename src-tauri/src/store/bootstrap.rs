//! The static bootstrap document shipped with the frontend build.
//!
//! The desktop host reads it out of the embedded frontend assets when it can
//! ([`BootstrapSource::Embedded`]); otherwise it points at a file resolved
//! against a known base directory ([`BootstrapSource::File`]).

use std::path::PathBuf;

use serde_json::Value;

use crate::error::AppError;

/// Where the bootstrap document comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BootstrapSource {
    /// No bootstrap document; loading falls straight through to defaults.
    #[default]
    None,
    /// A JSON file on disk.
    File(PathBuf),
    /// Document bytes already in memory, e.g. a bundled frontend asset.
    Embedded(Vec<u8>),
}

impl BootstrapSource {
    /// Read and parse the document.
    ///
    /// A missing file is `Ok(None)`: shipping no bootstrap document is normal.
    /// Unreadable or unparsable files are errors.
    pub async fn fetch(&self) -> Result<Option<Value>, AppError> {
        let path = match self {
            BootstrapSource::None => return Ok(None),
            BootstrapSource::File(path) => path,
            BootstrapSource::Embedded(bytes) => {
                let value = serde_json::from_slice(bytes).map_err(|e| {
                    AppError::Bootstrap(format!("cannot parse embedded document: {e}"))
                })?;
                return Ok(Some(value));
            }
        };
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no bootstrap document");
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::Bootstrap(format!(
                    "cannot read {}: {e}",
                    path.display()
                )))
            }
        };
        let value = serde_json::from_str(&text).map_err(|e| {
            AppError::Bootstrap(format!("cannot parse {}: {e}", path.display()))
        })?;
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("portfolio_bootstrap_{name}_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn none_source_yields_nothing() {
        assert_eq!(BootstrapSource::None.fetch().await.expect("fetch"), None);
    }

    #[tokio::test]
    async fn missing_file_yields_nothing() {
        let source = BootstrapSource::File(temp_file("missing"));
        assert_eq!(source.fetch().await.expect("fetch"), None);
    }

    #[tokio::test]
    async fn valid_file_is_parsed() {
        let path = temp_file("valid");
        std::fs::write(&path, r#"{"projects":[]}"#).expect("write");
        let value = BootstrapSource::File(path.clone())
            .fetch()
            .await
            .expect("fetch")
            .expect("document present");
        assert_eq!(value, serde_json::json!({ "projects": [] }));
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn embedded_document_is_parsed() {
        let source = BootstrapSource::Embedded(br#"{"skills":[]}"#.to_vec());
        let value = source.fetch().await.expect("fetch").expect("document present");
        assert_eq!(value, serde_json::json!({ "skills": [] }));

        let err = BootstrapSource::Embedded(b"<html>".to_vec())
            .fetch()
            .await
            .expect_err("not JSON");
        assert!(matches!(err, AppError::Bootstrap(_)));
    }

    #[tokio::test]
    async fn malformed_file_is_a_bootstrap_error() {
        let path = temp_file("malformed");
        std::fs::write(&path, "{ not json").expect("write");
        let err = BootstrapSource::File(path.clone())
            .fetch()
            .await
            .expect_err("malformed");
        assert!(matches!(err, AppError::Bootstrap(_)));
        let _ = std::fs::remove_file(&path);
    }
}
