//! Studio configuration, read from an optional TOML file.
//!
//! Every key is optional:
//!
//! ```toml
//! storage_key = "portfolio-data"
//! storage_dir = "/home/greg/.local/share/portfolio-studio/storage"
//! bootstrap_path = "portfolio-data.json"
//! export_dir = "/home/greg/Téléchargements"
//! log_level = "info"
//! ```

use std::path::{Path, PathBuf};

use crate::store::storage::is_valid_key;
use crate::store::{BootstrapSource, DEFAULT_STORAGE_KEY};

/// Directory name used under the OS local data directory.
pub const APP_DIR_NAME: &str = "portfolio-studio";

/// Configuration file name inside [`app_data_dir`].
pub const CONFIG_FILE_NAME: &str = "portfolio.toml";

/// Default bootstrap document, relative to the frontend build.
pub const DEFAULT_BOOTSTRAP_PATH: &str = "portfolio-data.json";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Parse(String),

    #[error("storage_key {0:?} must be non-empty and use only letters, digits, '.', '_' or '-'")]
    InvalidStorageKey(String),

    #[error("log_level {0:?} must be one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    /// Key the snapshot is stored under.
    pub storage_key: String,
    /// Directory for [`FileStorage`](crate::store::FileStorage); defaults to
    /// `<app data dir>/storage`.
    pub storage_dir: Option<PathBuf>,
    /// Bootstrap document. A relative path names a frontend asset, or a file
    /// under the host's base directory; an empty path disables the step.
    pub bootstrap_path: PathBuf,
    /// Default target directory for exports; defaults to the OS download
    /// directory.
    pub export_dir: Option<PathBuf>,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: None,
            bootstrap_path: PathBuf::from(DEFAULT_BOOTSTRAP_PATH),
            export_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl StudioConfig {
    /// Read the file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<StudioConfig, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => parse(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StudioConfig::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(|| app_data_dir().join("storage"))
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(app_data_dir)
    }

    /// The bootstrap document as a file, with a relative path resolved
    /// against `base` rather than the working directory.
    pub fn bootstrap_source(&self, base: &Path) -> BootstrapSource {
        if self.bootstrap_path.as_os_str().is_empty() {
            BootstrapSource::None
        } else {
            BootstrapSource::File(base.join(&self.bootstrap_path))
        }
    }
}

/// `<OS local data dir>/portfolio-studio`
///
/// Linux `~/.local/share`, macOS `~/Library/Application Support`,
/// Windows `%LOCALAPPDATA%`.
pub fn app_data_dir() -> PathBuf {
    dirs::data_local_dir().unwrap_or_default().join(APP_DIR_NAME)
}

/// Parse a TOML string into a [`StudioConfig`], running validation.
pub fn parse(toml_str: &str) -> Result<StudioConfig, ConfigError> {
    let cfg: StudioConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &StudioConfig) -> Result<(), ConfigError> {
    // The key becomes a file name in FileStorage.
    if !is_valid_key(&cfg.storage_key) {
        return Err(ConfigError::InvalidStorageKey(cfg.storage_key.clone()));
    }

    if !LOG_LEVELS.contains(&cfg.log_level.as_str()) {
        return Err(ConfigError::InvalidLogLevel(cfg.log_level.clone()));
    }

    Ok(())
}
