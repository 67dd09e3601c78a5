//! Configuration file loading and data folder resolution

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of the optional TOML configuration file
/// (`~/.config/carteira/<module>.toml`).
///
/// Every field is optional; environment variables take priority over the
/// file, and the file takes priority over compiled defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Data folder override (database location)
    pub data_folder: Option<String>,
    /// Verification API base URL override
    pub api_base_url: Option<String>,
    /// Company identifier for verification API authentication
    pub company_id: Option<String>,
    /// Secret key for verification API authentication
    pub secret_key: Option<String>,
}

impl TomlConfig {
    /// Load the module's config file from the platform config directory,
    /// returning defaults when no file exists.
    pub fn load_default(module: &str) -> Result<Self> {
        match default_config_path(module) {
            Some(path) if path.exists() => {
                tracing::info!("Loading config file: {}", path.display());
                Self::load(&path)
            }
            _ => {
                tracing::debug!("No config file found for {}; using defaults", module);
                Ok(Self::default())
            }
        }
    }

    /// Load and parse a specific TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }
}

/// Default configuration file path for the platform
pub fn default_config_path(module: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("carteira").join(format!("{}.toml", module)))
}

/// Data folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. CARTEIRA_DATA environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_folder(cli_arg: Option<&str>, config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("CARTEIRA_DATA") {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.data_folder {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 4: OS-dependent compiled default
    default_data_folder()
}

/// Get OS-dependent default data folder path
fn default_data_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("carteira"))
        .unwrap_or_else(|| PathBuf::from("./carteira_data"))
}

/// Create the data folder if it does not exist yet.
pub fn ensure_data_folder(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .map_err(|e| Error::Config(format!("Create {} failed: {}", path.display(), e)))
}
