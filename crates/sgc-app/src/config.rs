//! Console configuration (`config.toml`)
//!
//! ```toml
//! root_path = "http://localhost:8080"
//! root_title = "Surveillance-guy"
//! log_max_length = 20480
//! ```
//!
//! A missing file yields the defaults; an unreadable or invalid one is logged
//! and also yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sgc_core::prelude::*;

pub const APP_DIR: &str = "surveillance-console";
pub const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_ROOT_PATH: &str = "http://localhost:8080";
pub const DEFAULT_ROOT_TITLE: &str = "Surveillance-guy";
pub const DEFAULT_LOG_MAX_LENGTH: usize = 20480;

/// Values injected into the state and the REST client at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend base URL
    pub root_path: String,
    /// Title shown above the side menu
    pub root_title: String,
    /// Maximum number of characters the log view keeps
    pub log_max_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_path: DEFAULT_ROOT_PATH.to_string(),
            root_title: DEFAULT_ROOT_TITLE.to_string(),
            log_max_length: DEFAULT_LOG_MAX_LENGTH,
        }
    }
}

impl Settings {
    /// Apply a `--root-path` style override
    pub fn with_root_path(mut self, root_path: Option<String>) -> Self {
        if let Some(root_path) = root_path {
            self.root_path = root_path;
        }
        self
    }

    fn sanitized(mut self) -> Self {
        if self.log_max_length == 0 {
            warn!(
                "log_max_length must be positive, using {}",
                DEFAULT_LOG_MAX_LENGTH
            );
            self.log_max_length = DEFAULT_LOG_MAX_LENGTH;
        }
        if self.root_title.trim().is_empty() {
            self.root_title = DEFAULT_ROOT_TITLE.to_string();
        }
        self
    }
}

/// `~/.config/surveillance-console/config.toml` (platform equivalent)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `path`, falling back to defaults
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings.sanitized()
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Surveillance Console configuration

root_path = "http://localhost:8080"   # backend base URL
root_title = "Surveillance-guy"        # title shown in the side menu
log_max_length = 20480                 # characters kept by the log view
"#;

/// Write the default config file unless one exists. Returns whether it wrote.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }
    std::fs::write(path, DEFAULT_CONFIG_CONTENT)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Wrote default config to {:?}", path);
    Ok(true)
}
