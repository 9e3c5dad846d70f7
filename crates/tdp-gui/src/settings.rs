//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific application data folder:
//! - macOS: ~/Library/Application Support/com.term-deposit-predictor.Term Deposit Predictor/
//! - Windows: %APPDATA%/term-deposit-predictor/config/
//! - Linux: ~/.config/term-deposit-predictor/

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tdp_classifier::DEFAULT_MODEL_FILE;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "term-deposit-predictor";
const APP_NAME: &str = "Term Deposit Predictor";
const CONFIG_FILENAME: &str = "settings.toml";

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// XGBoost JSON model loaded at startup.
    pub model_path: PathBuf,
    /// Enable dark mode theme.
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_FILE),
            dark_mode: true,
        }
    }
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from the platform config folder, or defaults.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };
    read_settings(&path)
}

/// Read settings from `path`.
///
/// A missing, unreadable or malformed file yields the defaults.
pub fn read_settings(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

/// Save settings to the platform config folder.
pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path().context("Could not determine settings path")?;
    write_settings(&path, settings)
}

/// Write settings to `path`, creating the parent directory if needed.
pub fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(path, content).context("Failed to write settings file")?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}
