// SPDX-License-Identifier: MPL-2.0
//! Settings for hosts of the lookup library, persisted as `settings.toml`.
//!
//! The demo binary reads these to decide which directory to load and which
//! locale to prefer when neither a CLI flag nor a request header says
//! otherwise.
//!
//! # Examples
//!
//! ```no_run
//! use phrasebook::config::{self, Settings};
//!
//! let mut settings = config::load().unwrap_or_default();
//! settings.language = Some("ru".to_string());
//! config::save(&settings).expect("failed to save settings");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "phrasebook";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Preferred display locale, checked against the loaded registry.
    pub language: Option<String>,
    /// Directory of `<tag>.json` translation files.
    #[serde(default)]
    pub translations_dir: Option<PathBuf>,
}

fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Settings> {
    if let Some(path) = default_settings_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Settings::default())
}

pub fn save(settings: &Settings) -> Result<()> {
    if let Some(path) = default_settings_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|err| Error::FileRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    // Unreadable settings are an error; malformed ones fall back to defaults.
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| Error::FileRead {
            path: parent.to_path_buf(),
            message: err.to_string(),
        })?;
    }
    let content = toml::to_string_pretty(settings).map_err(|err| Error::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    fs::write(path, content).map_err(|err| Error::FileRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(())
}
