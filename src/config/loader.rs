use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::settings::Region;

pub const SETTINGS_FILE_NAME: &str = "connect-settings.json";

/// One layer of settings, either read from disk or built from CLI flags.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub region: Option<Region>,
    #[serde(rename = "baseUrl")]
    pub base_url: Option<String>,
    #[serde(rename = "connectTimeoutSecs")]
    pub connect_timeout_secs: Option<u64>,
    #[serde(rename = "requestTimeoutSecs")]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: SettingsFile,
    pub path: PathBuf,
}

/// Reads `target`, or `target/connect-settings.json` when it is a directory.
/// A missing file is not an error.
pub fn load_settings_file(target: &Path) -> Result<Option<LoadedSettings>> {
    let resolved = if target.is_absolute() {
        target.to_path_buf()
    } else {
        std::env::current_dir()?.join(target)
    };

    let file_path = if resolved.is_dir() {
        resolved.join(SETTINGS_FILE_NAME)
    } else {
        resolved
    };

    if !file_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&file_path)
        .with_context(|| format!("reading settings {}", file_path.display()))?;

    let settings: SettingsFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing settings {}", file_path.display()))?;

    Ok(Some(LoadedSettings {
        settings,
        path: file_path,
    }))
}
