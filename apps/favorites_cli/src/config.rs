use std::{
    fs,
    path::{Path, PathBuf},
};

use favorites_core::DEFAULT_STORAGE_KEY;
use serde::Deserialize;
use shared::domain::SortOption;

pub const CONFIG_FILE: &str = "favorites.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub log_filter: String,
    pub default_sort: SortOption,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            storage_key: DEFAULT_STORAGE_KEY.into(),
            log_filter: "warn".into(),
            default_sort: SortOption::Alphabetical,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    data_dir: Option<String>,
    storage_key: Option<String>,
    log: Option<String>,
    sort: Option<String>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(CONFIG_FILE), |name| std::env::var(name).ok())
}

/// Defaults, then the TOML file at `path` if it parses, then environment.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            if let Some(v) = file_cfg.data_dir.filter(|v| !v.trim().is_empty()) {
                settings.data_dir = PathBuf::from(v);
            }
            if let Some(v) = file_cfg.storage_key.filter(|v| !v.trim().is_empty()) {
                settings.storage_key = v;
            }
            if let Some(v) = file_cfg.log {
                settings.log_filter = v;
            }
            if let Some(sort) = file_cfg.sort.and_then(|v| v.parse::<SortOption>().ok()) {
                settings.default_sort = sort;
            }
        }
    }

    if let Some(v) = env("FAVORITES_DATA_DIR") {
        settings.data_dir = PathBuf::from(v);
    }
    if let Some(v) = env("APP__DATA_DIR") {
        settings.data_dir = PathBuf::from(v);
    }

    if let Some(v) = env("FAVORITES_STORAGE_KEY") {
        settings.storage_key = v;
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("FAVORITES_LOG") {
        settings.log_filter = v;
    }

    if let Some(v) = env("FAVORITES_SORT") {
        if let Ok(sort) = v.parse::<SortOption>() {
            settings.default_sort = sort;
        }
    }

    settings
}

impl Settings {
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, storage_key: Option<String>) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if let Some(storage_key) = storage_key {
            self.storage_key = storage_key;
        }
        self
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
