use std::path::{Path, PathBuf};

use log::{warn, LevelFilter};
use serde::Deserialize;

/// User settings from `<config_dir>/paramform/config.toml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub print_export_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            print_export_on_exit: true,
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults if it is missing or invalid
    pub fn load() -> Self {
        match dirs::config_dir() {
            Some(dir) => Self::load_from(&dir.join("paramform").join("config.toml")),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        toml::from_str(&contents).unwrap_or_else(|e| {
            warn!("Invalid config {}: {}; using defaults", path.display(), e);
            Self::default()
        })
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("paramform")
                .join("paramform.log")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_from(&dir.path().join("config.toml")), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);
        assert!(config.print_export_on_exit);
    }

    #[test]
    fn invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = [").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn unknown_level_means_info() {
        let config = Config {
            log_level: "chatty".into(),
            ..Config::default()
        };
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }
}
