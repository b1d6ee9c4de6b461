use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Portfolio content file; the bundled sample is used when unset
    pub content_path: Option<String>,
    /// How long the simulated contact delivery takes
    pub send_delay_ms: u64,
    /// Event poll timeout, which is also the animation frame interval
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: None,
            send_delay_ms: 1200,
            tick_rate_ms: 50,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".folio-tui"))
    }

    fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load the config from a data directory. Missing or unparsable files
    /// give `None`.
    pub fn load_from(dir: &Path) -> Option<Config> {
        let config_path = Self::config_path(dir);
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", config_path.display(), e);
                None
            }
        }
    }

    /// Save the config into a data directory
    pub fn save_to(&self, dir: &Path) -> anyhow::Result<()> {
        // Create config directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(Self::config_path(dir), contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from(dir.path()).is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data");
        let config = Config {
            content_path: Some("me.yaml".to_string()),
            send_delay_ms: 10,
            tick_rate_ms: 30,
        };
        config.save_to(&nested).unwrap();
        assert_eq!(Config::load_from(&nested), Some(config));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{"send_delay_ms": 5}"#).unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.send_delay_ms, 5);
        assert_eq!(config.tick_rate_ms, Config::default().tick_rate_ms);
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_invalid_config_is_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        assert!(Config::load_from(dir.path()).is_none());
    }
}
