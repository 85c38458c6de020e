use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::session::controller::Mode;

const MAX_FEEDBACK_MS: u64 = 10_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_feedback_correct_ms")]
    pub feedback_correct_ms: u64,
    #[serde(default = "default_feedback_incorrect_ms")]
    pub feedback_incorrect_ms: u64,
    #[serde(default = "default_mode")]
    pub default_mode: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_feedback_correct_ms() -> u64 {
    1000
}
fn default_feedback_incorrect_ms() -> u64 {
    2000
}
fn default_mode() -> String {
    "quiz".to_string()
}
fn default_data_dir() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("drillbox")
        .to_string_lossy()
        .to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            feedback_correct_ms: default_feedback_correct_ms(),
            feedback_incorrect_ms: default_feedback_incorrect_ms(),
            default_mode: default_mode(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("drillbox")
            .join("config.toml")
    }

    /// Clamp feedback delays and reset unknown values to defaults.
    pub fn validate(&mut self) {
        self.feedback_correct_ms = self.feedback_correct_ms.min(MAX_FEEDBACK_MS);
        self.feedback_incorrect_ms = self.feedback_incorrect_ms.min(MAX_FEEDBACK_MS);
        if Mode::from_key(&self.default_mode).is_none() {
            self.default_mode = default_mode();
        }
        if self.data_dir.trim().is_empty() {
            self.data_dir = default_data_dir();
        }
        if self.log_level.trim().is_empty() {
            self.log_level = default_log_level();
        }
    }

    pub fn mode(&self) -> Mode {
        Mode::from_key(&self.default_mode).unwrap_or(Mode::Quiz)
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.feedback_correct_ms, 1000);
        assert_eq!(config.feedback_incorrect_ms, 2000);
        assert_eq!(config.mode(), Mode::Quiz);
        assert!(config.data_dir.contains("drillbox"));
    }

    #[test]
    fn test_config_serde_partial_fields() {
        let toml_str = r#"
theme = "terminal-default"
default_mode = "learning"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.mode(), Mode::Learning);
        assert_eq!(config.feedback_correct_ms, 1000);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.feedback_incorrect_ms, deserialized.feedback_incorrect_ms);
        assert_eq!(config.data_dir, deserialized.data_dir);
        assert_eq!(config.default_mode, deserialized.default_mode);
    }

    #[test]
    fn test_validate_clamps_and_resets() {
        let mut config = Config {
            feedback_correct_ms: 60_000,
            default_mode: "speedrun".to_string(),
            data_dir: " ".to_string(),
            ..Config::default()
        };
        config.validate();
        assert_eq!(config.feedback_correct_ms, MAX_FEEDBACK_MS);
        assert_eq!(config.default_mode, "quiz");
        assert!(!config.data_dir.trim().is_empty());
    }

    #[test]
    fn test_zero_delay_is_allowed() {
        let mut config = Config {
            feedback_correct_ms: 0,
            feedback_incorrect_ms: 0,
            ..Config::default()
        };
        config.validate();
        assert_eq!(config.feedback_correct_ms, 0);
        assert_eq!(config.feedback_incorrect_ms, 0);
    }
}
