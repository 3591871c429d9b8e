//! User settings persisted as JSON
//!
//! Every field has a default, so partial files written by hand load fine.
//! Values are clamped after loading rather than rejected.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::constants::{timing, validation};
use crate::i18n::Language;
use crate::showcase::Timings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Unset means "detect from the environment"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where the contact form posts to; the form reports an error when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_endpoint: Option<String>,
    #[serde(default)]
    pub timing: TimingSettings,
    #[serde(default)]
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSettings {
    #[serde(default = "default_clear_delay_ms")]
    pub clear_delay_ms: u64,
    /// Never below `clear_delay_ms`
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_width")]
    pub width: u16,
    #[serde(default = "default_window_height")]
    pub height: u16,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_clear_delay_ms() -> u64 {
    timing::CLEAR_DELAY_MS
}

fn default_settle_delay_ms() -> u64 {
    timing::SETTLE_DELAY_MS
}

fn default_highlight_ms() -> u64 {
    timing::HIGHLIGHT_MS
}

fn default_window_width() -> u16 {
    1100
}

fn default_window_height() -> u16 {
    800
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            clear_delay_ms: default_clear_delay_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            highlight_ms: default_highlight_ms(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            log_level: default_log_level(),
            contact_endpoint: None,
            timing: TimingSettings::default(),
            window: WindowSettings::default(),
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// `log_level` of the file at `path`, read without logging or clamping
    /// so it can pick the subscriber level before the real load
    pub fn peek_log_level(path: &Path) -> Option<String> {
        let contents = fs::read_to_string(path).ok()?;
        let value: serde_json::Value = serde_json::from_str(&contents).ok()?;
        value.get("log_level")?.as_str().map(str::to_string)
    }

    /// Load from `path`, writing defaults there if the file does not exist.
    /// A file that exists but does not parse is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, creating default config");
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        config.validate_and_clamp();
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Clamp values to safe ranges
    pub fn validate_and_clamp(&mut self) {
        use validation::*;

        let timing = &mut self.timing;
        for (name, value) in [
            ("clear_delay_ms", &mut timing.clear_delay_ms),
            ("settle_delay_ms", &mut timing.settle_delay_ms),
            ("highlight_ms", &mut timing.highlight_ms),
        ] {
            if *value > MAX_DELAY_MS {
                warn!(field = name, value = *value, max = MAX_DELAY_MS, "Delay exceeds maximum, clamping");
                *value = MAX_DELAY_MS;
            }
        }

        if timing.settle_delay_ms < timing.clear_delay_ms {
            warn!(
                settle_delay_ms = timing.settle_delay_ms,
                clear_delay_ms = timing.clear_delay_ms,
                "settle_delay_ms shorter than clear_delay_ms, raising it"
            );
            timing.settle_delay_ms = timing.clear_delay_ms;
        }

        if timing.highlight_ms == 0 {
            warn!(using = default_highlight_ms(), "highlight_ms is zero, using default");
            timing.highlight_ms = default_highlight_ms();
        }

        let window = &mut self.window;
        for (name, value) in [("width", &mut window.width), ("height", &mut window.height)] {
            let clamped = (*value).clamp(MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION);
            if clamped != *value {
                warn!(field = name, value = *value, clamped, "Window dimension out of range, clamping");
                *value = clamped;
            }
        }
    }

    pub fn timings(&self) -> Timings {
        Timings {
            clear_delay: Duration::from_millis(self.timing.clear_delay_ms),
            settle_delay: Duration::from_millis(self.timing.settle_delay_ms),
            highlight: Duration::from_millis(self.timing.highlight_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_creates_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "language": "es", "timing": { "highlight_ms": 1500 } }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.language, Some(Language::Es));
        assert_eq!(config.timing.highlight_ms, 1500);
        assert_eq!(config.timing.clear_delay_ms, timing::CLEAR_DELAY_MS);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_settle_raised_to_clear_delay() {
        let mut config = Config::default();
        config.timing.clear_delay_ms = 800;
        config.timing.settle_delay_ms = 200;
        config.validate_and_clamp();
        assert_eq!(config.timing.settle_delay_ms, 800);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let mut config = Config::default();
        config.timing.highlight_ms = 0;
        config.timing.clear_delay_ms = 60_000;
        config.window.width = 10;
        config.validate_and_clamp();

        assert_eq!(config.timing.highlight_ms, timing::HIGHLIGHT_MS);
        assert_eq!(config.timing.clear_delay_ms, validation::MAX_DELAY_MS);
        assert!(config.timing.settle_delay_ms >= config.timing.clear_delay_ms);
        assert_eq!(config.window.width, validation::MIN_WINDOW_DIMENSION);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        config.language = Some(Language::En);
        config.contact_endpoint = Some("https://example.com/contact".to_string());
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_peek_log_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(Config::peek_log_level(&path), None);
        assert!(!path.exists());

        fs::write(&path, r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(Config::peek_log_level(&path).as_deref(), Some("debug"));

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::peek_log_level(&path), None);
    }

    #[test]
    fn test_timings_conversion() {
        let timings = Config::default().timings();
        assert_eq!(timings, Timings::default());
    }
}
