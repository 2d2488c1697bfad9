use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// General settings: sampling interval and trend history depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

/// Notification channels: terminal, desktop, audible cue, log file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub terminal: bool,
    #[serde(default = "default_true")]
    pub desktop: bool,
    /// Audible cue on critical alerts.
    #[serde(default = "default_true")]
    pub sound: bool,
    #[serde(default)]
    pub log_file: Option<String>,
}

/// Simulated station settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed RNG seed for reproducible runs; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Maximum random-walk step per sample, as a percentage of each
    /// parameter's full range.
    #[serde(default = "default_step_percent")]
    pub step_percent: f64,
}

impl SimulationConfig {
    /// Step size as a fraction of the parameter range, clamped to a usable
    /// band so a misconfigured value cannot freeze or saturate the walk.
    #[must_use]
    pub fn step_fraction(&self) -> f64 {
        (self.step_percent / 100.0).clamp(0.0001, 0.25)
    }
}

// --- Defaults ---

// The dashboard refresh period of the monitoring station: one minute.
const fn default_interval() -> u64 {
    60
}

const fn default_history_window() -> usize {
    20
}

const fn default_true() -> bool {
    true
}

const fn default_step_percent() -> f64 {
    2.0
}

// --- Default impls ---

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            history_window: default_history_window(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            terminal: default_true(),
            desktop: default_true(),
            sound: default_true(),
            log_file: None,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            step_percent: default_step_percent(),
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("naiad").join("config.toml"))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_has_sensible_values() {
        let config = AppConfig::default();
        assert_eq!(config.general.interval_secs, 60);
        assert_eq!(config.general.history_window, 20);
        assert!(config.notifications.terminal);
        assert!(config.notifications.desktop);
        assert!(config.notifications.sound);
        assert!(config.notifications.log_file.is_none());
        assert!(config.simulation.seed.is_none());
        assert!((config.simulation.step_percent - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let back: AppConfig = toml::from_str(&toml_str).expect("deserialize");

        assert_eq!(back.general.interval_secs, config.general.interval_secs);
        assert_eq!(back.general.history_window, config.general.history_window);
        assert_eq!(back.notifications.sound, config.notifications.sound);
        assert_eq!(back.simulation.seed, config.simulation.seed);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("parse empty toml");
        assert_eq!(config.general.interval_secs, 60);
        assert!(config.notifications.terminal);
    }

    #[test]
    fn partial_toml_fills_missing_with_defaults() {
        let toml_str = r#"
[general]
interval_secs = 5

[notifications]
sound = false
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse partial toml");
        assert_eq!(config.general.interval_secs, 5);
        assert_eq!(config.general.history_window, 20);
        assert!(!config.notifications.sound);
        assert!(config.notifications.desktop);
        assert!((config.simulation.step_percent - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_from_file() {
        let toml_str = r#"
[general]
interval_secs = 2

[simulation]
seed = 42
step_percent = 5.0
"#;
        let mut tmpfile = tempfile::NamedTempFile::new().expect("create tempfile");
        tmpfile
            .write_all(toml_str.as_bytes())
            .expect("write tmpfile");

        let config = AppConfig::load_from(tmpfile.path()).expect("load from file");
        assert_eq!(config.general.interval_secs, 2);
        assert_eq!(config.simulation.seed, Some(42));
        assert!((config.simulation.step_percent - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn save_to_creates_file_and_directories() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("subdir").join("config.toml");

        let config = AppConfig::default();
        config.save_to(&path).expect("save_to");

        assert!(path.exists());
        let reloaded = AppConfig::load_from(&path).expect("reload");
        assert_eq!(reloaded.general.interval_secs, config.general.interval_secs);
    }

    #[test]
    fn load_or_create_loads_existing_file() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "[general]\ninterval_secs = 42\n").expect("write");

        let config = AppConfig::load_or_create(&path).expect("load_or_create");
        assert_eq!(config.general.interval_secs, 42);
    }

    #[test]
    fn load_or_create_creates_default_when_missing() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("naiad").join("config.toml");

        assert!(!path.exists());
        let config = AppConfig::load_or_create(&path).expect("load_or_create");

        assert!(path.exists());
        assert_eq!(config.general.interval_secs, 60);

        let reloaded = AppConfig::load_from(&path).expect("reload created file");
        assert_eq!(reloaded.general.history_window, 20);
    }

    #[test]
    fn load_from_nonexistent_file_fails() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let missing = dir.path().join("missing-config.toml");
        assert!(AppConfig::load_from(&missing).is_err());
    }

    #[test]
    fn invalid_toml_fails() {
        let mut tmpfile = tempfile::NamedTempFile::new().expect("create tempfile");
        tmpfile
            .write_all(b"this is not valid toml [[[")
            .expect("write");

        assert!(AppConfig::load_from(tmpfile.path()).is_err());
    }

    #[test]
    fn step_fraction_clamps_out_of_range_values() {
        let too_big = SimulationConfig {
            seed: None,
            step_percent: 500.0,
        };
        assert!((too_big.step_fraction() - 0.25).abs() < f64::EPSILON);

        let negative = SimulationConfig {
            seed: None,
            step_percent: -3.0,
        };
        assert!((negative.step_fraction() - 0.0001).abs() < f64::EPSILON);

        let normal = SimulationConfig {
            seed: None,
            step_percent: 2.0,
        };
        assert!((normal.step_fraction() - 0.02).abs() < f64::EPSILON);
    }
}
