use crate::core::calculator::normalizer::OddLengthPolicy;
use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// What to do with a role whose timestamp list has an odd length.
    #[serde(default)]
    pub odd_length: OddLengthPolicy,
    /// chrono format used when timestamps are shown to the user.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Print segments and per-role presence even without `--details`.
    #[serde(default)]
    pub details_by_default: bool,
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odd_length: OddLengthPolicy::default(),
            timestamp_format: default_timestamp_format(),
            details_by_default: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rappearance")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rappearance.yaml")
    }

    /// Resolve an optional override against the default location.
    pub fn resolve_path(custom: Option<&Path>) -> PathBuf {
        custom.map(Path::to_path_buf).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        // An empty file is a valid "all defaults" configuration.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> AppResult<()> {
        if self.timestamp_format.trim().is_empty() {
            return Err(AppError::Config(
                "timestamp_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|i| matches!(i, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid timestamp_format '{}'",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}
