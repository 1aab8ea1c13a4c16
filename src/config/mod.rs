use crate::core::compliance::ComplianceChecker;
use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;
use crate::models::RuleThresholds;
use crate::ui::templates::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Top-level keys written by `init`, used by `config --check`.
pub const CONFIG_KEYS: [&str; 4] = ["rules", "locale", "strict_input", "output"];
pub const RULE_KEYS: [&str; 3] = ["max_daily_hours", "max_amplitude_hours", "min_rest_hours"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rules: RuleThresholds,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_strict_input")]
    pub strict_input: bool,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_strict_input() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: RuleThresholds::default(),
            locale: Locale::default(),
            strict_input: default_strict_input(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rshiftcheck")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rshiftcheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshiftcheck.conf")
    }

    /// Load configuration from `path`, or return defaults if not found.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.rules.validate()?;

        info!(
            path = %path.display(),
            locale = cfg.locale.as_str(),
            output = cfg.output.as_str(),
            strict = cfg.strict_input,
            "configuration loaded"
        );
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// List keys absent from the file at `path` (`rules.<key>` for nested ones).
    /// Absent keys fall back to their defaults on load.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

        let mut missing = Vec::new();
        for key in CONFIG_KEYS {
            if yaml.get(key).is_none() {
                missing.push(key.to_string());
            }
        }

        if let Some(rules) = yaml.get("rules") {
            for key in RULE_KEYS {
                if rules.get(key).is_none() {
                    missing.push(format!("rules.{key}"));
                }
            }
        }

        Ok(missing)
    }

    pub fn checker(&self) -> AppResult<ComplianceChecker> {
        ComplianceChecker::try_new(self.rules, self.locale)
    }
}
