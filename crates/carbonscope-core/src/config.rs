//! Settings
//!
//! Stored as `settings.json`:
//!
//! ```json
//! {
//!   "language": "nl",
//!   "benchmark_tonnes_per_month": 4.2,
//!   "factors_file": "factors-2025.json"
//! }
//! ```
//!
//! Every field is optional and unknown fields are ignored. A relative `factors_file` is resolved against the
//! directory holding the settings file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::advisor::Language;
use crate::benchmark::AVERAGE_SME_TONNES_PER_MONTH;
use crate::error::{CarbonError, Result};
use crate::factors::EmissionFactors;

/// File name used inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Language for advice text
    #[serde(default)]
    pub language: Language,

    /// Average footprint to compare against, in tonnes per month
    #[serde(default = "default_benchmark")]
    pub benchmark_tonnes_per_month: f64,

    /// Alternative emission factor set (JSON)
    #[serde(default)]
    pub factors_file: Option<PathBuf>,
}

fn default_benchmark() -> f64 {
    AVERAGE_SME_TONNES_PER_MONTH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            benchmark_tonnes_per_month: default_benchmark(),
            factors_file: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(content)?;
        if !settings.benchmark_tonnes_per_month.is_finite()
            || settings.benchmark_tonnes_per_month < 0.0
        {
            return Err(CarbonError::Parse(format!(
                "benchmark_tonnes_per_month must be a non-negative number, got {}",
                settings.benchmark_tonnes_per_month
            )));
        }
        Ok(settings)
    }

    /// Load settings from a file, resolving `factors_file` relative to it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| CarbonError::Io(format!("{}: {}", path.display(), e)))?;
        let mut settings = Self::from_json(&content)?;

        if let (Some(file), Some(dir)) = (&settings.factors_file, path.parent()) {
            if file.is_relative() {
                settings.factors_file = Some(dir.join(file));
            }
        }

        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings if the file exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Emission factors selected by these settings
    pub fn factors(&self) -> Result<EmissionFactors> {
        match &self.factors_file {
            Some(path) => EmissionFactors::from_file(path),
            None => Ok(EmissionFactors::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.benchmark_tonnes_per_month, 4.2);
        assert_eq!(settings.language, Language::English);
    }

    #[test]
    fn test_legacy_version_field_ignored() {
        let settings = Settings::from_json(r#"{"version": "1.0"}"#).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!serde_json::to_string(&settings).unwrap().contains("version"));
    }

    #[test]
    fn test_language_code() {
        let settings = Settings::from_json(r#"{"language": "nl"}"#).unwrap();
        assert_eq!(settings.language, Language::Dutch);
    }

    #[test]
    fn test_negative_benchmark_rejected() {
        let err = Settings::from_json(r#"{"benchmark_tonnes_per_month": -1}"#).unwrap_err();
        assert!(matches!(err, CarbonError::Parse(_)));
    }

    #[test]
    fn test_default_factors() {
        let factors = Settings::default().factors().unwrap();
        assert_eq!(factors, EmissionFactors::default());
    }
}
