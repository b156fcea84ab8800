//! Configuration settings for the toroidal Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub cadence: CadenceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Starting delay and adjustment step; the bounds are fixed at
/// [`MIN_CADENCE_SECONDS`, `MAX_CADENCE_SECONDS`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadenceConfig {
    pub initial_seconds: f64,
    pub step_seconds: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub summary_file: Option<PathBuf>,
    pub final_grid_file: Option<PathBuf>,
}

pub const DEFAULT_HEIGHT: usize = 25;
pub const DEFAULT_WIDTH: usize = 80;
pub const MIN_CADENCE_SECONDS: f64 = 0.05;
pub const MAX_CADENCE_SECONDS: f64 = 1.0;

impl Default for Settings {
    fn default() -> Self {
        Self {
            cadence: CadenceConfig {
                initial_seconds: 0.15,
                step_seconds: 0.01,
            },
            output: OutputConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let cadence = &self.cadence;

        if !cadence.initial_seconds.is_finite() || !cadence.step_seconds.is_finite() {
            anyhow::bail!(
                "Cadence values must be finite, got initial {} step {}",
                cadence.initial_seconds,
                cadence.step_seconds
            );
        }
        if cadence.step_seconds <= 0.0 {
            anyhow::bail!("Cadence step must be positive");
        }
        if !(MIN_CADENCE_SECONDS..=MAX_CADENCE_SECONDS).contains(&cadence.initial_seconds) {
            anyhow::bail!(
                "Initial cadence {} lies outside [{}, {}]",
                cadence.initial_seconds,
                MIN_CADENCE_SECONDS,
                MAX_CADENCE_SECONDS
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref summary) = cli_overrides.summary_file {
            self.output.summary_file = Some(summary.clone());
        }
        if let Some(ref final_grid) = cli_overrides.final_grid_file {
            self.output.final_grid_file = Some(final_grid.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub summary_file: Option<PathBuf>,
    pub final_grid_file: Option<PathBuf>,
}
