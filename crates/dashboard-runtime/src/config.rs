//! Dashboard configuration, loadable from YAML.

use sales_core::{CoreError, YearRange};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables of the recompute pass. Every field has a default, so a YAML file
/// only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Year used when the free-text year box is unusable.
    pub default_text_year: i32,
    /// Years outside this range count as unusable.
    pub plausible_years: YearRange,
    pub top_global_count: usize,
    pub category_top_count: usize,
    pub regional_top_count: usize,
    /// Hole ratio of the platform donut, in [0, 1).
    pub donut_hole: f64,
    /// Pixel height of the regional chart.
    pub regional_chart_height: u32,
    /// Sales table to load when none is given on the command line.
    pub dataset_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_text_year: 2003,
            plausible_years: YearRange::default(),
            top_global_count: 10,
            category_top_count: 10,
            regional_top_count: 50,
            donut_hole: 0.4,
            regional_chart_height: 500,
            dataset_path: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: DashboardConfig = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.plausible_years.validate()?;
        for (name, n) in [
            ("top_global_count", self.top_global_count),
            ("category_top_count", self.category_top_count),
            ("regional_top_count", self.regional_top_count),
        ] {
            if n == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be at least 1")));
            }
        }
        if !(0.0..1.0).contains(&self.donut_hole) {
            return Err(ConfigError::Invalid(format!(
                "donut_hole {} is outside [0, 1)",
                self.donut_hole
            )));
        }
        Ok(())
    }

    pub fn top_global_n(&self) -> NonZeroUsize {
        at_least_one(self.top_global_count)
    }

    pub fn category_top_n(&self) -> NonZeroUsize {
        at_least_one(self.category_top_count)
    }

    pub fn regional_top_n(&self) -> NonZeroUsize {
        at_least_one(self.regional_top_count)
    }
}

fn at_least_one(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN)
}

/// Read and validate a YAML configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DashboardConfig, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    DashboardConfig::from_yaml_str(&text)
}
