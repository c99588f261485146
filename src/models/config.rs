use lineart::{DistanceMetric, DominantOptions, EdgeOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Line-art extraction settings
    #[serde(default)]
    pub edge: EdgeConfig,

    /// Dominant-color extraction settings
    #[serde(default)]
    pub colors: ColorsConfig,

    /// Palette matching settings
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Line-art settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EdgeConfig {
    /// Edge intensity (recommended 30-38)
    #[serde(default = "default_intensity")]
    pub intensity: i32,

    /// Maximum output width in pixels
    #[serde(default = "default_max_output_width")]
    pub max_output_width: u32,
}

fn default_intensity() -> i32 {
    lineart::edge::DEFAULT_INTENSITY
}

fn default_max_output_width() -> u32 {
    lineart::edge::DEFAULT_MAX_OUTPUT_WIDTH
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            intensity: default_intensity(),
            max_output_width: default_max_output_width(),
        }
    }
}

impl EdgeConfig {
    pub fn to_options(&self) -> EdgeOptions {
        EdgeOptions::new()
            .intensity(self.intensity)
            .max_output_width(self.max_output_width)
    }
}

/// Dominant-color settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ColorsConfig {
    /// Requested number of colors
    #[serde(default = "default_k")]
    pub k: usize,

    /// Fixed k-means seed for reproducible output (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Images wider than this are downscaled before sampling
    #[serde(default = "default_max_sample_width")]
    pub max_sample_width: u32,
}

fn default_k() -> usize {
    lineart::dominant::DEFAULT_COLOR_COUNT
}

fn default_max_sample_width() -> u32 {
    lineart::dominant::DEFAULT_MAX_SAMPLE_WIDTH
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            seed: None,
            max_sample_width: default_max_sample_width(),
        }
    }
}

impl ColorsConfig {
    pub fn to_options(&self) -> DominantOptions {
        DominantOptions::new()
            .k(self.k)
            .max_sample_width(self.max_sample_width)
    }
}

/// Palette matching settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MatchingConfig {
    /// Matches reported per color (clamped to 1-5)
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Distance metric: de76 or de2000
    #[serde(default)]
    pub metric: DistanceMetric,

    /// Default palette file (JSON)
    #[serde(default)]
    pub palette: Option<PathBuf>,
}

fn default_top_k() -> usize {
    3
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            metric: DistanceMetric::default(),
            palette: None,
        }
    }
}

impl AppConfig {
    /// Parse a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from `path`, falling back to defaults.
    ///
    /// A missing path or file yields the defaults; a file that cannot be
    /// read or parsed is reported and also yields the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        intensity = config.edge.intensity,
                        k = config.colors.k,
                        metric = ?config.matching.metric,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
