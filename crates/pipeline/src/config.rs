//! Pipeline configuration

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding raw dataset files
    pub data_raw_dir: PathBuf,

    /// Directory for exported tables
    pub data_processed_dir: PathBuf,

    /// Raw dataset file name inside `data_raw_dir`
    pub input_file: String,

    /// Shared window size for smoothing and slope estimation
    pub window_size: usize,

    /// Sensor ids to smooth and trend; ids unknown to the catalog are
    /// filtered out before processing
    pub target_sensors: Vec<String>,

    /// Unit to extract a trend overlay for (skipped when absent)
    pub trend_unit: Option<u32>,

    /// Sensors included in the trend overlay
    pub trend_sensors: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_raw_dir: PathBuf::from("data/raw"),
            data_processed_dir: PathBuf::from("data/processed"),
            input_file: "train_FD001.txt".to_string(),
            window_size: 5,
            target_sensors: [
                "s_2", "s_3", "s_4", "s_7", "s_11", "s_12", "s_15", "s_17", "s_20", "s_21",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            trend_unit: None,
            trend_sensors: vec!["s_2".to_string(), "s_4".to_string()],
        }
    }
}

impl PipelineConfig {
    /// Load configuration: defaults, overlaid by an optional TOML file,
    /// overlaid by `PM_`-prefixed environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&PipelineConfig::default())?);
        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("pipeline").required(false)),
        };
        builder
            .add_source(Environment::with_prefix("PM").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_processing_policy() {
        let config = PipelineConfig::default();
        assert_eq!(config.window_size, 5);
        assert_eq!(config.target_sensors.len(), 10);
        assert_eq!(config.input_file, "train_FD001.txt");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = std::env::temp_dir().join("pipeline_test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "window_size = 8\ntrend_unit = 3").unwrap();
        let config = PipelineConfig::load(Some(&path)).unwrap();
        assert_eq!(config.window_size, 8);
        assert_eq!(config.trend_unit, Some(3));
        // Untouched fields keep their defaults.
        assert_eq!(config.input_file, "train_FD001.txt");
        std::fs::remove_file(&path).ok();
    }
}
