//! Domain knowledge as configuration.
//!
//! Everything the sorter knows about the world (category names, prior
//! counts, sensor tables, bins and their costs) lives in a [`SorterConfig`].
//! The defaults are the textbook values; a TOML file can replace them without
//! touching any inference code.
//!
//! ```toml
//! categories = ["cardboard", "paper", "can", "scrap_metal", "bottle"]
//! prior = [200.0, 300.0, 250.0, 200.0, 50.0]
//!
//! [conductivity]
//! states = ["false", "true"]
//! table = [[0.99, 0.01], ...]  # one row per category
//! ```
//!
//! Shapes are checked when the config is turned into
//! [`SensorModels`](crate::SensorModels), not at parse time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SorterError;

/// A discrete sensor: state names and P(state | category), one row per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscreteSensorConfig {
    pub states: Vec<String>,
    pub table: Vec<Vec<f64>>,
}

/// A Normal measurement per category, as parallel vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GaussianSensorConfig {
    pub means: Vec<f64>,
    pub sigmas: Vec<f64>,
}

/// Full description of the sorting problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SorterConfig {
    /// Category names, in index order.
    pub categories: Vec<String>,
    /// Prior weights or counts, one per category.
    pub prior: Vec<f64>,
    /// Action names, in index order.
    pub actions: Vec<String>,
    /// `costs[action][category]`.
    pub costs: Vec<Vec<f64>>,
    pub conductivity: DiscreteSensorConfig,
    pub detection: DiscreteSensorConfig,
    pub weight: GaussianSensorConfig,
}

impl Default for SorterConfig {
    fn default() -> Self {
        fn names(names: &[&str]) -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        }

        Self {
            categories: names(&["cardboard", "paper", "can", "scrap_metal", "bottle"]),
            // Counts out of 1000 pieces of trash
            prior: vec![200.0, 300.0, 250.0, 200.0, 50.0],
            actions: names(&["glass_bin", "metal_bin", "paper_bin", "nop"]),
            costs: vec![
                vec![2.0, 2.0, 4.0, 6.0, 0.0],
                vec![1.0, 1.0, 0.0, 0.0, 2.0],
                vec![0.0, 0.0, 5.0, 10.0, 3.0],
                vec![1.0, 1.0, 1.0, 1.0, 1.0],
            ],
            conductivity: DiscreteSensorConfig {
                states: names(&["false", "true"]),
                table: vec![
                    vec![0.99, 0.01],
                    vec![0.99, 0.01],
                    vec![0.1, 0.9],
                    vec![0.15, 0.85],
                    vec![0.95, 0.05],
                ],
            },
            detection: DiscreteSensorConfig {
                states: names(&["bottle", "cardboard", "paper"]),
                table: vec![
                    vec![0.02, 0.88, 0.1],
                    vec![0.02, 0.2, 0.78],
                    vec![0.33, 0.33, 0.34],
                    vec![0.33, 0.33, 0.34],
                    vec![0.95, 0.02, 0.03],
                ],
            },
            weight: GaussianSensorConfig {
                means: vec![20.0, 5.0, 15.0, 150.0, 300.0],
                sigmas: vec![10.0, 5.0, 5.0, 100.0, 200.0],
            },
        }
    }
}

impl SorterConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, SorterError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SorterError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SorterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded sorter config");
        Ok(config)
    }

    /// Render the config as TOML.
    pub fn to_toml_string(&self) -> Result<String, SorterError> {
        Ok(toml::to_string(self)?)
    }
}
