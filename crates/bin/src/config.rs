//! Demo configuration.

use quadtree::{Bounds, TreeConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_container")]
    pub container: Bounds,
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub workload: WorkloadConfig,
}

impl Config {
    /// Load configuration from `path`, writing the defaults there when the
    /// file does not exist yet.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container: default_container(),
            tree: TreeConfig::default(),
            workload: WorkloadConfig::default(),
        }
    }
}

fn default_container() -> Bounds {
    Bounds::new(0.0, 0.0, 1000.0, 1000.0)
}

/// Size of the random workload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkloadConfig {
    /// Points inserted up front.
    #[serde(default = "default_points")]
    pub points: usize,
    /// Random range queries checked against a linear scan.
    #[serde(default = "default_queries")]
    pub queries: usize,
    /// Points removed again after the queries.
    #[serde(default = "default_removals")]
    pub removals: usize,
    /// RNG seed; a random one is picked when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
            queries: default_queries(),
            removals: default_removals(),
            seed: None,
        }
    }
}

fn default_points() -> usize {
    10_000
}
fn default_queries() -> usize {
    200
}
fn default_removals() -> usize {
    2_000
}
