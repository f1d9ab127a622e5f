use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

use maze_common::MazeConfig;

const DEFAULT_LOG_FILTER: &str = "info";

// ============================================================================
// Logging
// ============================================================================

// RUST_LOG overrides the default filter
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A second init (tests, embedding) keeps the first subscriber
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

// ============================================================================
// Maze Configuration
// ============================================================================

// Command-line values that win over the config file
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub grid_size: Option<i32>,
}

pub fn load_maze_config(path: Option<&Path>, overrides: ConfigOverrides) -> Result<MazeConfig> {
    let mut config = match path {
        Some(path) => MazeConfig::load(path).with_context(|| format!("Failed to load maze config {}", path.display()))?,
        None => MazeConfig::default(),
    };

    if let Some(seed) = overrides.seed {
        config.seed = seed;
    }
    if let Some(size) = overrides.grid_size {
        config.grid_size = size;
    }

    config.validate().context("Invalid maze config")?;
    Ok(config)
}
