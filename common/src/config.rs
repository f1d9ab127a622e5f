use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    constants::*,
    error::MazeError,
    placement::BlockTypeId,
};

// ============================================================================
// Maze Configuration
// ============================================================================

// Everything a build needs. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub grid_size: i32,
    pub path_width: i32,
    pub wall_height: i32,
    pub platform_depth: i32,
    pub platform_width: i32,
    pub seed: u64,
    pub loop_density: f64,
    // Seed of the cosmetic wall-block stream; derived from `seed` when absent
    pub palette_seed: Option<u64>,
    pub floor_block: BlockTypeId,
    pub platform_block: BlockTypeId,
    pub wall_palette: Vec<BlockTypeId>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            path_width: DEFAULT_PATH_WIDTH,
            wall_height: DEFAULT_WALL_HEIGHT,
            platform_depth: DEFAULT_PLATFORM_DEPTH,
            platform_width: DEFAULT_PLATFORM_WIDTH,
            seed: DEFAULT_SEED,
            loop_density: DEFAULT_LOOP_DENSITY,
            palette_seed: None,
            floor_block: BlockTypeId(DEFAULT_FLOOR_BLOCK),
            platform_block: BlockTypeId(DEFAULT_PLATFORM_BLOCK),
            wall_palette: DEFAULT_WALL_PALETTE.iter().copied().map(BlockTypeId).collect(),
        }
    }
}

impl MazeConfig {
    pub fn from_json_str(json: &str) -> Result<Self, MazeError> {
        serde_json::from_str(json).map_err(|e| MazeError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| MazeError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    // Refuse degenerate mazes up front
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.grid_size <= 0 {
            return Err(MazeError::InvalidGridSize(self.grid_size));
        }
        if self.path_width <= 0 {
            return Err(MazeError::InvalidPathWidth(self.path_width));
        }
        if self.wall_height <= 0 {
            return Err(MazeError::InvalidWallHeight(self.wall_height));
        }
        if self.platform_depth <= 0 || self.platform_width <= 0 {
            return Err(MazeError::InvalidPlatform {
                depth: self.platform_depth,
                width: self.platform_width,
            });
        }
        if !self.loop_density.is_finite() || !(0.0..=1.0).contains(&self.loop_density) {
            return Err(MazeError::InvalidLoopDensity(self.loop_density));
        }
        if self.wall_palette.is_empty() {
            return Err(MazeError::EmptyWallPalette);
        }
        if !self.fits_block_space() {
            return Err(MazeError::WorldTooLarge {
                grid_size: self.grid_size,
                path_width: self.path_width,
            });
        }
        Ok(())
    }

    // Every coordinate a build or query derives stays below the grid extent
    // plus the larger platform dimension
    fn fits_block_space(&self) -> bool {
        let margin = self.platform_depth.max(self.platform_width);
        self.grid_size.checked_mul(self.grid_size).is_some()
            && self
                .grid_size
                .checked_mul(self.path_width)
                .and_then(|extent| extent.checked_add(margin))
                .is_some()
    }

    #[must_use]
    pub fn effective_palette_seed(&self) -> u64 {
        self.palette_seed.unwrap_or(self.seed ^ PALETTE_SEED_SALT)
    }

    // World extent of the grid along one axis, in blocks
    #[must_use]
    pub const fn grid_extent(&self) -> i32 {
        self.grid_size * self.path_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MazeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 50);
        assert_eq!(config.path_width, 4);
        assert_eq!(config.grid_extent(), 200);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let bad_size = MazeConfig { grid_size: 0, ..MazeConfig::default() };
        assert_eq!(bad_size.validate(), Err(MazeError::InvalidGridSize(0)));

        let bad_width = MazeConfig { path_width: -2, ..MazeConfig::default() };
        assert_eq!(bad_width.validate(), Err(MazeError::InvalidPathWidth(-2)));

        let bad_height = MazeConfig { wall_height: 0, ..MazeConfig::default() };
        assert_eq!(bad_height.validate(), Err(MazeError::InvalidWallHeight(0)));

        let bad_platform = MazeConfig { platform_depth: 0, ..MazeConfig::default() };
        assert!(matches!(bad_platform.validate(), Err(MazeError::InvalidPlatform { .. })));
    }

    #[test]
    fn rejects_bad_density_and_palette() {
        let nan = MazeConfig { loop_density: f64::NAN, ..MazeConfig::default() };
        assert!(matches!(nan.validate(), Err(MazeError::InvalidLoopDensity(_))));

        let too_dense = MazeConfig { loop_density: 1.5, ..MazeConfig::default() };
        assert!(matches!(too_dense.validate(), Err(MazeError::InvalidLoopDensity(_))));

        let no_palette = MazeConfig { wall_palette: Vec::new(), ..MazeConfig::default() };
        assert_eq!(no_palette.validate(), Err(MazeError::EmptyWallPalette));
    }

    #[test]
    fn rejects_worlds_that_overflow_block_space() {
        let wide_paths = MazeConfig { grid_size: 2, path_width: 2_000_000_000, ..MazeConfig::default() };
        assert_eq!(
            wide_paths.validate(),
            Err(MazeError::WorldTooLarge { grid_size: 2, path_width: 2_000_000_000 })
        );

        let huge_grid = MazeConfig { grid_size: 100_000, path_width: 1, ..MazeConfig::default() };
        assert!(matches!(huge_grid.validate(), Err(MazeError::WorldTooLarge { .. })));

        let deep_platform = MazeConfig {
            grid_size: 1,
            path_width: i32::MAX,
            platform_depth: 1,
            ..MazeConfig::default()
        };
        assert!(matches!(deep_platform.validate(), Err(MazeError::WorldTooLarge { .. })));
    }

    #[test]
    fn largest_fitting_world_is_accepted() {
        let config = MazeConfig {
            grid_size: 2,
            path_width: (i32::MAX - DEFAULT_PLATFORM_WIDTH) / 2,
            ..MazeConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = MazeConfig::from_json_str(r#"{ "grid_size": 9, "seed": 7, "wall_palette": [40, 41] }"#)
            .expect("valid json");
        assert_eq!(config.grid_size, 9);
        assert_eq!(config.seed, 7);
        assert_eq!(config.path_width, DEFAULT_PATH_WIDTH);
        assert_eq!(config.wall_palette, vec![BlockTypeId(40), BlockTypeId(41)]);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(MazeConfig::from_json_str("{ grid_size: "), Err(MazeError::Config(_))));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        assert!(matches!(
            MazeConfig::load("/nonexistent/maze-config.json"),
            Err(MazeError::Config(_))
        ));
    }

    #[test]
    fn palette_seed_differs_from_maze_seed() {
        let config = MazeConfig::default();
        assert_ne!(config.effective_palette_seed(), config.seed);

        let pinned = MazeConfig { palette_seed: Some(5), ..MazeConfig::default() };
        assert_eq!(pinned.effective_palette_seed(), 5);
    }
}
