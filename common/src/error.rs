//! Error types for maze construction and placement validation.

use std::fmt;

use crate::components::Position;

/// Errors that make a maze configuration unbuildable.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// Grid size must be at least one cell per side.
    InvalidGridSize(i32),
    /// Path width must be at least one block.
    InvalidPathWidth(i32),
    /// Wall height must be at least one block.
    InvalidWallHeight(i32),
    /// Platform dimensions must be at least one block each.
    InvalidPlatform {
        /// Depth along z.
        depth: i32,
        /// Width along x.
        width: i32,
    },
    /// Loop density must be a finite value in `[0, 1]`.
    InvalidLoopDensity(f64),
    /// At least one wall block type is required.
    EmptyWallPalette,
    /// The world extent, including platforms, does not fit in block coordinates.
    WorldTooLarge {
        /// Cells per side.
        grid_size: i32,
        /// Blocks per cell.
        path_width: i32,
    },
    /// The configuration source could not be read or parsed.
    Config(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize(size) => write!(f, "grid size must be positive, got {size}"),
            Self::InvalidPathWidth(width) => write!(f, "path width must be positive, got {width}"),
            Self::InvalidWallHeight(height) => write!(f, "wall height must be positive, got {height}"),
            Self::InvalidPlatform { depth, width } => {
                write!(f, "platform must be at least 1x1 blocks, got depth {depth} width {width}")
            }
            Self::InvalidLoopDensity(density) => {
                write!(f, "loop density must be within [0, 1], got {density}")
            }
            Self::EmptyWallPalette => write!(f, "wall palette must contain at least one block type"),
            Self::WorldTooLarge { grid_size, path_width } => write!(
                f,
                "maze of {grid_size} cells at path width {path_width} overflows block coordinates"
            ),
            Self::Config(reason) => write!(f, "invalid maze configuration: {reason}"),
        }
    }
}

impl std::error::Error for MazeError {}

/// A spawn was requested at a point the maze does not consider walkable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementError {
    NotWalkable { position: Position },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotWalkable { position } => write!(
                f,
                "position ({:.2}, {:.2}, {:.2}) is not walkable",
                position.x, position.y, position.z
            ),
        }
    }
}

impl std::error::Error for PlacementError {}
