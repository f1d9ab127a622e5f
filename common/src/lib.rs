//! Seeded braided-maze generation and the world-space query layer built on it.
//!
//! A [`Maze`] is built once from a [`MazeConfig`] by a fixed pipeline
//! (initialize, carve, repair, inject loops) driven by one [`MazeRng`] stream,
//! and is read-only afterwards.

pub mod carve;
pub mod components;
pub mod config;
pub mod constants;
pub mod coords;
pub mod error;
pub mod grid;
pub mod loops;
pub mod markers;
pub mod maze;
pub mod placement;
pub mod queries;
pub mod repair;
pub mod rng;

pub use components::Position;
pub use config::MazeConfig;
pub use coords::BlockBox;
pub use error::{MazeError, PlacementError};
pub use grid::{CellPos, Direction, Grid, GridCell};
pub use maze::{BuildStats, Maze};
pub use placement::{BlockFill, BlockTypeId, FillKind};
pub use rng::MazeRng;
