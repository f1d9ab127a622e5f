use std::fmt;

use maze_common::{Maze, MazeRng, PlacementError, Position};

// ============================================================================
// Spawn Placement
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnFailure {
    NoWalkableCell,
    Rejected(PlacementError),
}

impl fmt::Display for SpawnFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWalkableCell => write!(f, "no walkable cell available"),
            Self::Rejected(err) => write!(f, "placement rejected: {err}"),
        }
    }
}

impl std::error::Error for SpawnFailure {}

// Pick a spawn point and validate it before anything is committed
pub fn choose_spawn_position(maze: &Maze, rng: &mut MazeRng, exclude_radius: u32) -> Result<Position, SpawnFailure> {
    let position = maze
        .random_walkable_position(rng, exclude_radius)
        .ok_or(SpawnFailure::NoWalkableCell)?;
    commit_position(maze, position)
}

// Validate a caller-chosen position. Invalid positions are reported, never
// nudged onto a walkable cell.
pub fn commit_position(maze: &Maze, position: Position) -> Result<Position, SpawnFailure> {
    maze.validate_placement(&position).map_err(SpawnFailure::Rejected)?;
    Ok(position)
}
