use bevy_ecs::prelude::*;
use std::{collections::HashMap, sync::Arc};

use crate::{
    components::{ItemId, NpcId},
    constants::GOAL_RADIUS,
};
use maze_common::{Maze, MazeRng, Position};

// ============================================================================
// ECS Resources
// ============================================================================

// The maze, built once at startup and shared read-only
#[derive(Resource, Clone)]
pub struct MazeMap(pub Arc<Maze>);

// Stream used for every random placement. Kept apart from the maze's own
// build stream, which is gone once the maze is built.
#[derive(Resource)]
pub struct PlacementRng(pub MazeRng);

#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnConfig {
    pub num_items: usize,
    pub num_npcs: usize,
    pub exclude_radius: u32,
}

// Entrance/exit anchors for player spawn and goal checks
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnAnchors {
    pub entrance: Position,
    pub exit: Position,
}

impl SpawnAnchors {
    #[must_use]
    pub fn from_maze(maze: &Maze) -> Self {
        Self {
            entrance: maze.entrance_anchor(),
            exit: maze.exit_anchor(),
        }
    }

    #[must_use]
    pub fn reached_exit(&self, position: &Position) -> bool {
        position.distance_xz(&self.exit) <= GOAL_RADIUS
    }
}

#[derive(Resource, Default)]
pub struct ItemMap(pub HashMap<ItemId, Entity>);

#[derive(Resource, Default)]
pub struct NpcMap(pub HashMap<NpcId, Entity>);

#[derive(Resource, Default)]
pub struct NpcSpawner {
    pub next_id: u32,
    pub last_spawn_tick: Option<u64>,
}

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickCounter(pub u64);

// Spawns skipped because no valid position was found
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementFailures(pub u32);
