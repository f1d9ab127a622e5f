use bevy_ecs::{prelude::*, schedule::ExecutorKind};
use std::sync::Arc;
use tracing::info;

use crate::{
    resources::*,
    systems::{item_initial_spawn_system, npc_spawn_system, tick_counter_system},
};
use maze_common::{
    Maze, MazeRng, Position,
    markers::{ItemMarker, NpcMarker},
};

// ============================================================================
// Server App
// ============================================================================

// ECS world plus the per-tick schedule. Startup systems run once inside `new`.
pub struct ServerApp {
    world: World,
    update: Schedule,
}

impl ServerApp {
    #[must_use]
    pub fn new(maze: Arc<Maze>, spawn: SpawnConfig, placement_seed: u64) -> Self {
        let mut world = World::new();
        world.insert_resource(SpawnAnchors::from_maze(&maze));
        world.insert_resource(MazeMap(maze));
        world.insert_resource(PlacementRng(MazeRng::new(placement_seed)));
        world.insert_resource(spawn);
        world.insert_resource(ItemMap::default());
        world.insert_resource(NpcMap::default());
        world.insert_resource(NpcSpawner::default());
        world.insert_resource(TickCounter::default());
        world.insert_resource(PlacementFailures::default());

        let mut startup = Schedule::default();
        startup.set_executor_kind(ExecutorKind::SingleThreaded);
        startup.add_systems(item_initial_spawn_system);
        startup.run(&mut world);

        let mut update = Schedule::default();
        update.set_executor_kind(ExecutorKind::SingleThreaded);
        // Tick counter first so the spawn interval sees the current tick
        update.add_systems((tick_counter_system, npc_spawn_system).chain());

        let app = Self { world, update };
        info!(
            "server app ready: {} items placed, {} placement failures",
            app.item_count(),
            app.placement_failures()
        );
        app
    }

    pub fn tick(&mut self) {
        self.update.run(&mut self.world);
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.world.resource::<TickCounter>().0
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.world.resource::<ItemMap>().0.len()
    }

    #[must_use]
    pub fn npc_count(&self) -> usize {
        self.world.resource::<NpcMap>().0.len()
    }

    #[must_use]
    pub fn placement_failures(&self) -> u32 {
        self.world.resource::<PlacementFailures>().0
    }

    #[must_use]
    pub fn anchors(&self) -> SpawnAnchors {
        *self.world.resource::<SpawnAnchors>()
    }

    pub fn item_positions(&mut self) -> Vec<Position> {
        let mut query = self.world.query_filtered::<&Position, With<ItemMarker>>();
        query.iter(&self.world).copied().collect()
    }

    pub fn npc_positions(&mut self) -> Vec<Position> {
        let mut query = self.world.query_filtered::<&Position, With<NpcMarker>>();
        query.iter(&self.world).copied().collect()
    }
}
