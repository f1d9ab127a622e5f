use bevy_ecs::prelude::*;
use tracing::{info, warn};

use super::placement::choose_spawn_position;
use crate::{
    components::NpcId,
    constants::NPC_SPAWN_INTERVAL_TICKS,
    resources::{MazeMap, NpcMap, NpcSpawner, PlacementFailures, PlacementRng, SpawnConfig, TickCounter},
};
use maze_common::markers::NpcMarker;

// ============================================================================
// NPC Spawn Systems
// ============================================================================

pub fn tick_counter_system(mut ticks: ResMut<TickCounter>) {
    ticks.0 += 1;
}

// Spawn one NPC per interval until the configured population is reached
pub fn npc_spawn_system(
    mut commands: Commands,
    maze: Res<MazeMap>,
    config: Res<SpawnConfig>,
    ticks: Res<TickCounter>,
    mut rng: ResMut<PlacementRng>,
    mut spawner: ResMut<NpcSpawner>,
    mut npcs: ResMut<NpcMap>,
    mut failures: ResMut<PlacementFailures>,
) {
    if npcs.0.len() >= config.num_npcs {
        return;
    }

    let due = spawner
        .last_spawn_tick
        .is_none_or(|last| ticks.0.saturating_sub(last) >= NPC_SPAWN_INTERVAL_TICKS);
    if !due {
        return;
    }
    spawner.last_spawn_tick = Some(ticks.0);

    match choose_spawn_position(&maze.0, &mut rng.0, config.exclude_radius) {
        Ok(position) => {
            let npc_id = NpcId(spawner.next_id);
            spawner.next_id += 1;
            let entity = commands.spawn((NpcMarker, npc_id, position)).id();
            npcs.0.insert(npc_id, entity);
            info!(
                "spawned npc {:?} at ({:.1}, {:.1}), {}/{}",
                npc_id,
                position.x,
                position.z,
                npcs.0.len(),
                config.num_npcs
            );
        }
        Err(err) => {
            failures.0 += 1;
            warn!("npc spawn skipped: {}", err);
        }
    }
}
