use bevy_ecs::prelude::*;
use tracing::{debug, warn};

use super::placement::choose_spawn_position;
use crate::{
    components::ItemId,
    resources::{ItemMap, MazeMap, PlacementFailures, PlacementRng, SpawnConfig},
};
use maze_common::markers::ItemMarker;

// ============================================================================
// Item Placement Systems
// ============================================================================

// Place the initial set of items once, on walkable cells away from the
// entrance and exit
pub fn item_initial_spawn_system(
    mut commands: Commands,
    maze: Res<MazeMap>,
    config: Res<SpawnConfig>,
    mut rng: ResMut<PlacementRng>,
    mut items: ResMut<ItemMap>,
    mut failures: ResMut<PlacementFailures>,
) {
    if !items.0.is_empty() {
        return;
    }

    for i in 0..config.num_items {
        match choose_spawn_position(&maze.0, &mut rng.0, config.exclude_radius) {
            Ok(position) => {
                let item_id = ItemId(i as u32);
                let entity = commands.spawn((ItemMarker, item_id, position)).id();
                items.0.insert(item_id, entity);
                debug!("placed item {:?} at ({:.1}, {:.1})", item_id, position.x, position.z);
            }
            Err(err) => {
                failures.0 += 1;
                warn!("skipping item {}: {}", i, err);
            }
        }
    }
}
