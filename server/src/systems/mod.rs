pub mod items;
pub mod npcs;
pub mod placement;

pub use items::item_initial_spawn_system;
pub use npcs::{npc_spawn_system, tick_counter_system};
pub use placement::{SpawnFailure, choose_spawn_position, commit_position};
