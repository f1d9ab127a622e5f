// ============================================================================
// Server Constants
// ============================================================================

pub const SERVER_LOOP_FREQUENCY: u64 = 30; // ticks per second

// Item settings
pub const ITEMS_NUM: usize = 20; // placed once at startup

// NPC settings
pub const NPCS_NUM: usize = 10;
pub const NPC_SPAWN_INTERVAL_TICKS: u64 = 30; // one NPC per interval until NPCS_NUM

// Spawns keep at least this many cells (Manhattan) away from entrance and exit
pub const SPAWN_EXCLUDE_RADIUS: u32 = 5;

// Distance to the exit anchor that counts as reaching the goal
pub const GOAL_RADIUS: f32 = 2.0;

// Mixed into the maze seed for the placement stream when none is given
pub const PLACEMENT_SEED_SALT: u64 = 0xD1B5_4A32_D192_ED03;
