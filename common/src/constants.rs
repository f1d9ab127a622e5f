// ============================================================================
// Grid & Field
// ============================================================================

pub const DEFAULT_GRID_SIZE: i32 = 50; // Cells per side
pub const DEFAULT_PATH_WIDTH: i32 = 4; // Blocks per cell edge
pub const DEFAULT_WALL_HEIGHT: i32 = 3; // Blocks stacked above the floor plate

// Entrance/exit staging areas in front of and behind the grid
pub const DEFAULT_PLATFORM_DEPTH: i32 = 4; // Blocks along z
pub const DEFAULT_PLATFORM_WIDTH: i32 = 8; // Blocks along x

// ============================================================================
// Generation
// ============================================================================

pub const DEFAULT_SEED: u64 = 12345;

// Fraction of cells receiving an extra wall removal after carving
pub const DEFAULT_LOOP_DENSITY: f64 = 0.10;

// Mixed into the maze seed when no palette seed is configured, so the wall
// palette stream never replays the carving stream.
pub const PALETTE_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

// ============================================================================
// Heights
// ============================================================================

pub const FLOOR_Y: i32 = 0; // Floor and platform plates
pub const STANDING_HEIGHT: f32 = 1.0; // Anchor height above the floor plate
pub const CELL_CENTER_LIFT: f32 = 1.0; // Extra lift for objects placed at cell centres

// ============================================================================
// Block Types
// ============================================================================

pub const DEFAULT_FLOOR_BLOCK: u16 = 1; // stone
pub const DEFAULT_PLATFORM_BLOCK: u16 = 2; // smooth stone
pub const DEFAULT_WALL_PALETTE: [u16; 4] = [
    10, // stone bricks
    11, // mossy stone bricks
    12, // cracked stone bricks
    13, // cobblestone
];
