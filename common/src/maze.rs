use std::fmt;
use tracing::{debug, info, warn};

use crate::{
    carve::carve_passages,
    config::MazeConfig,
    constants::{FLOOR_Y, STANDING_HEIGHT},
    error::MazeError,
    grid::{CellPos, Direction, Grid},
    loops::{LoopStats, inject_loops},
    repair::connect_exit,
    rng::MazeRng,
};

// ============================================================================
// Build Statistics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildStats {
    pub carved_cells: usize,
    pub repaired: bool,
    pub repair_steps: usize,
    pub loops: LoopStats,
}

// ============================================================================
// Maze
// ============================================================================

// A fully built maze. Only `Maze::build` produces one, so a value of this type
// is always carved, repaired and loop-injected; it is immutable afterwards.
#[derive(Debug, Clone)]
pub struct Maze {
    config: MazeConfig,
    grid: Grid,
    entrance: CellPos,
    exit: CellPos,
    anchor_height: f32,
    stats: BuildStats,
}

impl Maze {
    pub fn build(config: MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;

        let (entrance, exit) = endpoints(config.grid_size);
        let mut grid = Grid::initialize(config.grid_size);
        let mut rng = MazeRng::new(config.seed);
        let stats = generate(&mut grid, entrance, exit, config.loop_density, &mut rng);

        let anchor_height = FLOOR_Y as f32 + STANDING_HEIGHT;

        info!(
            "built {}x{} maze (seed {}): {} loop walls opened, repair {}",
            config.grid_size,
            config.grid_size,
            config.seed,
            stats.loops.opened,
            if stats.repaired { "applied" } else { "not needed" }
        );

        Ok(Self {
            config,
            grid,
            entrance,
            exit,
            anchor_height,
            stats,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &MazeConfig {
        &self.config
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn size(&self) -> i32 {
        self.config.grid_size
    }

    #[must_use]
    pub const fn path_width(&self) -> i32 {
        self.config.path_width
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.config.seed
    }

    #[must_use]
    pub const fn entrance(&self) -> CellPos {
        self.entrance
    }

    #[must_use]
    pub const fn exit(&self) -> CellPos {
        self.exit
    }

    // Standing height cached at build time, shared by every anchor and
    // cell-centre query of this maze
    #[must_use]
    pub const fn anchor_height(&self) -> f32 {
        self.anchor_height
    }

    #[must_use]
    pub const fn stats(&self) -> &BuildStats {
        &self.stats
    }
}

// Entrance centred on the top edge, exit centred on the bottom edge
#[must_use]
pub const fn endpoints(size: i32) -> (CellPos, CellPos) {
    (CellPos::new(size / 2, 0), CellPos::new(size / 2, size - 1))
}

// Run the full pipeline on `grid`: reset, open the endpoints, carve, repair,
// inject loops. The grid and the stream are both reset first, so the result
// depends only on the stream's seed.
pub fn generate(grid: &mut Grid, entrance: CellPos, exit: CellPos, loop_density: f64, rng: &mut MazeRng) -> BuildStats {
    grid.reset();
    rng.reset(rng.seed());

    grid.open_boundary(entrance, Direction::North);
    grid.open_boundary(exit, Direction::South);

    let carved_cells = carve_passages(grid, entrance, rng);
    debug!("carved {} of {} cells", carved_cells, grid.cell_count());

    let repair_steps = connect_exit(grid, exit);
    let repaired = repair_steps > 0;
    if repaired {
        warn!("exit {:?} was unreachable after carving, joined with {} steps", exit, repair_steps);
    }

    let loops = inject_loops(grid, loop_density, rng);
    debug!("loop injection: {} attempts, {} walls opened", loops.attempts, loops.opened);

    debug_assert!(grid.walls_consistent(), "wall pairs out of sync after build");
    debug_assert_eq!(grid.visited_count(), grid.cell_count(), "unvisited cells after build");

    BuildStats {
        carved_cells,
        repaired,
        repair_steps,
        loops,
    }
}

// ============================================================================
// Text Rendering
// ============================================================================

// ASCII view for logs and debugging: walls as `+--+` and `|`, unwalkable
// cells filled with `##`.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size();

        for y in 0..size {
            let mut top = String::from("+");
            let mut body = String::new();

            for x in 0..size {
                let pos = CellPos::new(x, y);
                top.push_str(if self.grid.has_wall(pos, Direction::North) { "--" } else { "  " });
                top.push('+');

                body.push(if self.grid.has_wall(pos, Direction::West) { '|' } else { ' ' });
                body.push_str(if self.grid.is_visited(pos) { "  " } else { "##" });
            }

            let last = CellPos::new(size - 1, y);
            body.push(if self.grid.has_wall(last, Direction::East) { '|' } else { ' ' });

            writeln!(f, "{top}")?;
            writeln!(f, "{body}")?;
        }

        let mut bottom = String::from("+");
        for x in 0..size {
            let pos = CellPos::new(x, size - 1);
            bottom.push_str(if self.grid.has_wall(pos, Direction::South) { "--" } else { "  " });
            bottom.push('+');
        }
        writeln!(f, "{bottom}")
    }
}
