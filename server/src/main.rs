use anyhow::{Context, Result};
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{info, warn};

use maze_common::Maze;
use maze_server::{
    BlockWorld, ConfigOverrides, ServerApp,
    constants::{ITEMS_NUM, NPCS_NUM, PLACEMENT_SEED_SALT, SERVER_LOOP_FREQUENCY, SPAWN_EXCLUDE_RADIUS},
    init_tracing, load_maze_config,
    resources::SpawnConfig,
};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser)]
#[command(author, version, about = "Maze Server", long_about = None)]
struct Args {
    // JSON maze config; defaults are used when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    // Override the maze seed
    #[arg(short, long)]
    seed: Option<u64>,

    // Override the grid size (cells per side)
    #[arg(long)]
    size: Option<i32>,

    // Number of ticks to run, 0 runs forever
    #[arg(long, default_value_t = 300)]
    ticks: u64,

    #[arg(long, default_value_t = ITEMS_NUM)]
    items: usize,

    #[arg(long, default_value_t = NPCS_NUM)]
    npcs: usize,

    // Manhattan distance in cells kept clear around entrance and exit
    #[arg(long, default_value_t = SPAWN_EXCLUDE_RADIUS)]
    exclude_radius: u32,

    // Seed for item/NPC placement; derived from the maze seed when absent
    #[arg(long)]
    placement_seed: Option<u64>,

    // Print the maze as ASCII after building
    #[arg(long, default_value_t = false)]
    print_maze: bool,
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let overrides = ConfigOverrides {
        seed: args.seed,
        grid_size: args.size,
    };
    let config = load_maze_config(args.config.as_deref(), overrides)?;
    let placement_seed = args.placement_seed.unwrap_or(config.seed ^ PLACEMENT_SEED_SALT);

    let maze = Arc::new(Maze::build(config).context("Failed to build maze")?);
    let path_len = maze.entrance_to_exit_path().map_or(0, |path| path.len());
    info!("entrance to exit: {} cells", path_len);

    let anchors = (maze.entrance_anchor(), maze.exit_anchor());
    info!(
        "entrance anchor ({:.1}, {:.1}, {:.1}), exit anchor ({:.1}, {:.1}, {:.1})",
        anchors.0.x, anchors.0.y, anchors.0.z, anchors.1.x, anchors.1.y, anchors.1.z
    );

    if args.print_maze {
        println!("{maze}");
    }

    BlockWorld::from_maze(&maze).log_summary();

    let spawn = SpawnConfig {
        num_items: args.items,
        num_npcs: args.npcs,
        exclude_radius: args.exclude_radius,
    };
    let mut app = ServerApp::new(maze, spawn, placement_seed);

    info!("starting ECS server loop...");

    // Run the schedule in a loop manually at SERVER_LOOP_FREQUENCY Hz
    let tick_duration = Duration::from_nanos(1_000_000_000 / SERVER_LOOP_FREQUENCY);
    let mut interval = time::interval(tick_duration);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut frame: u64 = 0;
    while args.ticks == 0 || frame < args.ticks {
        interval.tick().await;

        let update_start = Instant::now();
        app.tick();
        let update_elapsed = update_start.elapsed();

        if update_elapsed > tick_duration {
            warn!(
                "tick {} took {:.2}ms (exceeded {:.2}ms budget)",
                frame,
                update_elapsed.as_secs_f64() * 1000.0,
                tick_duration.as_secs_f64() * 1000.0
            );
        }

        frame += 1;
    }

    info!(
        "stopped after {} ticks: {} items, {} npcs, {} placement failures",
        app.ticks(),
        app.item_count(),
        app.npc_count(),
        app.placement_failures()
    );
    Ok(())
}
