use maze_common::{CellPos, Direction, Maze, MazeConfig, MazeRng};
use proptest::prelude::*;

fn build(size: i32, seed: u64) -> Maze {
    Maze::build(MazeConfig {
        grid_size: size,
        seed,
        ..MazeConfig::default()
    })
    .expect("valid config")
}

fn visited_set(maze: &Maze) -> Vec<bool> {
    maze.grid().iter().map(|(_, cell)| cell.visited).collect()
}

#[test]
fn reference_maze_is_reproducible() {
    let config = MazeConfig {
        grid_size: 50,
        path_width: 4,
        seed: 12345,
        ..MazeConfig::default()
    };
    let a = Maze::build(config.clone()).expect("valid config");
    let b = Maze::build(config).expect("valid config");

    assert_eq!(a.entrance(), CellPos::new(25, 0));
    assert_eq!(a.exit(), CellPos::new(25, 49));

    let bits = |m: &Maze, pos| m.grid().cell(pos).map(|c| c.wall_bits());
    assert_eq!(bits(&a, a.entrance()), bits(&b, b.entrance()));
    assert_eq!(bits(&a, a.exit()), bits(&b, b.exit()));
    assert_eq!(a.grid().wall_layout(), b.grid().wall_layout());
}

#[test]
fn small_maze_performs_two_loop_attempts() {
    let maze = Maze::build(MazeConfig {
        grid_size: 5,
        loop_density: 0.1,
        ..MazeConfig::default()
    })
    .expect("valid config");
    assert_eq!(maze.stats().loops.attempts, 2);
    assert!(maze.stats().loops.opened <= 2);
}

#[test]
fn reference_scale_builds_fully_connected() {
    let maze = build(50, 12345);
    assert_eq!(maze.grid().visited_count(), 2500);
    assert_eq!(maze.stats().loops.attempts, 250);
    assert!(maze.entrance_to_exit_path().is_some());
}

proptest! {
    #[test]
    fn same_seed_same_maze(size in 1i32..24, seed in any::<u64>()) {
        let a = build(size, seed);
        let b = build(size, seed);
        prop_assert_eq!(a.grid().wall_layout(), b.grid().wall_layout());
        prop_assert_eq!(visited_set(&a), visited_set(&b));
    }

    #[test]
    fn every_cell_is_visited(size in 1i32..24, seed in any::<u64>()) {
        let maze = build(size, seed);
        prop_assert_eq!(maze.grid().visited_count(), (size * size) as usize);
    }

    #[test]
    fn entrance_and_exit_stay_open(size in 1i32..24, seed in any::<u64>()) {
        let maze = build(size, seed);
        prop_assert!(!maze.grid().has_wall(maze.entrance(), Direction::North));
        prop_assert!(!maze.grid().has_wall(maze.exit(), Direction::South));
        prop_assert!(maze.path_exists(maze.entrance(), maze.exit()));
    }

    #[test]
    fn walls_are_mutually_consistent(size in 1i32..24, seed in any::<u64>()) {
        let maze = build(size, seed);
        let grid = maze.grid();
        for pos in grid.positions() {
            for direction in Direction::ALL {
                if let Some(next) = grid.neighbor(pos, direction) {
                    prop_assert_eq!(
                        grid.has_wall(pos, direction),
                        grid.has_wall(next, direction.opposite())
                    );
                }
            }
        }
    }

    #[test]
    fn walkability_agrees_with_visited(size in 1i32..16, seed in any::<u64>(), x in -50.0f32..150.0) {
        let maze = build(size, seed);
        for pos in maze.grid().positions() {
            let center = maze.cell_center(pos.x, pos.y);
            prop_assert_eq!(maze.is_walkable_at(&center), maze.grid().is_visited(pos));
        }

        let extent = maze.grid_extent() as f32;
        prop_assert!(maze.is_walkable(x, 1.0, -0.01));
        prop_assert!(maze.is_walkable(x, 1.0, extent + 0.01));
    }

    #[test]
    fn exclusion_radius_is_honoured(size in 3i32..20, seed in any::<u64>(), radius in 0u32..12, draw in any::<u64>()) {
        let maze = build(size, seed);
        let mut rng = MazeRng::new(draw);
        let position = maze.random_walkable_position(&mut rng, radius);
        prop_assert!(position.is_some());

        let position = position.unwrap_or_default();
        let cell = maze.cell_at(position.x, position.z);
        prop_assert!(cell.is_some());
        let cell = cell.unwrap_or(CellPos::new(0, 0));

        let eligible_exists = maze.all_walkable_cells().iter().any(|c| {
            c.manhattan(maze.entrance()) > radius && c.manhattan(maze.exit()) > radius
        });
        if eligible_exists {
            prop_assert!(cell.manhattan(maze.entrance()) > radius);
            prop_assert!(cell.manhattan(maze.exit()) > radius);
        }
        prop_assert!(maze.is_walkable_at(&position));
    }
}
