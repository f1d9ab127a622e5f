use crate::{
    grid::{CellPos, Direction, Grid},
    rng::MazeRng,
};

// ============================================================================
// Loop Injection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopStats {
    pub attempts: usize,
    pub opened: usize, // Attempts that removed a wall that was still standing
}

// floor(size² × density)
#[must_use]
pub fn loop_attempts(size: i32, density: f64) -> usize {
    let cells = f64::from(size.max(0)) * f64::from(size.max(0));
    (cells * density).floor().max(0.0) as usize
}

// Remove random extra walls to turn the spanning tree into a braided maze.
// Each attempt draws a cell and a direction; the wall pair is removed when the
// neighbour is in bounds, regardless of visited state. Removing walls only
// adds edges, so connectivity is preserved.
pub fn inject_loops(grid: &mut Grid, density: f64, rng: &mut MazeRng) -> LoopStats {
    let size = grid.size();
    let attempts = loop_attempts(size, density);
    let mut opened = 0;

    for _ in 0..attempts {
        let x = rng.index(size as usize) as i32;
        let y = rng.index(size as usize) as i32;
        let direction = Direction::ALL[rng.index(Direction::ALL.len())];

        if grid.remove_wall(CellPos::new(x, y), direction) {
            opened += 1;
        }
    }

    LoopStats { attempts, opened }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carve::carve_passages;

    #[test]
    fn attempt_count_follows_density() {
        assert_eq!(loop_attempts(5, 0.1), 2);
        assert_eq!(loop_attempts(50, 0.1), 250);
        assert_eq!(loop_attempts(3, 0.1), 0);
        assert_eq!(loop_attempts(10, 0.0), 0);
        assert_eq!(loop_attempts(10, 1.0), 100);
    }

    #[test]
    fn performs_exact_number_of_attempts() {
        let mut grid = Grid::initialize(5);
        let mut rng = MazeRng::new(12345);
        let stats = inject_loops(&mut grid, 0.1, &mut rng);
        assert_eq!(stats.attempts, 2);
        assert!(stats.opened <= 2);
    }

    #[test]
    fn consumes_three_draws_per_attempt() {
        let mut grid = Grid::initialize(5);
        let mut rng = MazeRng::new(8);
        inject_loops(&mut grid, 0.1, &mut rng);

        let mut expected = MazeRng::new(8);
        for _ in 0..6 {
            expected.next_f64();
        }
        assert_eq!(rng.next_f64().to_bits(), expected.next_f64().to_bits());
    }

    #[test]
    fn keeps_walls_paired_and_boundary_closed() {
        let mut grid = Grid::initialize(8);
        let mut rng = MazeRng::new(3);
        carve_passages(&mut grid, CellPos::new(4, 0), &mut rng);
        inject_loops(&mut grid, 0.5, &mut rng);

        assert!(grid.walls_consistent());
        for i in 0..8 {
            assert!(grid.has_wall(CellPos::new(i, 0), Direction::North));
            assert!(grid.has_wall(CellPos::new(i, 7), Direction::South));
            assert!(grid.has_wall(CellPos::new(0, i), Direction::West));
            assert!(grid.has_wall(CellPos::new(7, i), Direction::East));
        }
    }

    #[test]
    fn adds_cycles_to_a_spanning_tree() {
        let mut grid = Grid::initialize(10);
        let mut rng = MazeRng::new(21);
        carve_passages(&mut grid, CellPos::new(5, 0), &mut rng);
        let tree_walls: usize = grid.iter().map(|(_, c)| usize::from(c.wall_count())).sum();
        let stats = inject_loops(&mut grid, 0.1, &mut rng);
        let braided_walls: usize = grid.iter().map(|(_, c)| usize::from(c.wall_count())).sum();

        assert_eq!(tree_walls - braided_walls, stats.opened * 2);
    }
}
