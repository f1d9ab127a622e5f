use crate::grid::{CellPos, Direction, Grid};

// ============================================================================
// Exit Connectivity Repair
// ============================================================================

// Make sure the exit is reachable after carving.
//
// A no-op when the exit is already visited. Otherwise the visited cell closest
// to the exit (Manhattan, first found in row-major order) is joined to it by a
// corridor that closes the row offset first, then the column offset.
// Returns the number of cells the corridor stepped into.
pub fn connect_exit(grid: &mut Grid, exit: CellPos) -> usize {
    if !grid.in_bounds(exit) || grid.is_visited(exit) {
        return 0;
    }

    let Some(start) = nearest_visited(grid, exit) else {
        // Nothing to connect from
        grid.mark_visited(exit);
        return 0;
    };

    let mut current = start;
    let mut steps = 0;

    while current != exit {
        let direction = if current.y != exit.y {
            if current.y < exit.y { Direction::South } else { Direction::North }
        } else if current.x < exit.x {
            Direction::East
        } else {
            Direction::West
        };

        grid.remove_wall(current, direction);
        current = current.step(direction);
        grid.mark_visited(current);
        steps += 1;
    }

    steps
}

fn nearest_visited(grid: &Grid, target: CellPos) -> Option<CellPos> {
    let mut best: Option<(u32, CellPos)> = None;

    for (pos, cell) in grid.iter() {
        if !cell.visited {
            continue;
        }
        let distance = pos.manhattan(target);
        if best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((distance, pos));
        }
    }

    best.map(|(_, pos)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_exit_is_left_alone() {
        let mut grid = Grid::initialize(4);
        let exit = CellPos::new(2, 3);
        grid.mark_visited(exit);
        let before = grid.clone();
        assert_eq!(connect_exit(&mut grid, exit), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn straight_vertical_corridor() {
        let mut grid = Grid::initialize(5);
        let entrance = CellPos::new(2, 0);
        let exit = CellPos::new(2, 4);
        grid.mark_visited(entrance);

        assert_eq!(connect_exit(&mut grid, exit), 4);
        for y in 0..4 {
            let pos = CellPos::new(2, y);
            assert!(grid.is_visited(pos));
            assert!(!grid.has_wall(pos, Direction::South));
        }
        assert!(grid.is_visited(exit));
        assert!(grid.walls_consistent());
    }

    #[test]
    fn closes_rows_before_columns() {
        let mut grid = Grid::initialize(5);
        let start = CellPos::new(0, 1);
        let exit = CellPos::new(2, 4);
        grid.mark_visited(start);

        assert_eq!(connect_exit(&mut grid, exit), 5);
        // Down column 0 to row 4, then east along row 4
        for y in 1..4 {
            assert!(!grid.has_wall(CellPos::new(0, y), Direction::South));
        }
        assert!(!grid.has_wall(CellPos::new(0, 4), Direction::East));
        assert!(!grid.has_wall(CellPos::new(1, 4), Direction::East));
        assert!(grid.is_visited(CellPos::new(1, 4)));
        assert!(!grid.is_visited(CellPos::new(1, 1)));
    }

    #[test]
    fn nearest_ties_resolve_in_row_major_order() {
        let mut grid = Grid::initialize(5);
        let exit = CellPos::new(2, 2);
        // Both at distance 2; (2, 0) comes first in row-major order
        grid.mark_visited(CellPos::new(0, 2));
        grid.mark_visited(CellPos::new(2, 0));

        connect_exit(&mut grid, exit);
        assert!(!grid.has_wall(CellPos::new(2, 0), Direction::South));
        assert!(grid.has_wall(CellPos::new(0, 2), Direction::East));
    }

    #[test]
    fn empty_grid_marks_exit_only() {
        let mut grid = Grid::initialize(3);
        let exit = CellPos::new(1, 2);
        assert_eq!(connect_exit(&mut grid, exit), 0);
        assert!(grid.is_visited(exit));
        assert_eq!(grid.visited_count(), 1);
    }

    #[test]
    fn repeated_repair_is_idempotent() {
        let mut grid = Grid::initialize(5);
        grid.mark_visited(CellPos::new(4, 0));
        let exit = CellPos::new(2, 4);
        connect_exit(&mut grid, exit);
        let once = grid.clone();
        assert_eq!(connect_exit(&mut grid, exit), 0);
        assert_eq!(grid, once);
    }
}
