use crate::{
    grid::{CellPos, Direction, Grid},
    rng::MazeRng,
};

// ============================================================================
// Depth-First Carving
// ============================================================================

// Randomized depth-first search from `start`, using an explicit stack so the
// depth is bounded by the cell count rather than the call stack.
// Returns the number of cells marked visited, including `start`.
pub fn carve_passages(grid: &mut Grid, start: CellPos, rng: &mut MazeRng) -> usize {
    if !grid.in_bounds(start) {
        return 0;
    }

    let mut stack = Vec::with_capacity(grid.cell_count());
    grid.mark_visited(start);
    stack.push(start);
    let mut carved = 1;

    while let Some(&current) = stack.last() {
        let candidates = unvisited_neighbors(grid, current);

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let (direction, next) = candidates[rng.index(candidates.len())];
        grid.remove_wall(current, direction);
        grid.mark_visited(next);
        stack.push(next);
        carved += 1;
    }

    carved
}

// Candidates in the fixed N, E, S, W order; selection among them is uniform
fn unvisited_neighbors(grid: &Grid, pos: CellPos) -> Vec<(Direction, CellPos)> {
    Direction::ALL
        .iter()
        .filter_map(|&direction| {
            grid.neighbor(pos, direction)
                .filter(|next| !grid.is_visited(*next))
                .map(|next| (direction, next))
        })
        .collect()
}
