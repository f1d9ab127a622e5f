//! Read-only spatial queries over a built [`Maze`].
//!
//! Nothing here mutates the maze, so any number of readers may share one.
//! Callers probing arbitrary coordinates get safe defaults (not walkable,
//! `None`) rather than errors.

use std::collections::{HashMap, VecDeque};

use crate::{
    components::Position,
    constants::CELL_CENTER_LIFT,
    error::PlacementError,
    grid::{CellPos, Direction},
    maze::Maze,
    rng::MazeRng,
};

impl Maze {
    /// Can an entity stand at this world point?
    ///
    /// Points in front of or behind the grid (the entrance and exit platforms)
    /// are always walkable. Points over the grid are walkable when their cell
    /// was reached by carving. Anything else is not, including non-finite
    /// coordinates such as an infinite z beyond the platforms.
    #[must_use]
    pub fn is_walkable(&self, x: f32, _y: f32, z: f32) -> bool {
        if z.is_finite() && (z < 0.0 || z >= self.grid_extent() as f32) {
            return true;
        }
        self.cell_at(x, z).is_some_and(|pos| self.grid().is_visited(pos))
    }

    #[must_use]
    pub fn is_walkable_at(&self, position: &Position) -> bool {
        self.is_walkable(position.x, position.y, position.z)
    }

    /// Middle of a cell's footprint, lifted above the cached anchor height.
    #[must_use]
    pub fn cell_center(&self, gx: i32, gz: i32) -> Position {
        let width = self.path_width() as f32;
        Position::new(
            (gx as f32 + 0.5) * width,
            self.anchor_height() + CELL_CENTER_LIFT,
            (gz as f32 + 0.5) * width,
        )
    }

    // Every walkable cell in row-major order, recomputed on each call
    #[must_use]
    pub fn all_walkable_cells(&self) -> Vec<CellPos> {
        self.grid()
            .iter()
            .filter(|(_, cell)| cell.visited)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Pick a walkable cell centre away from the entrance and exit.
    ///
    /// Cells whose Manhattan distance to both endpoints exceeds
    /// `exclude_radius` are preferred; if there are none, any walkable cell is
    /// used instead. Returns `None` only when no cell is walkable.
    pub fn random_walkable_position(&self, rng: &mut MazeRng, exclude_radius: u32) -> Option<Position> {
        let walkable = self.all_walkable_cells();
        let (entrance, exit) = (self.entrance(), self.exit());

        let eligible: Vec<CellPos> = walkable
            .iter()
            .copied()
            .filter(|pos| pos.manhattan(entrance) > exclude_radius && pos.manhattan(exit) > exclude_radius)
            .collect();

        let pool = if eligible.is_empty() { &walkable } else { &eligible };
        if pool.is_empty() {
            return None;
        }

        let pos = pool[rng.index(pool.len())];
        Some(self.cell_center(pos.x, pos.y))
    }

    // Placement collaborators must pass every spawn through here before
    // committing it
    pub fn validate_placement(&self, position: &Position) -> Result<(), PlacementError> {
        if self.is_walkable_at(position) {
            Ok(())
        } else {
            Err(PlacementError::NotWalkable { position: *position })
        }
    }

    // ========================================================================
    // Path Validation
    // ========================================================================

    /// Shortest passage route between two cells, both ends included.
    #[must_use]
    pub fn shortest_path(&self, from: CellPos, to: CellPos) -> Option<Vec<CellPos>> {
        let grid = self.grid();
        if !grid.in_bounds(from) || !grid.in_bounds(to) {
            return None;
        }

        let mut parents: HashMap<CellPos, CellPos> = HashMap::new();
        let mut queue = VecDeque::new();
        parents.insert(from, from);
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            if current == to {
                break;
            }
            for direction in Direction::ALL {
                if grid.has_wall(current, direction) {
                    continue;
                }
                if let Some(next) = grid.neighbor(current, direction)
                    && !parents.contains_key(&next)
                {
                    parents.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        if !parents.contains_key(&to) {
            return None;
        }

        let mut path = vec![to];
        let mut current = to;
        while current != from {
            current = parents[&current];
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    #[must_use]
    pub fn path_exists(&self, from: CellPos, to: CellPos) -> bool {
        self.shortest_path(from, to).is_some()
    }

    #[must_use]
    pub fn entrance_to_exit_path(&self) -> Option<Vec<CellPos>> {
        self.shortest_path(self.entrance(), self.exit())
    }
}
