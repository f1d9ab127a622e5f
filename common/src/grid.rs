//! Square cell grid with per-edge wall flags.
//!
//! Cells live in a flat row-major arena. Every public accessor validates the
//! position with [`Grid::in_bounds`] once; the private index helper assumes a
//! validated position.

use serde::{Deserialize, Serialize};

// ============================================================================
// Positions & Directions
// ============================================================================

// Grid-space cell position. x is the column, y is the row (world z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn manhattan(&self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    #[must_use]
    pub const fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for CellPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    // Fixed enumeration order used when building candidate lists
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    // North is towards row 0
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::North => 0b0001,
            Self::East => 0b0010,
            Self::South => 0b0100,
            Self::West => 0b1000,
        }
    }
}

// ============================================================================
// Cells
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub has_north_wall: bool,
    pub has_east_wall: bool,
    pub has_south_wall: bool,
    pub has_west_wall: bool,
    // Reached by the carving traversal; doubles as the walkability predicate
    pub visited: bool,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            has_north_wall: true,
            has_east_wall: true,
            has_south_wall: true,
            has_west_wall: true,
            visited: false,
        }
    }
}

impl GridCell {
    #[must_use]
    pub const fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.has_north_wall,
            Direction::East => self.has_east_wall,
            Direction::South => self.has_south_wall,
            Direction::West => self.has_west_wall,
        }
    }

    const fn set_wall(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::North => self.has_north_wall = present,
            Direction::East => self.has_east_wall = present,
            Direction::South => self.has_south_wall = present,
            Direction::West => self.has_west_wall = present,
        }
    }

    // Count how many walls a cell has (0-4)
    #[must_use]
    pub fn wall_count(&self) -> u8 {
        Direction::ALL.iter().filter(|d| self.has_wall(**d)).count() as u8
    }

    // N=1, E=2, S=4, W=8
    #[must_use]
    pub fn wall_bits(&self) -> u8 {
        Direction::ALL
            .iter()
            .filter(|d| self.has_wall(**d))
            .fold(0, |bits, d| bits | d.bit())
    }
}

// ============================================================================
// Grid
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    cells: Vec<GridCell>,
}

impl Grid {
    /// Allocate `size * size` fully walled, unvisited cells.
    ///
    /// Non-positive sizes produce an empty grid; configuration validation
    /// rejects them before a build ever gets here.
    #[must_use]
    pub fn initialize(size: i32) -> Self {
        let side = size.max(0);
        Self {
            size: side,
            cells: vec![GridCell::default(); (side as usize) * (side as usize)],
        }
    }

    /// Restore every cell to its freshly initialized state.
    pub fn reset(&mut self) {
        self.cells.fill(GridCell::default());
    }

    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }

    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub const fn in_bounds(&self, pos: CellPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.size && pos.y < self.size
    }

    const fn index(&self, pos: CellPos) -> usize {
        (pos.y as usize) * (self.size as usize) + pos.x as usize
    }

    #[must_use]
    pub fn cell(&self, pos: CellPos) -> Option<&GridCell> {
        self.in_bounds(pos).then(|| &self.cells[self.index(pos)])
    }

    // In-bounds neighbour in the given direction
    #[must_use]
    pub fn neighbor(&self, pos: CellPos, direction: Direction) -> Option<CellPos> {
        if !self.in_bounds(pos) {
            return None;
        }
        let next = pos.step(direction);
        self.in_bounds(next).then_some(next)
    }

    // Out-of-bounds positions report every wall as present
    #[must_use]
    pub fn has_wall(&self, pos: CellPos, direction: Direction) -> bool {
        self.cell(pos).is_none_or(|cell| cell.has_wall(direction))
    }

    #[must_use]
    pub fn is_visited(&self, pos: CellPos) -> bool {
        self.cell(pos).is_some_and(|cell| cell.visited)
    }

    pub fn mark_visited(&mut self, pos: CellPos) {
        if self.in_bounds(pos) {
            let index = self.index(pos);
            self.cells[index].visited = true;
        }
    }

    /// Remove the wall pair between `pos` and its neighbour in `direction`.
    ///
    /// Returns true if a wall was actually removed. Edges leading off the grid
    /// are left alone; use [`Grid::open_boundary`] for those.
    pub fn remove_wall(&mut self, pos: CellPos, direction: Direction) -> bool {
        let Some(next) = self.neighbor(pos, direction) else {
            return false;
        };

        let here = self.index(pos);
        let there = self.index(next);
        let was_present = self.cells[here].has_wall(direction);
        self.cells[here].set_wall(direction, false);
        self.cells[there].set_wall(direction.opposite(), false);
        was_present
    }

    /// Remove the outward wall of a boundary cell.
    ///
    /// Only edges that face off the grid can be opened this way, so interior
    /// walls are never removed unpaired.
    pub fn open_boundary(&mut self, pos: CellPos, direction: Direction) -> bool {
        // In-bounds positions step at most one past the edge, so no overflow
        if !self.in_bounds(pos) || self.in_bounds(pos.step(direction)) {
            return false;
        }
        let index = self.index(pos);
        self.cells[index].set_wall(direction, false);
        true
    }

    // Row-major cell positions
    pub fn positions(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| CellPos::new(x, y)))
    }

    // Row-major cells paired with their positions
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, &GridCell)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    // Row-major wall bitmaps, one byte per cell
    #[must_use]
    pub fn wall_layout(&self) -> Vec<u8> {
        self.cells.iter().map(GridCell::wall_bits).collect()
    }

    /// Check that every interior edge agrees on both sides.
    #[must_use]
    pub fn walls_consistent(&self) -> bool {
        self.positions().all(|pos| {
            [Direction::East, Direction::South].into_iter().all(|direction| {
                self.neighbor(pos, direction)
                    .is_none_or(|next| self.has_wall(pos, direction) == self.has_wall(next, direction.opposite()))
            })
        })
    }
}
