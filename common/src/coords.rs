//! Grid cell ↔ world-space translation.
//!
//! Cell `(gx, gy)` owns a `path_width × path_width` block footprint whose
//! origin is `(gx × path_width, gy × path_width)` on the x/z plane. Grid rows
//! run along world z. The entrance platform sits in front of row 0 (negative
//! z), the exit platform behind the last row.

use bevy_math::IVec3;

use crate::{
    components::Position,
    constants::FLOOR_Y,
    grid::{CellPos, Direction},
    maze::Maze,
};

// Inclusive block-space box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockBox {
    pub min: IVec3,
    pub max: IVec3,
}

impl BlockBox {
    #[must_use]
    pub const fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn volume(&self) -> i64 {
        let dx = (self.max.x - self.min.x + 1) as i64;
        let dy = (self.max.y - self.min.y + 1) as i64;
        let dz = (self.max.z - self.min.z + 1) as i64;
        dx * dy * dz
    }
}

impl Maze {
    // World extent of the grid along x and z, in blocks
    #[must_use]
    pub const fn grid_extent(&self) -> i32 {
        self.config().grid_extent()
    }

    #[must_use]
    pub const fn cell_origin(&self, pos: CellPos) -> IVec3 {
        let width = self.path_width();
        IVec3::new(pos.x * width, FLOOR_Y, pos.y * width)
    }

    // Floor-level footprint of a cell
    #[must_use]
    pub const fn cell_footprint(&self, pos: CellPos) -> BlockBox {
        let origin = self.cell_origin(pos);
        let last = self.path_width() - 1;
        BlockBox::new(origin, IVec3::new(origin.x + last, FLOOR_Y, origin.z + last))
    }

    // Vertical slab along one edge of a cell footprint, y in [1, wall_height]
    #[must_use]
    pub const fn wall_slab(&self, pos: CellPos, direction: Direction) -> BlockBox {
        let footprint = self.cell_footprint(pos);
        let (min, max) = (footprint.min, footprint.max);
        let bottom = FLOOR_Y + 1;
        let top = FLOOR_Y + self.config().wall_height;

        match direction {
            Direction::North => BlockBox::new(IVec3::new(min.x, bottom, min.z), IVec3::new(max.x, top, min.z)),
            Direction::South => BlockBox::new(IVec3::new(min.x, bottom, max.z), IVec3::new(max.x, top, max.z)),
            Direction::West => BlockBox::new(IVec3::new(min.x, bottom, min.z), IVec3::new(min.x, top, max.z)),
            Direction::East => BlockBox::new(IVec3::new(max.x, bottom, min.z), IVec3::new(max.x, top, max.z)),
        }
    }

    // Platform plate in front of the entrance, centred on its footprint
    #[must_use]
    pub const fn entrance_platform(&self) -> BlockBox {
        let depth = self.config().platform_depth;
        let (min_x, max_x) = self.platform_x_span(self.entrance());
        BlockBox::new(IVec3::new(min_x, FLOOR_Y, -depth), IVec3::new(max_x, FLOOR_Y, -1))
    }

    // Platform plate behind the exit
    #[must_use]
    pub const fn exit_platform(&self) -> BlockBox {
        let depth = self.config().platform_depth;
        let start = self.grid_extent();
        let (min_x, max_x) = self.platform_x_span(self.exit());
        BlockBox::new(
            IVec3::new(min_x, FLOOR_Y, start),
            IVec3::new(max_x, FLOOR_Y, start + depth - 1),
        )
    }

    const fn platform_x_span(&self, pos: CellPos) -> (i32, i32) {
        let width = self.config().platform_width;
        let centre = pos.x * self.path_width() + self.path_width() / 2;
        let min_x = centre - width / 2;
        (min_x, min_x + width - 1)
    }

    /// World point at the centre of the entrance platform, at standing height.
    #[must_use]
    pub fn entrance_anchor(&self) -> Position {
        let depth = self.config().platform_depth as f32;
        Position::new(self.cell_center_x(self.entrance()), self.anchor_height(), -depth / 2.0)
    }

    /// World point at the centre of the exit platform, at standing height.
    #[must_use]
    pub fn exit_anchor(&self) -> Position {
        let depth = self.config().platform_depth as f32;
        let z = self.grid_extent() as f32 + depth / 2.0;
        Position::new(self.cell_center_x(self.exit()), self.anchor_height(), z)
    }

    fn cell_center_x(&self, pos: CellPos) -> f32 {
        let width = self.path_width() as f32;
        (pos.x as f32 + 0.5) * width
    }

    /// Grid cell under a world point, if the point lies over the grid.
    #[must_use]
    pub fn cell_at(&self, x: f32, z: f32) -> Option<CellPos> {
        if !x.is_finite() || !z.is_finite() {
            return None;
        }
        let width = self.path_width() as f32;
        let pos = CellPos::new((x / width).floor() as i32, (z / width).floor() as i32);
        self.grid().in_bounds(pos).then_some(pos)
    }
}
