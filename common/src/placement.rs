use bevy_math::IVec3;
use serde::{Deserialize, Serialize};

use crate::{
    coords::BlockBox,
    grid::Direction,
    maze::Maze,
    rng::MazeRng,
};

// ============================================================================
// Block Placement Plan
// ============================================================================

// Opaque block-type identifier; registration of what each id means belongs to
// the host world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockTypeId(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FillKind {
    Platform,
    Floor,
    Wall,
}

// Fill every block in the inclusive box with one block type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFill {
    pub min: IVec3,
    pub max: IVec3,
    pub block: BlockTypeId,
    pub kind: FillKind,
}

impl BlockFill {
    const fn new(area: BlockBox, block: BlockTypeId, kind: FillKind) -> Self {
        Self {
            min: area.min,
            max: area.max,
            block,
            kind,
        }
    }

    #[must_use]
    pub const fn area(&self) -> BlockBox {
        BlockBox::new(self.min, self.max)
    }

    #[must_use]
    pub const fn volume(&self) -> i64 {
        self.area().volume()
    }
}

impl Maze {
    /// Emit the world-building sequence for this maze.
    ///
    /// Order: entrance platform, then per cell in row-major order its floor
    /// plate followed by one column per block along each walled edge (N, E, S,
    /// W), then the exit platform. Wall block types come from a palette stream
    /// seeded separately from the carving stream, so they never affect the
    /// layout.
    pub fn for_each_block_fill(&self, mut emit: impl FnMut(BlockFill)) {
        let config = self.config();
        let mut palette_rng = MazeRng::new(config.effective_palette_seed());

        emit(BlockFill::new(self.entrance_platform(), config.platform_block, FillKind::Platform));

        for (pos, cell) in self.grid().iter() {
            emit(BlockFill::new(self.cell_footprint(pos), config.floor_block, FillKind::Floor));

            for direction in Direction::ALL {
                if !cell.has_wall(direction) {
                    continue;
                }
                let slab = self.wall_slab(pos, direction);
                for x in slab.min.x..=slab.max.x {
                    for z in slab.min.z..=slab.max.z {
                        let block = config.wall_palette[palette_rng.index(config.wall_palette.len())];
                        let column = BlockBox::new(IVec3::new(x, slab.min.y, z), IVec3::new(x, slab.max.y, z));
                        emit(BlockFill::new(column, block, FillKind::Wall));
                    }
                }
            }
        }

        emit(BlockFill::new(self.exit_platform(), config.platform_block, FillKind::Platform));
    }

    #[must_use]
    pub fn block_fills(&self) -> Vec<BlockFill> {
        let mut fills = Vec::new();
        self.for_each_block_fill(|fill| fills.push(fill));
        fills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MazeConfig;

    fn maze(config: MazeConfig) -> Maze {
        Maze::build(config).expect("valid config")
    }

    fn small() -> MazeConfig {
        MazeConfig {
            grid_size: 6,
            path_width: 3,
            wall_height: 2,
            ..MazeConfig::default()
        }
    }

    #[test]
    fn sequence_starts_and_ends_with_platforms() {
        let maze = maze(small());
        let fills = maze.block_fills();
        assert_eq!(fills.first().map(|f| f.kind), Some(FillKind::Platform));
        assert_eq!(fills.last().map(|f| f.kind), Some(FillKind::Platform));
        assert_eq!(fills.first().map(BlockFill::area), Some(maze.entrance_platform()));
        assert_eq!(fills.last().map(BlockFill::area), Some(maze.exit_platform()));
    }

    #[test]
    fn one_floor_plate_per_cell() {
        let maze = maze(small());
        let floors: Vec<BlockFill> = maze.block_fills().into_iter().filter(|f| f.kind == FillKind::Floor).collect();
        assert_eq!(floors.len(), 36);
        assert!(floors.iter().all(|f| f.min.y == 0 && f.max.y == 0 && f.volume() == 9));
        assert_eq!(floors[0].min, IVec3::new(0, 0, 0));
        assert_eq!(floors[1].min, IVec3::new(3, 0, 0));
    }

    #[test]
    fn one_column_per_wall_block() {
        let maze = maze(small());
        let total_walls: usize = maze.grid().iter().map(|(_, c)| usize::from(c.wall_count())).sum();
        let columns: Vec<BlockFill> = maze.block_fills().into_iter().filter(|f| f.kind == FillKind::Wall).collect();

        assert_eq!(columns.len(), total_walls * 3);
        for column in &columns {
            assert_eq!(column.min.x, column.max.x);
            assert_eq!(column.min.z, column.max.z);
            assert_eq!((column.min.y, column.max.y), (1, 2));
            assert!(maze.config().wall_palette.contains(&column.block));
        }
    }

    #[test]
    fn palette_stream_does_not_touch_layout() {
        let a = maze(MazeConfig { palette_seed: Some(1), ..small() });
        let b = maze(MazeConfig { palette_seed: Some(2), ..small() });
        assert_eq!(a.grid().wall_layout(), b.grid().wall_layout());

        let blocks = |m: &Maze| -> Vec<BlockTypeId> {
            m.block_fills().iter().filter(|f| f.kind == FillKind::Wall).map(|f| f.block).collect()
        };
        assert_ne!(blocks(&a), blocks(&b));
    }

    #[test]
    fn fills_are_deterministic() {
        assert_eq!(maze(small()).block_fills(), maze(small()).block_fills());
    }

    #[test]
    fn open_entrance_edge_has_no_wall_columns() {
        let maze = maze(small());
        let edge = maze.wall_slab(maze.entrance(), Direction::North);
        // Middle block of the north edge; corner blocks may belong to east/west walls
        let middle = (edge.min.x + 1, edge.min.z);
        let blocked = maze
            .block_fills()
            .iter()
            .any(|f| f.kind == FillKind::Wall && (f.min.x, f.min.z) == middle);
        assert!(!blocked);
    }
}
