use bevy_math::IVec3;
use std::collections::BTreeMap;
use tracing::info;

use maze_common::{BlockFill, BlockTypeId, FillKind, Maze};

// ============================================================================
// Block World
// ============================================================================

// Host-side sink for the maze's block fills. Keeps per-type tallies and the
// overall bounds rather than a voxel store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockWorld {
    fills: usize,
    blocks: BTreeMap<BlockTypeId, i64>,
    kinds: BTreeMap<FillKind, usize>,
    bounds: Option<(IVec3, IVec3)>,
}

impl BlockWorld {
    #[must_use]
    pub fn from_maze(maze: &Maze) -> Self {
        let mut world = Self::default();
        maze.for_each_block_fill(|fill| world.apply(&fill));
        world
    }

    pub fn apply(&mut self, fill: &BlockFill) {
        self.fills += 1;
        *self.blocks.entry(fill.block).or_default() += fill.volume();
        *self.kinds.entry(fill.kind).or_default() += 1;
        self.bounds = Some(match self.bounds {
            Some((min, max)) => (min.min(fill.min), max.max(fill.max)),
            None => (fill.min, fill.max),
        });
    }

    #[must_use]
    pub const fn fill_count(&self) -> usize {
        self.fills
    }

    #[must_use]
    pub fn blocks_of(&self, block: BlockTypeId) -> i64 {
        self.blocks.get(&block).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn fills_of(&self, kind: FillKind) -> usize {
        self.kinds.get(&kind).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_blocks(&self) -> i64 {
        self.blocks.values().sum()
    }

    #[must_use]
    pub const fn bounds(&self) -> Option<(IVec3, IVec3)> {
        self.bounds
    }

    pub fn log_summary(&self) {
        info!(
            "placed {} blocks in {} fills ({} floor, {} wall, {} platform)",
            self.total_blocks(),
            self.fills,
            self.fills_of(FillKind::Floor),
            self.fills_of(FillKind::Wall),
            self.fills_of(FillKind::Platform)
        );
        if let Some((min, max)) = self.bounds {
            info!("world bounds {} .. {}", min, max);
        }
        for (block, count) in &self.blocks {
            info!("  block {:>3}: {}", block.0, count);
        }
    }
}
