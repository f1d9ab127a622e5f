use bevy_ecs::component::Component;
use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared Components
// ============================================================================

// World-space point in block units. y is up, the grid spans x and z.
#[derive(Debug, Clone, Copy, Component, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    // Horizontal distance, ignoring height
    #[must_use]
    pub fn distance_xz(&self, other: &Self) -> f32 {
        (self.x - other.x).hypot(self.z - other.z)
    }
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<Position> for Vec3 {
    fn from(p: Position) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}
