use bevy_ecs::prelude::*;

// Marker components to disambiguate entity archetypes placed on the maze.
#[derive(Component, Debug, Default)]
pub struct ItemMarker;

#[derive(Component, Debug, Default)]
pub struct NpcMarker;
