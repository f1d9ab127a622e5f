//! Host-side collaborator for the maze core: loads config, builds the maze,
//! feeds its block fills into a [`world::BlockWorld`] and runs the ECS tick
//! loop that places items and NPCs.

pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod resources;
pub mod systems;
pub mod world;

pub use app::ServerApp;
pub use config::{ConfigOverrides, init_tracing, load_maze_config};
pub use world::BlockWorld;
