//! World module - levels, their placements, and level lifetime.

mod data;
mod error;
mod plugin;
mod spawning;

pub use data::{
    load_levels_dir, CurrentLevel, LevelDefinition, LevelRegistry, Placement, TileKind, LEVELS_DIR,
};
pub use error::LevelError;
pub use plugin::{setup_level, WorldPlugin};
pub use spawning::{spawn_placements, LevelEntity};
