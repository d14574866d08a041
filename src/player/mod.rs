//! Player module - the player entity, its input, and its per-tick update.

mod components;
mod input;
mod plugin;
mod spawning;
mod systems;

pub use components::*;
pub use plugin::PlayerPlugin;
pub use spawning::spawn_player;
