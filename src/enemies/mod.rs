//! Enemies module - enemy entities, their AI, and their per-tick update.

mod ai;
mod components;
mod plugin;
mod spawning;
mod systems;

pub use ai::distance_and_direction;
pub use components::*;
pub use plugin::EnemyPlugin;
pub use spawning::spawn_enemy;
