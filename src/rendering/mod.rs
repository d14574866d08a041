//! Rendering module - camera, sprites, and visual settings.

mod plugin;
mod sprites;
mod visual_config;

pub use plugin::RenderingPlugin;
pub use sprites::{screen_to_world, GameCamera};
pub use visual_config::VisualConfig;
