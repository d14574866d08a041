//! Visual configuration loaded from external RON file.
//!
//! Allows tweaking presentation without recompilation.

use bevy::prelude::*;
use serde::Deserialize;

use crate::data::load_or_default;

const VISUAL_CONFIG_PATH: &str = "assets/data/rendering/visual_config.ron";

/// Visual configuration loaded from assets/data/rendering/visual_config.ron.
#[derive(Resource, Clone, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    pub clear_color: (f32, f32, f32),
    /// Ground image drawn under the level, top-left at the origin
    pub ground_graphic: String,
    /// Depth added per pixel of screen y, so lower sprites draw on top
    pub y_sort_scale: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            clear_color: (0.44, 0.78, 0.87),
            ground_graphic: "graphics/tilemap/ground.png".to_string(),
            y_sort_scale: 0.001,
        }
    }
}

impl VisualConfig {
    pub fn load() -> Self {
        load_or_default(VISUAL_CONFIG_PATH)
    }
}

/// System to load visual config at startup.
pub fn load_visual_config(mut commands: Commands) {
    let config = VisualConfig::load();
    commands.insert_resource(ClearColor(Color::srgb(
        config.clear_color.0,
        config.clear_color.1,
        config.clear_color.2,
    )));
    commands.insert_resource(config);
}
