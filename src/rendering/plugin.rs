//! Rendering plugin - 2D camera and sprite presentation.

use bevy::prelude::*;

use super::sprites::*;
use super::visual_config::load_visual_config;
use crate::core::GameState;

/// Rendering plugin - draws the simulation; never changes it.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_visual_config, spawn_camera))
            .add_systems(OnEnter(GameState::InGame), spawn_ground)
            .add_systems(
                PostUpdate,
                (attach_sprites, sync_sprites, follow_player)
                    .chain()
                    .before(TransformSystem::TransformPropagate)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
