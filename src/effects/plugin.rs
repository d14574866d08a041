//! Effects plugins - particles for the simulation, audio for the game.

use bevy::prelude::*;

use super::audio::*;
use super::particles::{animate_particles, spawn_particles};
use crate::core::{GameState, PlayState, TickSet};

/// Particle effects. Headless-safe.
pub struct ParticlePlugin;

impl Plugin for ParticlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_particles, animate_particles)
                .chain()
                .after(TickSet::Progression)
                .run_if(in_state(PlayState::Exploring)),
        );
    }
}

/// Sound playback. Needs `bevy_kira_audio::AudioPlugin` and an asset server.
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundLibrary>()
            .add_systems(OnExit(GameState::Loading), load_sounds)
            .add_systems(OnEnter(GameState::InGame), start_music)
            .add_systems(OnExit(GameState::InGame), stop_music)
            .add_systems(
                Update,
                play_sound_requests.run_if(in_state(GameState::InGame)),
            );
    }
}
