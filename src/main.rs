//! FlowerPower - Entry Point
//!
//! Controls:
//! - Arrows / WASD: Move
//! - Space: Attack
//! - Left Ctrl: Cast spell
//! - Q / E: Switch weapon / spell
//! - Escape: Upgrade menu
//! - Enter: Restart after dying

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;

fn main() {
    App::new()
        // Bevy default plugins; kira replaces bevy's own audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "FlowerPower".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest())
                .disable::<bevy::audio::AudioPlugin>(),
        )
        .add_plugins(AudioPlugin)
        // Our game plugin
        .add_plugins(flowerpower::FlowerPowerPlugin)
        .run();
}
