//! FlowerPower - a 2D top-down action RPG in Bevy.
//!
//! Walk a tile map, cut grass, fight monsters with weapons and spells, and
//! spend the experience on stats.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, the tick clock, global events, tick ordering
//! - **Data**: Weapon, spell, and monster catalogs, tuning, animation library
//! - **Actor**: Hitboxes, movement with collision, frame animation
//! - **Player**: Input, attacks, stats, energy
//! - **Enemies**: Perception, the idle/move/attack machine, knockback, death
//! - **Combat**: Attack hitboxes, spells, the hit sweep, damage intake
//! - **Progression**: Kill rewards, stat upgrades
//! - **World**: RON levels and their placements
//! - **Effects**: Particles and sound
//! - **Persistence**: Player save file
//! - **Rendering**: 2D camera and sprites
//! - **UI**: HUD, upgrade menu, game over
//!
//! [`SimulationPlugin`] holds everything that runs headless; [`FlowerPowerPlugin`]
//! adds loading, presentation, and I/O on top.

pub mod actor;
pub mod combat;
pub mod core;
pub mod data;
pub mod effects;
pub mod enemies;
pub mod persistence;
pub mod player;
pub mod progression;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// The per-tick game logic. Needs `GameConfig`, `GameCatalog`, and
/// `AnimationLibrary` resources and keyboard input to be present.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(combat::CombatPlugin)
            .add_plugins(progression::ProgressionPlugin)
            .add_plugins(effects::ParticlePlugin);
    }
}

/// Main game plugin that adds all sub-plugins.
pub struct FlowerPowerPlugin;

impl Plugin for FlowerPowerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SimulationPlugin)
            // Data and levels
            .add_plugins(data::DataPlugin)
            .add_plugins(world::WorldPlugin)
            .add_plugins(persistence::PersistencePlugin)
            // Presentation
            .add_plugins(effects::SoundPlugin)
            .add_plugins(rendering::RenderingPlugin)
            .add_plugins(ui::UiPlugin);
    }
}
