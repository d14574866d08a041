//! Gameplay tuning loaded from `assets/data/config.ron`.
//!
//! Allows tweaking timings and multipliers without recompilation.

use bevy::prelude::*;
use serde::Deserialize;

/// How often an enemy in its attack state may hurt the player during one
/// attack animation.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EnemyHitPolicy {
    /// One damage event per attack animation.
    #[default]
    OncePerSwing,
    /// A damage event every tick the enemy stays in its attack state. The
    /// player's invulnerability window still filters repeats.
    EveryTick,
}

/// Player timings.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PlayerTuning {
    /// Base attack window; the weapon's own cooldown is added on top
    pub attack_cooldown_ms: u64,
    /// Debounce for weapon and spell switching
    pub switch_duration_ms: u64,
    /// Post-hit invulnerability window
    pub invulnerability_ms: u64,
    /// Energy regained per tick per point of magic
    pub energy_regen_factor: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            attack_cooldown_ms: 400,
            switch_duration_ms: 200,
            invulnerability_ms: 500,
            energy_regen_factor: 0.01,
        }
    }
}

/// Enemy timings.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct EnemyTuning {
    pub attack_cooldown_ms: u64,
    /// Post-hit invulnerability window
    pub invincibility_ms: u64,
    pub hit_policy: EnemyHitPolicy,
    /// Vertical shrink from sprite to hitbox
    pub hitbox_inset: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            attack_cooldown_ms: 400,
            invincibility_ms: 300,
            hit_policy: EnemyHitPolicy::default(),
            hitbox_inset: 10.0,
        }
    }
}

/// Upgrade menu economics.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UpgradeTuning {
    /// Applied to the stat on purchase
    pub stat_multiplier: f32,
    /// Applied to the stat's cost on purchase
    pub cost_multiplier: f32,
    /// Debounce for cursor movement and purchases
    pub selection_cooldown_ms: u64,
}

impl Default for UpgradeTuning {
    fn default() -> Self {
        Self {
            stat_multiplier: 1.2,
            cost_multiplier: 1.4,
            selection_cooldown_ms: 300,
        }
    }
}

/// All gameplay tuning.
#[derive(Resource, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GameConfig {
    /// Tile edge in pixels
    pub tile_size: f32,
    /// Animation frames advanced per tick
    pub animation_speed: f32,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub upgrade: UpgradeTuning,
    /// Level loaded on entering the game
    pub start_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: 64.0,
            animation_speed: 0.15,
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            upgrade: UpgradeTuning::default(),
            start_level: "level1".to_string(),
        }
    }
}
