//! Combat plugin - attack resolution and damage dispatch.

use bevy::prelude::*;

use super::attacks::{clear_finished_attacks, resolve_attack_requests};
use super::systems::*;
use crate::core::TickSet;

/// Combat plugin - runs after the player and enemies have updated.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                resolve_attack_requests,
                clear_finished_attacks,
                sweep_attacks,
                apply_enemy_damage,
                apply_player_damage,
                check_player_death,
            )
                .chain()
                .in_set(TickSet::Combat),
        );
    }
}
