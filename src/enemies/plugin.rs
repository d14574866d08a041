//! Enemy plugin - registers the enemy share of the tick.

use bevy::prelude::*;

use super::ai::{enemy_actions, update_enemy_status};
use super::components::Enemy;
use super::systems::*;
use crate::actor::move_actors;
use crate::core::TickSet;

/// Enemy plugin - knockback, movement, animation, death, and AI.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                enemy_hit_reaction,
                move_actors::<Enemy>,
                animate_enemies,
                enemy_cooldowns,
                check_enemy_death,
                update_enemy_status,
                enemy_actions,
            )
                .chain()
                .in_set(TickSet::Enemy),
        );
    }
}
