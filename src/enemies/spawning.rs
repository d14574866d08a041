//! Enemy construction from catalog entries.

use bevy::prelude::*;

use super::components::*;
use crate::actor::{AnimationKey, Animator, Attackable, Hitbox, Motion};
use crate::combat::CombatTimers;
use crate::data::{GameConfig, MonsterDef};

/// Spawn monster `name` whose sprite occupies the tile at `top_left`.
pub fn spawn_enemy(
    commands: &mut Commands,
    name: &str,
    def: &MonsterDef,
    top_left: Vec2,
    config: &GameConfig,
) -> Entity {
    let tile = config.tile_size;
    let sprite = Hitbox::new(top_left.x, top_left.y, tile, tile);
    let hitbox = Hitbox::from_sprite_rect(sprite, Vec2::new(0.0, config.enemy.hitbox_inset));
    let status = EnemyStatus::default();

    commands
        .spawn((
            Enemy {
                name: name.to_string(),
            },
            Name::new(format!("Enemy: {name}")),
            hitbox,
            Motion::new(def.speed),
            Animator::new(config.animation_speed),
            AnimationKey::new(name, status.tag()),
            EnemyStats::from(def),
            EnemyHealth(def.health),
            status,
            CombatTimers::default(),
            EnemyCombat::default(),
            Attackable,
        ))
        .id()
}
