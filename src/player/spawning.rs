//! Player construction.

use bevy::prelude::*;

use super::components::*;
use crate::actor::{AnimationKey, Animator, Hitbox, Motion};
use crate::combat::CombatTimers;
use crate::data::{GameCatalog, GameConfig, PLAYER_KIND};

/// Spawn a fresh player whose sprite occupies the tile at `top_left`.
pub fn spawn_player(
    commands: &mut Commands,
    top_left: Vec2,
    catalog: &GameCatalog,
    config: &GameConfig,
) -> Entity {
    let tile = config.tile_size;
    let sprite = Hitbox::new(top_left.x, top_left.y, tile, tile);
    let hitbox = Hitbox::from_sprite_rect(sprite, Vec2::from(catalog.player.hitbox_inset));
    let stats = PlayerStats::from_base(&catalog.player);
    let status = PlayerStatus::default();

    commands
        .spawn((
            Player,
            Name::new("Player"),
            hitbox,
            Motion::new(stats.stats.speed),
            Animator::new(config.animation_speed),
            AnimationKey::new(PLAYER_KIND, status.tag()),
            Vitals::full(&stats.stats),
            stats,
            Progress::default(),
            Loadout::default(),
            CombatTimers::default(),
            status,
        ))
        .id()
}
