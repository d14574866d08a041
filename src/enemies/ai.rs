//! Enemy perception and actions.

use bevy::prelude::*;

use super::components::*;
use crate::actor::{AnimationKey, Animator, Hitbox, Motion};
use crate::combat::CombatTimers;
use crate::core::{DamageEvent, GameClock, SoundRequest};
use crate::data::{EnemyHitPolicy, GameConfig};
use crate::player::Player;

/// Distance and unit direction from `from` toward `to` (zero when they coincide).
pub fn distance_and_direction(from: Vec2, to: Vec2) -> (f32, Vec2) {
    let delta = to - from;
    (delta.length(), delta.normalize_or_zero())
}

/// Pick Idle, Move, or Attack from the distance to the player.
pub fn update_enemy_status(
    player_query: Query<&Hitbox, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            &Hitbox,
            &EnemyStats,
            &CombatTimers,
            &mut EnemyStatus,
            &mut Animator,
            &mut EnemyCombat,
            &mut AnimationKey,
        ),
        With<Enemy>,
    >,
) {
    let Ok(player_hitbox) = player_query.get_single() else {
        return;
    };
    let player_center = player_hitbox.center();

    for (hitbox, stats, timers, mut status, mut animator, mut combat, mut key) in
        enemy_query.iter_mut()
    {
        let (distance, _) = distance_and_direction(hitbox.center(), player_center);
        let able_to_attack = !timers.attack.is_running();

        let next = if distance <= stats.attack_radius && able_to_attack {
            if *status != EnemyStatus::Attack {
                animator.restart();
                combat.swing_landed = false;
            }
            EnemyStatus::Attack
        } else if distance <= stats.notice_radius {
            EnemyStatus::Move
        } else {
            EnemyStatus::Idle
        };

        if *status != next {
            *status = next;
        }
        if key.status != next.tag() {
            key.status = next.tag().to_string();
        }
    }
}

/// Act on the current status: strike, chase, or stand still.
///
/// An attacking enemy keeps whatever direction it had while closing in.
pub fn enemy_actions(
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    player_query: Query<(Entity, &Hitbox), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            Entity,
            &Hitbox,
            &EnemyStats,
            &EnemyStatus,
            &mut EnemyCombat,
            &mut Motion,
        ),
        With<Enemy>,
    >,
    mut damage_events: EventWriter<DamageEvent>,
    mut sounds: EventWriter<SoundRequest>,
) {
    let Ok((player, player_hitbox)) = player_query.get_single() else {
        return;
    };
    let now = clock.now();

    for (entity, hitbox, stats, status, mut combat, mut motion) in enemy_query.iter_mut() {
        match status {
            EnemyStatus::Attack => {
                combat.attack_time = now;
                let strike = match config.enemy.hit_policy {
                    EnemyHitPolicy::OncePerSwing => !combat.swing_landed,
                    EnemyHitPolicy::EveryTick => true,
                };
                if strike {
                    combat.swing_landed = true;
                    damage_events.send(DamageEvent {
                        target: player,
                        source: entity,
                        amount: stats.damage,
                        attack_type: stats.attack_type.clone(),
                        origin: hitbox.center(),
                    });
                    sounds.send(SoundRequest::new(stats.attack_sound.clone()));
                }
            }
            EnemyStatus::Move => {
                let (_, direction) =
                    distance_and_direction(hitbox.center(), player_hitbox.center());
                motion.direction = direction;
            }
            EnemyStatus::Idle => {
                motion.direction = Vec2::ZERO;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_positions_have_no_direction() {
        let (distance, direction) = distance_and_direction(Vec2::splat(5.0), Vec2::splat(5.0));
        assert_eq!(distance, 0.0);
        assert_eq!(direction, Vec2::ZERO);

        let (distance, direction) = distance_and_direction(Vec2::ZERO, Vec2::new(0.0, -10.0));
        assert_eq!(distance, 10.0);
        assert_eq!(direction, Vec2::NEG_Y);
    }
}
