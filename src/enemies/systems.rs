//! Enemy upkeep: knockback, animation, cooldowns, and death.

use bevy::prelude::*;

use super::components::*;
use crate::actor::{AnimationKey, Animator, Hitbox, Motion};
use crate::combat::{blink_alpha, CombatTimers};
use crate::core::{EntityDied, GameClock, ParticleRequest, SoundRequest};
use crate::data::{AnimationLibrary, GameConfig};

/// Push enemies away from whatever hit them while they are invulnerable.
///
/// Movement normalizes the direction afterwards, so the knockback speed is
/// the enemy's own speed whatever its resistance.
pub fn enemy_hit_reaction(
    mut query: Query<(&CombatTimers, &EnemyStats, &mut Motion), With<Enemy>>,
) {
    for (timers, stats, mut motion) in query.iter_mut() {
        if !timers.vulnerable() {
            motion.direction *= -stats.resistance;
        }
    }
}

/// Loop the current clip. Finishing an attack clip starts the recharge.
pub fn animate_enemies(
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    library: Res<AnimationLibrary>,
    mut query: Query<
        (
            &AnimationKey,
            &EnemyStatus,
            &EnemyCombat,
            &mut CombatTimers,
            &mut Animator,
        ),
        With<Enemy>,
    >,
) {
    for (key, status, combat, mut timers, mut animator) in query.iter_mut() {
        let wrapped = animator.advance(library.frame_count(&key.kind, &key.status));
        if wrapped && *status == EnemyStatus::Attack {
            timers
                .attack
                .start(combat.attack_time, config.enemy.attack_cooldown_ms);
        }
        animator.alpha = if timers.vulnerable() {
            1.0
        } else {
            blink_alpha(clock.now())
        };
    }
}

pub fn enemy_cooldowns(clock: Res<GameClock>, mut query: Query<&mut CombatTimers, With<Enemy>>) {
    let now = clock.now();
    for mut timers in query.iter_mut() {
        timers.attack.tick(now);
        timers.invulnerability.tick(now);
    }
}

/// Pay out and remove enemies whose health ran out.
pub fn check_enemy_death(
    mut commands: Commands,
    query: Query<(Entity, &Enemy, &EnemyHealth, &EnemyStats, &EnemyCombat, &Hitbox)>,
    mut deaths: EventWriter<EntityDied>,
    mut particles: EventWriter<ParticleRequest>,
    mut sounds: EventWriter<SoundRequest>,
) {
    for (entity, enemy, health, stats, combat, hitbox) in query.iter() {
        if health.0 > 0.0 {
            continue;
        }

        let position = hitbox.center();
        info!("{} defeated at {:?}", enemy.name, position);

        deaths.send(EntityDied {
            entity,
            name: enemy.name.clone(),
            position,
            exp: stats.exp,
            gold: stats.gold,
            killed_by: combat.last_attacker,
        });
        particles.send(ParticleRequest {
            kind: enemy.name.clone(),
            position,
        });
        sounds.send(SoundRequest::new("death"));
        commands.entity(entity).despawn_recursive();
    }
}
