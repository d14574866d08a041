//! Per-tick player update after input: cooldowns, status, animation, regen.

use bevy::prelude::*;

use super::components::*;
use crate::actor::{AnimationKey, Animator, Motion};
use crate::combat::{blink_alpha, CombatTimers};
use crate::core::{AttackEnded, GameClock};
use crate::data::{AnimationLibrary, GameConfig};

/// Close expired windows. Closing the attack window removes the attack's
/// hitboxes through [`AttackEnded`].
pub fn player_cooldowns(
    clock: Res<GameClock>,
    mut query: Query<(Entity, &mut CombatTimers, &mut Loadout), With<Player>>,
    mut ended: EventWriter<AttackEnded>,
) {
    let now = clock.now();
    for (entity, mut timers, mut loadout) in query.iter_mut() {
        if timers.attack.tick(now) {
            ended.send(AttackEnded { attacker: entity });
        }
        timers.invulnerability.tick(now);
        loadout.weapon_switch.tick(now);
        loadout.magic_switch.tick(now);
    }
}

pub fn update_player_status(
    mut query: Query<
        (&mut PlayerStatus, &mut Motion, &CombatTimers, &mut AnimationKey),
        With<Player>,
    >,
) {
    for (mut status, mut motion, timers, mut key) in query.iter_mut() {
        status.stance = if timers.attack.is_running() {
            motion.direction = Vec2::ZERO;
            Stance::Attacking
        } else if motion.direction == Vec2::ZERO {
            Stance::Idle
        } else {
            Stance::Moving
        };

        let tag = status.tag();
        if key.status != tag {
            key.status = tag;
        }
    }
}

/// Loop the current clip and blink while invulnerable.
pub fn animate_player(
    clock: Res<GameClock>,
    library: Res<AnimationLibrary>,
    mut query: Query<(&AnimationKey, &CombatTimers, &mut Animator), With<Player>>,
) {
    for (key, timers, mut animator) in query.iter_mut() {
        animator.advance(library.frame_count(&key.kind, &key.status));
        animator.alpha = if timers.vulnerable() {
            1.0
        } else {
            blink_alpha(clock.now())
        };
    }
}

/// Creep energy back toward its stat, proportional to magic.
pub fn regenerate_energy(
    config: Res<GameConfig>,
    mut query: Query<(&PlayerStats, &mut Vitals), With<Player>>,
) {
    for (stats, mut vitals) in query.iter_mut() {
        let ceiling = stats.stats.energy;
        if vitals.energy < ceiling {
            vitals.energy += config.player.energy_regen_factor * stats.stats.magic;
        }
        vitals.energy = vitals.energy.min(ceiling);
    }
}
