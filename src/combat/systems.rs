//! Combat dispatch: the attack sweep and damage intake on both sides.

use std::collections::HashSet;

use bevy::prelude::*;
use rand::Rng;

use super::components::*;
use super::timers::CombatTimers;
use crate::actor::{Attackable, Breakable, Hitbox, Motion};
use crate::core::{DamageEvent, GameClock, GameState, ParticleRequest, SoundRequest};
use crate::data::{GameCatalog, GameConfig};
use crate::enemies::{distance_and_direction, Enemy, EnemyCombat, EnemyHealth};
use crate::player::{Loadout, Player, PlayerStats, Vitals};

/// Leaves burst from this far above a cut patch of grass.
const LEAF_RISE: f32 = 50.0;

/// Test every attack hitbox against every attackable.
///
/// Grass breaks outright. Anything else gets a [`DamageEvent`] with the
/// owner's full damage for the kind of hitbox that touched it.
pub fn sweep_attacks(
    mut commands: Commands,
    catalog: Res<GameCatalog>,
    attacks: Query<(&AttackHitbox, &Hitbox)>,
    targets: Query<(Entity, &Hitbox, Has<Breakable>), (With<Attackable>, Without<AttackHitbox>)>,
    owners: Query<(&Hitbox, &PlayerStats, &Loadout), Without<AttackHitbox>>,
    mut damage_events: EventWriter<DamageEvent>,
    mut particles: EventWriter<ParticleRequest>,
) {
    let mut broken = HashSet::new();
    let mut rng = rand::thread_rng();

    for (attack, attack_box) in attacks.iter() {
        let Ok((owner_box, stats, loadout)) = owners.get(attack.owner) else {
            continue;
        };

        for (target, target_box, breakable) in targets.iter() {
            if !attack_box.overlaps(target_box) {
                continue;
            }

            if breakable {
                if broken.insert(target) {
                    let position = target_box.center() - Vec2::new(0.0, LEAF_RISE);
                    for _ in 0..rng.gen_range(3..=6) {
                        particles.send(ParticleRequest {
                            kind: "leaf".to_string(),
                            position,
                        });
                    }
                    commands.entity(target).despawn_recursive();
                }
                continue;
            }

            let amount = match attack.kind {
                AttackKind::Weapon => stats.full_weapon_damage(&catalog, loadout.weapon_index),
                AttackKind::Magic => stats.full_magic_damage(&catalog, loadout.magic_index),
            };
            let amount = match amount {
                Ok(amount) => amount,
                Err(e) => {
                    warn!("Hit ignored: {}", e);
                    continue;
                }
            };

            damage_events.send(DamageEvent {
                target,
                source: attack.owner,
                amount,
                attack_type: attack.kind.tag().to_string(),
                origin: owner_box.center(),
            });
        }
    }
}

/// Land hits on enemies that are not inside their invincibility window.
pub fn apply_enemy_damage(
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    mut events: EventReader<DamageEvent>,
    mut enemies: Query<
        (
            &Hitbox,
            &mut EnemyHealth,
            &mut CombatTimers,
            &mut EnemyCombat,
            &mut Motion,
        ),
        With<Enemy>,
    >,
    mut sounds: EventWriter<SoundRequest>,
) {
    for event in events.read() {
        let Ok((hitbox, mut health, mut timers, mut combat, mut motion)) =
            enemies.get_mut(event.target)
        else {
            continue;
        };
        if !timers.vulnerable() {
            continue;
        }

        sounds.send(SoundRequest::new("hit"));
        let (_, toward_attacker) = distance_and_direction(hitbox.center(), event.origin);
        motion.direction = toward_attacker;
        health.0 -= event.amount;
        combat.last_attacker = Some(event.source);
        timers
            .invulnerability
            .start(clock.now(), config.enemy.invincibility_ms);
    }
}

/// Land hits on the player. No mitigation; the raw amount comes off health.
pub fn apply_player_damage(
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    mut events: EventReader<DamageEvent>,
    mut players: Query<(&Hitbox, &mut Vitals, &mut CombatTimers), With<Player>>,
    mut particles: EventWriter<ParticleRequest>,
) {
    for event in events.read() {
        let Ok((hitbox, mut vitals, mut timers)) = players.get_mut(event.target) else {
            continue;
        };
        if !timers.vulnerable() {
            continue;
        }

        vitals.health -= event.amount;
        timers
            .invulnerability
            .start(clock.now(), config.player.invulnerability_ms);
        particles.send(ParticleRequest {
            kind: event.attack_type.clone(),
            position: hitbox.center(),
        });
    }
}

pub fn check_player_death(
    players: Query<&Vitals, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if players.iter().any(|vitals| vitals.health <= 0.0) {
        info!("Player died! Transitioning to Game Over...");
        next_state.set(GameState::GameOver);
    }
}
