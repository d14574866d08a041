//! Turning attack requests into hitboxes and spell effects.

use bevy::prelude::*;
use rand::Rng;

use super::components::*;
use crate::actor::{Hitbox, SpriteImage};
use crate::core::{AttackEnded, AttackRequest, AttackStarted, ParticleRequest, SoundRequest};
use crate::data::{GameCatalog, GameConfig, SpellStyle, WeaponDef};
use crate::player::{Facing, Player, PlayerStats, PlayerStatus, Vitals};

/// Weapon offset from the sprite edge: along the swing for horizontal
/// facings, across it for vertical ones.
const SIDE_GRIP: f32 = 16.0;
const OVERHEAD_GRIP: f32 = -10.0;
/// Heal sparkles float this far above the caster.
const HEAL_RISE: f32 = 65.0;

/// Where a weapon swung by someone whose sprite is `body` lands.
pub fn weapon_hitbox(body: &Hitbox, facing: Facing, weapon: &WeaponDef) -> Hitbox {
    let (reach, thickness) = weapon.size;
    match facing {
        Facing::Right => {
            let anchor = body.mid_right() + Vec2::new(0.0, SIDE_GRIP);
            Hitbox::new(anchor.x, anchor.y - thickness / 2.0, reach, thickness)
        }
        Facing::Left => {
            let anchor = body.mid_left() + Vec2::new(0.0, SIDE_GRIP);
            Hitbox::new(anchor.x - reach, anchor.y - thickness / 2.0, reach, thickness)
        }
        Facing::Down => {
            let anchor = body.mid_bottom() + Vec2::new(OVERHEAD_GRIP, 0.0);
            Hitbox::new(anchor.x - thickness / 2.0, anchor.y, thickness, reach)
        }
        Facing::Up => {
            let anchor = body.mid_top() + Vec2::new(OVERHEAD_GRIP, 0.0);
            Hitbox::new(anchor.x - thickness / 2.0, anchor.y - reach, thickness, reach)
        }
    }
}

/// Spawn weapon hitboxes and run spells for every attack started this tick.
///
/// A spell the caster cannot pay for does nothing at all.
pub fn resolve_attack_requests(
    mut commands: Commands,
    config: Res<GameConfig>,
    catalog: Res<GameCatalog>,
    mut started: EventReader<AttackStarted>,
    mut casters: Query<(&Hitbox, &PlayerStatus, &PlayerStats, &mut Vitals), With<Player>>,
    mut particles: EventWriter<ParticleRequest>,
    mut sounds: EventWriter<SoundRequest>,
) {
    let inset = Vec2::from(catalog.player.hitbox_inset);

    for event in started.read() {
        let Ok((hitbox, status, stats, mut vitals)) = casters.get_mut(event.attacker) else {
            continue;
        };
        let body = hitbox.inflated(inset);

        match &event.request {
            AttackRequest::Weapon { weapon_index } => {
                let weapon = match catalog.weapon(*weapon_index) {
                    Ok(weapon) => weapon,
                    Err(e) => {
                        warn!("Attack ignored: {}", e);
                        continue;
                    }
                };
                commands.spawn((
                    AttackHitbox {
                        owner: event.attacker,
                        kind: AttackKind::Weapon,
                    },
                    Name::new(format!("Weapon: {}", weapon.name)),
                    weapon_hitbox(&body, status.facing, weapon),
                    SpriteImage(format!(
                        "graphics/weapons/{}/{}.png",
                        weapon.name,
                        status.facing.name()
                    )),
                ));
            }
            AttackRequest::Spell {
                spell_index,
                strength,
                cost,
            } => {
                let style = match catalog.spell(*spell_index) {
                    Ok(spell) => spell.style,
                    Err(e) => {
                        warn!("Spell ignored: {}", e);
                        continue;
                    }
                };
                if vitals.energy < *cost {
                    debug!("Not enough energy for {:?}", style);
                    continue;
                }
                vitals.energy -= *cost;

                match style {
                    SpellStyle::Heal => {
                        vitals.health = (vitals.health + *strength).min(stats.stats.health);
                        let center = body.center();
                        particles.send(ParticleRequest {
                            kind: "aura".to_string(),
                            position: center,
                        });
                        particles.send(ParticleRequest {
                            kind: "heal".to_string(),
                            position: center - Vec2::new(0.0, HEAL_RISE),
                        });
                        sounds.send(SoundRequest::new("heal"));
                    }
                    SpellStyle::Flame => {
                        let tile = config.tile_size;
                        let jitter = tile / 3.0;
                        let mut rng = rand::thread_rng();
                        for step in 1..=5 {
                            let offset = Vec2::new(
                                rng.gen_range(-jitter..=jitter),
                                rng.gen_range(-jitter..=jitter),
                            );
                            let position =
                                body.center() + status.facing.vector() * step as f32 * tile + offset;
                            commands.spawn((
                                AttackHitbox {
                                    owner: event.attacker,
                                    kind: AttackKind::Magic,
                                },
                                Name::new("Flame"),
                                Hitbox::from_center(position, Vec2::splat(tile)),
                            ));
                            particles.send(ParticleRequest {
                                kind: "flame".to_string(),
                                position,
                            });
                        }
                        sounds.send(SoundRequest::new("flame"));
                    }
                }
            }
        }
    }
}

/// Remove every attack hitbox owned by an actor whose attack window closed.
pub fn clear_finished_attacks(
    mut commands: Commands,
    mut ended: EventReader<AttackEnded>,
    hitboxes: Query<(Entity, &AttackHitbox)>,
) {
    for event in ended.read() {
        for (entity, attack) in hitboxes.iter() {
            if attack.owner == event.attacker {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}
