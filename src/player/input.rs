//! Keyboard to intent mapping.
//!
//! Controls:
//! - Arrows / WASD: Move
//! - Space: Weapon attack
//! - Left Ctrl: Cast spell
//! - Q: Next weapon
//! - E: Next spell

use bevy::prelude::*;

use super::components::*;
use crate::actor::Motion;
use crate::combat::CombatTimers;
use crate::core::{AttackRequest, AttackStarted, GameClock, SoundRequest};
use crate::data::{GameCatalog, GameConfig};

fn held(keyboard: &ButtonInput<KeyCode>, keys: [KeyCode; 2]) -> bool {
    keyboard.any_pressed(keys)
}

/// Read held keys into direction, facing, attacks, and loadout switches.
///
/// Nothing is read while an attack window is open; the player stands still
/// until it closes.
pub fn player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    catalog: Res<GameCatalog>,
    mut query: Query<
        (
            Entity,
            &mut Motion,
            &mut CombatTimers,
            &mut PlayerStatus,
            &mut Loadout,
            &PlayerStats,
        ),
        With<Player>,
    >,
    mut attacks: EventWriter<AttackStarted>,
    mut sounds: EventWriter<SoundRequest>,
) {
    let now = clock.now();

    for (entity, mut motion, mut timers, mut status, mut loadout, stats) in query.iter_mut() {
        motion.speed = stats.stats.speed;

        if timers.attack.is_running() {
            motion.direction = Vec2::ZERO;
            continue;
        }

        // Vertical first; a held horizontal key wins the facing
        let mut direction = Vec2::ZERO;
        if held(&keyboard, [KeyCode::ArrowUp, KeyCode::KeyW]) {
            direction.y = -1.0;
            status.facing = Facing::Up;
        } else if held(&keyboard, [KeyCode::ArrowDown, KeyCode::KeyS]) {
            direction.y = 1.0;
            status.facing = Facing::Down;
        }
        if held(&keyboard, [KeyCode::ArrowRight, KeyCode::KeyD]) {
            direction.x = 1.0;
            status.facing = Facing::Right;
        } else if held(&keyboard, [KeyCode::ArrowLeft, KeyCode::KeyA]) {
            direction.x = -1.0;
            status.facing = Facing::Left;
        }
        motion.direction = direction;

        let window = config.player.attack_cooldown_ms
            + catalog
                .weapon(loadout.weapon_index)
                .map_or(0, |weapon| weapon.cooldown_ms);

        if keyboard.pressed(KeyCode::Space) {
            timers.attack.start(now, window);
            attacks.send(AttackStarted {
                attacker: entity,
                request: AttackRequest::Weapon {
                    weapon_index: loadout.weapon_index,
                },
            });
            sounds.send(SoundRequest::new("sword"));
        }

        if keyboard.pressed(KeyCode::ControlLeft) {
            if let Ok(spell) = catalog.spell(loadout.magic_index) {
                timers.attack.start(now, window);
                attacks.send(AttackStarted {
                    attacker: entity,
                    request: AttackRequest::Spell {
                        spell_index: loadout.magic_index,
                        strength: spell.strength + stats.stats.magic,
                        cost: spell.cost,
                    },
                });
            }
        }

        if timers.attack.is_running() {
            motion.direction = Vec2::ZERO;
        }

        if keyboard.pressed(KeyCode::KeyQ) && !loadout.weapon_switch.is_running() {
            loadout
                .weapon_switch
                .start(now, config.player.switch_duration_ms);
            loadout.weapon_index = (loadout.weapon_index + 1) % catalog.weapons.len().max(1);
            debug!("Switched to weapon {}", loadout.weapon_index);
        }

        if keyboard.pressed(KeyCode::KeyE) && !loadout.magic_switch.is_running() {
            loadout
                .magic_switch
                .start(now, config.player.switch_duration_ms);
            loadout.magic_index = (loadout.magic_index + 1) % catalog.spells.len().max(1);
            debug!("Switched to spell {}", loadout.magic_index);
        }
    }
}
