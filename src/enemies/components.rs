//! Enemy-related components.

use bevy::prelude::*;

use crate::data::MonsterDef;

/// An enemy; `name` keys into the monster catalog and the animation library.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub name: String,
}

/// Per-enemy copy of its monster definition.
#[derive(Component, Debug, Clone)]
pub struct EnemyStats {
    pub exp: f32,
    pub gold: u32,
    pub damage: f32,
    pub speed: f32,
    pub resistance: f32,
    pub attack_radius: f32,
    pub notice_radius: f32,
    pub attack_type: String,
    pub attack_sound: String,
}

impl From<&MonsterDef> for EnemyStats {
    fn from(def: &MonsterDef) -> Self {
        Self {
            exp: def.exp,
            gold: def.gold,
            damage: def.damage,
            speed: def.speed,
            resistance: def.resistance,
            attack_radius: def.attack_radius,
            notice_radius: def.notice_radius,
            attack_type: def.attack_type.clone(),
            attack_sound: def.attack_sound.clone(),
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct EnemyHealth(pub f32);

/// Behavior state, derived each tick from the distance to the player.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyStatus {
    #[default]
    Idle,
    Move,
    Attack,
}

impl EnemyStatus {
    pub fn tag(self) -> &'static str {
        match self {
            EnemyStatus::Idle => "idle",
            EnemyStatus::Move => "move",
            EnemyStatus::Attack => "attack",
        }
    }
}

/// Bookkeeping for the enemy's own attacks and the hits it takes.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct EnemyCombat {
    /// Tick time of the latest attack action; the recharge counts from here
    pub attack_time: u64,
    pub last_attacker: Option<Entity>,
    /// The current swing already hurt the player
    pub swing_landed: bool,
}
