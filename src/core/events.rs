//! Global events used for cross-system communication.
//!
//! Player and enemy systems never call into the world directly. They push
//! events here and the combat, effects and progression systems consume them
//! later in the same tick, which keeps each side testable in isolation.

use bevy::prelude::*;

/// What an actor asked for when it started attacking.
#[derive(Debug, Clone, PartialEq)]
pub enum AttackRequest {
    /// Melee swing with the weapon at this catalog index.
    Weapon { weapon_index: usize },
    /// Spell cast. `strength` already includes the caster's magic stat.
    Spell {
        spell_index: usize,
        strength: f32,
        cost: f32,
    },
}

/// Sent when an actor begins an attack window.
#[derive(Event, Debug, Clone)]
pub struct AttackStarted {
    pub attacker: Entity,
    pub request: AttackRequest,
}

/// Sent when an actor's attack window closes. Every attack hitbox the actor
/// owns is removed in response.
#[derive(Event, Debug, Clone)]
pub struct AttackEnded {
    pub attacker: Entity,
}

/// Sent when something should lose health.
///
/// The receiving side decides whether the hit lands (vulnerability windows),
/// so sending a damage event never guarantees damage.
#[derive(Event, Debug, Clone)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Raw damage amount, no mitigation applied
    pub amount: f32,
    /// Attack type tag ("slash", "claw", "weapon", "magic"...), also used as
    /// the particle key for hits on the player
    pub attack_type: String,
    /// Hitbox center of the source at the time of the hit
    pub origin: Vec2,
}

/// Sent once when an enemy's health runs out, right before it is despawned.
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
    /// Catalog name of the enemy
    pub name: String,
    pub position: Vec2,
    /// Experience paid to the killer
    pub exp: f32,
    /// Gold paid to the killer
    pub gold: u32,
    /// Last entity that damaged it (if any)
    pub killed_by: Option<Entity>,
}

/// Fire-and-forget request for a particle effect.
#[derive(Event, Debug, Clone)]
pub struct ParticleRequest {
    pub kind: String,
    pub position: Vec2,
}

/// Fire-and-forget request for a sound cue.
#[derive(Event, Debug, Clone)]
pub struct SoundRequest {
    pub cue: String,
}

impl SoundRequest {
    pub fn new(cue: impl Into<String>) -> Self {
        Self { cue: cue.into() }
    }
}
