//! Attack hitboxes.

use bevy::prelude::*;

/// What produced an attack hitbox; selects the damage formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Weapon,
    Magic,
}

impl AttackKind {
    /// Attack type tag carried by the damage events it causes.
    pub fn tag(self) -> &'static str {
        match self {
            AttackKind::Weapon => "weapon",
            AttackKind::Magic => "magic",
        }
    }
}

/// A short-lived box that hurts whatever attackable it overlaps. Removed when
/// the owner's attack window closes.
#[derive(Component, Debug, Clone, Copy)]
pub struct AttackHitbox {
    pub owner: Entity,
    pub kind: AttackKind,
}
