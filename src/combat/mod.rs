//! Combat module - attack hitboxes, spells, timers, and damage dispatch.

mod attacks;
mod components;
mod plugin;
mod systems;
mod timers;

pub use attacks::weapon_hitbox;
pub use components::*;
pub use plugin::CombatPlugin;
pub use timers::{blink_alpha, CombatTimers, Cooldown};
