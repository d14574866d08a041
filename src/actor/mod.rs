//! Actor module - hitboxes, motion, collision, and frame animation shared by
//! everything that moves or animates.

mod collision;
mod components;

pub use collision::{move_actor, move_actors, resolve_collisions, Axis};
pub use components::*;
