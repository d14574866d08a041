//! Core game module - states, the tick clock, events, and system ordering.
//!
//! This module provides the foundation that all other game systems build upon.

mod clock;
mod events;
mod plugin;
mod states;

pub use clock::*;
pub use events::*;
pub use plugin::{CorePlugin, TickSet};
pub use states::*;
