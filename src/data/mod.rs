//! Data module - static catalogs, tuning config, and the animation library.
//!
//! Everything here is loaded once while in `GameState::Loading` and then only
//! read. Systems take these resources by reference instead of reaching for
//! module-level tables.

mod animation;
mod catalog;
mod config;
mod error;
mod loader;
mod plugin;
mod stats;

pub use animation::{
    AnimationLibrary, AnimationSet, ENEMY_STATUSES, PARTICLE_KIND, PLAYER_KIND, PLAYER_STATUSES,
};
pub use catalog::{GameCatalog, MonsterDef, PlayerBase, SpellDef, SpellStyle, WeaponDef};
pub use config::{EnemyHitPolicy, EnemyTuning, GameConfig, PlayerTuning, UpgradeTuning};
pub use error::{CatalogError, DataLoadError};
pub use loader::{load_or_default, read_ron};
pub use plugin::{load_game_data, DataPlugin};
pub use stats::{Stat, StatBlock};
