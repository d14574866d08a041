//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. The simulation
//! systems only run while `PlayState::Exploring` is active, so opening the
//! upgrade menu pauses them. The tick clock keeps running, and windows that
//! were open when the menu opened can expire before it closes.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` to read data files and build catalogs
/// - `InGame` while a level is loaded
/// - `GameOver` when the player's health runs out
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active level
    InGame,
    /// Player has died
    GameOver,
}

/// Sub-states for gameplay - only active when GameState::InGame.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Normal gameplay - movement, combat, exploration
    #[default]
    Exploring,
    /// Upgrade menu is open, simulation paused
    Upgrading,
}
