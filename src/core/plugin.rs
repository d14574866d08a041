//! Core plugin that sets up game states, the clock, events, and tick ordering.

use bevy::prelude::*;
use bevy::time::TimeSystem;

use super::clock::*;
use super::events::*;
use super::states::*;

/// Per-tick ordering of the simulation.
///
/// Player update runs before enemy updates, and both run before the combat
/// sweep. Commands issued by one set are applied before the next one starts.
/// The clock itself is sampled in `First`, ahead of every set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    Player,
    Enemy,
    Combat,
    Progression,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, GameOver) and the play sub-state
/// - The tick clock
/// - Global events (AttackStarted, DamageEvent, EntityDied, etc.)
/// - The ordering of simulation system sets
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            .init_resource::<GameClock>()

            // Register global events
            .add_event::<AttackStarted>()
            .add_event::<AttackEnded>()
            .add_event::<DamageEvent>()
            .add_event::<EntityDied>()
            .add_event::<ParticleRequest>()
            .add_event::<SoundRequest>()

            .configure_sets(
                Update,
                (
                    TickSet::Player,
                    TickSet::Enemy,
                    TickSet::Combat,
                    TickSet::Progression,
                )
                    .chain()
                    .run_if(in_state(PlayState::Exploring)),
            )
            .add_systems(First, sample_clock.after(TimeSystem))

            // Escape opens and closes the upgrade menu
            .add_systems(
                Update,
                toggle_upgrade_menu.run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                Update,
                restart_after_game_over.run_if(in_state(GameState::GameOver)),
            );
    }
}

/// Handle Escape to pause into (and back out of) the upgrade menu.
fn toggle_upgrade_menu(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Exploring => next_state.set(PlayState::Upgrading),
            PlayState::Upgrading => next_state.set(PlayState::Exploring),
        }
    }
}

/// Enter reloads the level after a game over.
fn restart_after_game_over(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        info!("Restarting level");
        next_state.set(GameState::InGame);
    }
}
