//! Player plugin - input, movement, and the rest of the player tick.

use bevy::prelude::*;

use super::components::Player;
use super::input::player_input;
use super::systems::*;
use crate::actor::move_actors;
use crate::core::TickSet;

/// Player plugin - runs the player's share of the tick.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                player_input,
                move_actors::<Player>,
                player_cooldowns,
                update_player_status,
                animate_player,
                regenerate_energy,
            )
                .chain()
                .in_set(TickSet::Player),
        );
    }
}
