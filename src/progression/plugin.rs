//! Progression plugin - kill rewards and the upgrade menu.

use bevy::prelude::*;

use super::rewards::award_kill_rewards;
use super::upgrade::{upgrade_menu_input, UpgradeMenu};
use crate::core::{PlayState, TickSet};

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UpgradeMenu>()
            .add_systems(Update, award_kill_rewards.in_set(TickSet::Progression))
            .add_systems(
                Update,
                upgrade_menu_input.run_if(in_state(PlayState::Upgrading)),
            );
    }
}
