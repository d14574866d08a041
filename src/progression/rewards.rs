//! Paying out kills.

use bevy::prelude::*;

use crate::core::EntityDied;
use crate::player::Progress;

/// Credit experience and gold to whoever landed the killing blow.
pub fn award_kill_rewards(mut deaths: EventReader<EntityDied>, mut killers: Query<&mut Progress>) {
    for death in deaths.read() {
        let Some(killer) = death.killed_by else {
            continue;
        };
        let Ok(mut progress) = killers.get_mut(killer) else {
            continue;
        };
        progress.exp += death.exp;
        progress.gold += death.gold;
        debug!("+{} exp, +{} gold from {}", death.exp, death.gold, death.name);
    }
}
