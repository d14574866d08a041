//! Persistence plugin - saves the player on exit and restores it on load.

use bevy::prelude::*;

use super::save::*;
use crate::core::GameState;
use crate::data::GameCatalog;
use crate::player::{Loadout, Player, PlayerStats, Progress, Vitals};
use crate::world::setup_level;

pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SavePath>()
            .add_systems(OnEnter(GameState::InGame), restore_player.after(setup_level))
            .add_systems(OnExit(GameState::InGame), save_player)
            .add_systems(Last, save_on_app_exit);
    }
}

type SavedPlayers<'w, 's> =
    Query<'w, 's, (&'static PlayerStats, &'static Vitals, &'static Progress, &'static Loadout), With<Player>>;

fn write_players(save_path: &SavePath, players: &SavedPlayers) {
    for (stats, vitals, progress, loadout) in players.iter() {
        let data = SaveData::capture(stats, vitals, progress, loadout);
        match write_save(&save_path.0, &data) {
            Ok(()) => info!("Saved player to {:?}", save_path.0),
            Err(e) => warn!("{}", e),
        }
    }
}

fn save_player(save_path: Res<SavePath>, players: SavedPlayers) {
    write_players(&save_path, &players);
}

fn save_on_app_exit(mut exits: EventReader<AppExit>, save_path: Res<SavePath>, players: SavedPlayers) {
    if exits.read().last().is_some() {
        write_players(&save_path, &players);
    }
}

fn restore_player(
    save_path: Res<SavePath>,
    catalog: Res<GameCatalog>,
    mut players: Query<(&mut PlayerStats, &mut Vitals, &mut Progress, &mut Loadout), With<Player>>,
) {
    let data = match read_save(&save_path.0) {
        Ok(Some(data)) => data,
        Ok(None) => return,
        Err(e) => {
            warn!("{}", e);
            return;
        }
    };

    for (mut stats, mut vitals, mut progress, mut loadout) in players.iter_mut() {
        data.restore(&catalog, &mut stats, &mut vitals, &mut progress, &mut loadout);
        info!("Restored player from {:?}", save_path.0);
    }
}
