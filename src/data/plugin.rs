//! Data plugin - loads catalogs and tuning when the game starts.

use bevy::prelude::*;

use super::animation::AnimationLibrary;
use super::catalog::GameCatalog;
use super::config::GameConfig;
use super::error::DataLoadError;
use super::loader::{load_or_default, read_ron};
use crate::core::GameState;

const CONFIG_PATH: &str = "assets/data/config.ron";
const CATALOG_PATH: &str = "assets/data/catalog.ron";
const ANIMATIONS_PATH: &str = "assets/data/animations.ron";

/// Data plugin - inserts `GameConfig`, `GameCatalog` and `AnimationLibrary`.
pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_game_data);
    }
}

/// Load and validate all static data.
///
/// A catalog that fails validation stops the app: nothing downstream can run
/// with unresolved keys.
pub fn load_game_data(mut commands: Commands, mut app_exit: EventWriter<AppExit>) {
    let config: GameConfig = load_or_default(CONFIG_PATH);
    let catalog: GameCatalog = load_or_default(CATALOG_PATH);

    let animations = match read_ron::<AnimationLibrary>(ANIMATIONS_PATH) {
        Ok(library) => {
            info!("Loaded {}", ANIMATIONS_PATH);
            library
        }
        Err(DataLoadError::FileNotFound(_)) => {
            info!("No animation manifest, using the conventional graphics layout");
            AnimationLibrary::builtin(&catalog)
        }
        Err(e) => {
            error!("{}. Using the conventional graphics layout.", e);
            AnimationLibrary::builtin(&catalog)
        }
    };

    if let Err(e) = catalog.validate().and_then(|_| animations.validate(&catalog)) {
        error!("Invalid game data: {}", e);
        app_exit.send(AppExit::error());
        return;
    }

    info!(
        "Catalog ready: {} weapons, {} spells, {} monsters",
        catalog.weapons.len(),
        catalog.spells.len(),
        catalog.monsters.len()
    );

    commands.insert_resource(config);
    commands.insert_resource(catalog);
    commands.insert_resource(animations);
}
