//! World plugin - level loading, spawning, and teardown.

use bevy::prelude::*;

use super::data::{load_levels_dir, CurrentLevel, LevelRegistry, LEVELS_DIR};
use super::spawning::{spawn_placements, LevelEntity};
use crate::combat::AttackHitbox;
use crate::core::GameState;
use crate::data::{load_game_data, GameCatalog, GameConfig};

/// World plugin - handles level loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Loading),
            load_levels.after(load_game_data),
        )
        .add_systems(OnEnter(GameState::InGame), setup_level)
        .add_systems(OnExit(GameState::InGame), cleanup_level);
    }
}

/// Read the level files and leave `Loading`. Bad level data stops the app.
pub fn load_levels(
    mut commands: Commands,
    catalog: Option<Res<GameCatalog>>,
    config: Option<Res<GameConfig>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut app_exit: EventWriter<AppExit>,
) {
    // Data loading already failed and asked to exit
    let (Some(catalog), Some(config)) = (catalog, config) else {
        return;
    };

    match load_levels_dir(LEVELS_DIR, &config.start_level, &catalog) {
        Ok(registry) => {
            commands.insert_resource(registry);
            commands.insert_resource(CurrentLevel {
                name: config.start_level.clone(),
            });
            next_state.set(GameState::InGame);
        }
        Err(e) => {
            error!("Failed to load levels: {}", e);
            app_exit.send(AppExit::error());
        }
    }
}

/// Build the current level.
pub fn setup_level(
    mut commands: Commands,
    registry: Option<Res<LevelRegistry>>,
    current_level: Option<Res<CurrentLevel>>,
    catalog: Res<GameCatalog>,
    config: Res<GameConfig>,
) {
    let (Some(registry), Some(current_level)) = (registry, current_level) else {
        return;
    };
    let Some(level) = registry.get(&current_level.name) else {
        error!("Level '{}' not found in registry!", current_level.name);
        return;
    };

    info!("Building level: {}", level.name);

    match level.placements() {
        Ok(placements) => {
            spawn_placements(&mut commands, &placements, &catalog, &config);
        }
        Err(e) => error!("{}", e),
    }
}

/// Clean up level entities when leaving InGame state.
fn cleanup_level(
    mut commands: Commands,
    level_query: Query<Entity, Or<(With<LevelEntity>, With<AttackHitbox>)>>,
) {
    for entity in level_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
