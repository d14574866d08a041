//! UI plugin - HUD, upgrade menu, and the game over screen.

use bevy::prelude::*;

use super::hud;
use super::upgrade_menu;
use crate::core::GameState;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
        upgrade_menu::setup_upgrade_menu_systems(app);

        app.add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup_game_over);
    }
}

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

fn setup_game_over(mut commands: Commands) {
    // Dark overlay
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.0, 0.0, 0.9)),
            GameOverUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("YOU DIED"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.2, 0.2)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press Enter to try again"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.65)),
            ));
        });
}

fn cleanup_game_over(mut commands: Commands, ui_query: Query<Entity, With<GameOverUi>>) {
    for entity in ui_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
