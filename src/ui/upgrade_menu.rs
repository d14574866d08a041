//! Upgrade menu - one column per stat, shown while the game is paused.

use bevy::prelude::*;

use crate::core::PlayState;
use crate::data::Stat;
use crate::player::{Player, PlayerStats};
use crate::progression::UpgradeMenu;

#[derive(Component)]
struct UpgradeMenuUi;

/// One column; `index` is the stat it binds to.
#[derive(Component)]
struct UpgradeItem {
    index: usize,
}

#[derive(Component)]
struct UpgradeItemText {
    index: usize,
}

const ITEM_IDLE: Color = Color::srgb(0.13, 0.13, 0.13);
const ITEM_SELECTED: Color = Color::srgb(0.93, 0.93, 0.93);
const TEXT_IDLE: Color = Color::srgb(0.93, 0.93, 0.93);
const TEXT_SELECTED: Color = Color::srgb(0.07, 0.07, 0.07);

pub fn setup_upgrade_menu_systems(app: &mut App) {
    app.add_systems(OnEnter(PlayState::Upgrading), spawn_upgrade_menu)
        .add_systems(OnExit(PlayState::Upgrading), cleanup_upgrade_menu)
        .add_systems(
            Update,
            update_upgrade_menu.run_if(in_state(PlayState::Upgrading)),
        );
}

fn spawn_upgrade_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceEvenly,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.4)),
            UpgradeMenuUi,
        ))
        .with_children(|parent| {
            for index in 0..Stat::ALL.len() {
                parent
                    .spawn((
                        Node {
                            width: Val::Percent(16.0),
                            height: Val::Percent(80.0),
                            flex_direction: FlexDirection::Column,
                            justify_content: JustifyContent::SpaceBetween,
                            align_items: AlignItems::Center,
                            padding: UiRect::all(Val::Px(20.0)),
                            border: UiRect::all(Val::Px(4.0)),
                            ..default()
                        },
                        BackgroundColor(ITEM_IDLE),
                        BorderColor(Color::srgb(0.07, 0.07, 0.07)),
                        UpgradeItem { index },
                    ))
                    .with_children(|item| {
                        item.spawn((
                            Text::new(""),
                            TextFont {
                                font_size: 20.0,
                                ..default()
                            },
                            TextColor(TEXT_IDLE),
                            UpgradeItemText { index },
                        ));
                    });
            }
        });
}

fn update_upgrade_menu(
    menu: Res<UpgradeMenu>,
    player_query: Query<&PlayerStats, With<Player>>,
    mut items: Query<(&UpgradeItem, &mut BackgroundColor)>,
    mut texts: Query<(&UpgradeItemText, &mut Text, &mut TextColor)>,
) {
    let Ok(stats) = player_query.get_single() else {
        return;
    };

    for (item, mut background) in items.iter_mut() {
        background.0 = if item.index == menu.selection_index {
            ITEM_SELECTED
        } else {
            ITEM_IDLE
        };
    }

    for (item, mut text, mut color) in texts.iter_mut() {
        let Some(stat) = Stat::from_index(item.index) else {
            continue;
        };
        text.0 = format!(
            "{}\n\n{:.0} / {:.0}\n\ncost {:.0}",
            stat.name(),
            stats.stats.get(stat),
            stats.max_stats.get(stat),
            stats.upgrade_cost.get(stat)
        );
        color.0 = if item.index == menu.selection_index {
            TEXT_SELECTED
        } else {
            TEXT_IDLE
        };
    }
}

fn cleanup_upgrade_menu(mut commands: Commands, query: Query<Entity, With<UpgradeMenuUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
