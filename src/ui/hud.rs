//! In-game HUD - health, energy, experience, and the equipped weapon and spell.

use bevy::prelude::*;

use crate::core::GameState;
use crate::data::GameCatalog;
use crate::player::{Loadout, Player, PlayerStats, Progress, Vitals};

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for energy bar fill.
#[derive(Component)]
pub struct EnergyBar;

#[derive(Component)]
pub struct ExpText;

/// Weapon or spell slot; remembers which catalog entry it shows.
#[derive(Component)]
pub enum ItemSlot {
    Weapon { shown: Option<usize> },
    Magic { shown: Option<usize> },
}

const BORDER_IDLE: Color = Color::srgb(0.07, 0.07, 0.07);
const BORDER_ACTIVE: Color = Color::srgb(0.83, 0.68, 0.22);

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_bars, update_exp_text, update_item_slots).run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Bars, top-left
    commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, 200.0, Color::srgb(0.8, 0.2, 0.2), HealthBar);
            spawn_bar(parent, 140.0, Color::srgb(0.2, 0.4, 0.9), EnergyBar);
        });

    // Experience, bottom-right
    commands.spawn((
        Text::new("0"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.93, 0.93, 0.93)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(20.0),
            bottom: Val::Px(20.0),
            ..default()
        },
        BackgroundColor(Color::srgb(0.13, 0.13, 0.13)),
        ExpText,
        HudRoot,
    ));

    // Weapon and spell slots, bottom-left
    commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Row,
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                bottom: Val::Px(10.0),
                column_gap: Val::Px(10.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_slot(parent, ItemSlot::Weapon { shown: None });
            spawn_slot(parent, ItemSlot::Magic { shown: None });
        });
}

/// Helper to spawn a status bar.
fn spawn_bar<M: Component>(parent: &mut ChildBuilder, width: f32, color: Color, marker: M) {
    parent
        .spawn((
            Node {
                width: Val::Px(width),
                height: Val::Px(20.0),
                margin: UiRect::bottom(Val::Px(14.0)),
                border: UiRect::all(Val::Px(3.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.13, 0.13, 0.13)),
            BorderColor(BORDER_IDLE),
        ))
        .with_children(|bg| {
            bg.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(color),
                marker,
            ));
        });
}

fn spawn_slot(parent: &mut ChildBuilder, slot: ItemSlot) {
    parent.spawn((
        Node {
            width: Val::Px(80.0),
            height: Val::Px(80.0),
            border: UiRect::all(Val::Px(3.0)),
            ..default()
        },
        BackgroundColor(Color::srgb(0.13, 0.13, 0.13)),
        BorderColor(BORDER_IDLE),
        ImageNode::default(),
        slot,
    ));
}

fn ratio(current: f32, ceiling: f32) -> f32 {
    if ceiling <= 0.0 {
        return 0.0;
    }
    (current / ceiling).clamp(0.0, 1.0)
}

/// Bars are relative to the current stat, not its maximum.
fn update_bars(
    player_query: Query<(&Vitals, &PlayerStats), With<Player>>,
    mut health_bar: Query<&mut Node, (With<HealthBar>, Without<EnergyBar>)>,
    mut energy_bar: Query<&mut Node, (With<EnergyBar>, Without<HealthBar>)>,
) {
    let Ok((vitals, stats)) = player_query.get_single() else {
        return;
    };
    if let Ok(mut bar) = health_bar.get_single_mut() {
        bar.width = Val::Percent(ratio(vitals.health, stats.stats.health) * 100.0);
    }
    if let Ok(mut bar) = energy_bar.get_single_mut() {
        bar.width = Val::Percent(ratio(vitals.energy, stats.stats.energy) * 100.0);
    }
}

fn update_exp_text(
    player_query: Query<&Progress, (With<Player>, Changed<Progress>)>,
    mut text_query: Query<&mut Text, With<ExpText>>,
) {
    let Ok(progress) = player_query.get_single() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };
    text.0 = format!("{}", progress.exp as i64);
}

/// Show the equipped graphics; the border lights up while a switch is debounced.
fn update_item_slots(
    asset_server: Res<AssetServer>,
    catalog: Res<GameCatalog>,
    player_query: Query<&Loadout, With<Player>>,
    mut slots: Query<(&mut ItemSlot, &mut ImageNode, &mut BorderColor)>,
) {
    let Ok(loadout) = player_query.get_single() else {
        return;
    };

    for (mut slot, mut image, mut border) in slots.iter_mut() {
        let (shown, index, switching, graphic) = match &mut *slot {
            ItemSlot::Weapon { shown } => (
                shown,
                loadout.weapon_index,
                loadout.weapon_switch.is_running(),
                catalog.weapon(loadout.weapon_index).map(|w| w.graphic.clone()),
            ),
            ItemSlot::Magic { shown } => (
                shown,
                loadout.magic_index,
                loadout.magic_switch.is_running(),
                catalog.spell(loadout.magic_index).map(|s| s.graphic.clone()),
            ),
        };

        if *shown != Some(index) {
            if let Ok(graphic) = graphic {
                image.image = asset_server.load(graphic);
            }
            *shown = Some(index);
        }
        border.0 = if switching { BORDER_ACTIVE } else { BORDER_IDLE };
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
