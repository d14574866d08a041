//! Headless integration tests for FlowerPower.
//!
//! These tests run the real simulation plugins without a window, GPU, or
//! audio. The clock is manual, so every tick happens at a time the test
//! chooses, and keyboard state is pressed and released by hand.
//!
//! Run with: `cargo test --test headless`

use bevy::ecs::world::CommandQueue;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use flowerpower::actor::{Animator, AnimationKey, Attackable, Breakable, Hitbox, Obstacle};
use flowerpower::combat::{AttackHitbox, CombatTimers};
use flowerpower::core::*;
use flowerpower::data::*;
use flowerpower::enemies::{spawn_enemy, Enemy, EnemyCombat, EnemyHealth, EnemyStatus};
use flowerpower::player::*;
use flowerpower::progression::UpgradeMenu;
use flowerpower::world::WorldPlugin;
use flowerpower::SimulationPlugin;

const START_MS: u64 = 1_000;
const FRAME_MS: u64 = 16;

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the simulation emitted, collected at the end of each update.
#[derive(Resource, Default)]
struct EventLog {
    damage: Vec<DamageEvent>,
    deaths: Vec<EntityDied>,
    particles: Vec<ParticleRequest>,
    attacks_ended: usize,
}

fn record_events(
    mut log: ResMut<EventLog>,
    mut damage: EventReader<DamageEvent>,
    mut deaths: EventReader<EntityDied>,
    mut particles: EventReader<ParticleRequest>,
    mut ended: EventReader<AttackEnded>,
) {
    log.damage.extend(damage.read().cloned());
    log.deaths.extend(deaths.read().cloned());
    log.particles.extend(particles.read().cloned());
    log.attacks_ended += ended.read().count();
}

/// A monster that stands still and never notices anyone unless a test
/// changes its radii.
fn dummy() -> MonsterDef {
    MonsterDef {
        health: 50.0,
        exp: 75.0,
        gold: 3,
        damage: 10.0,
        attack_type: "claw".to_string(),
        attack_sound: "claw".to_string(),
        speed: 0.0,
        resistance: 3.0,
        attack_radius: 0.0,
        notice_radius: 0.0,
    }
}

fn test_catalog() -> GameCatalog {
    let mut catalog = GameCatalog::default();
    catalog.monsters.insert("dummy".to_string(), dummy());
    catalog
}

/// Builds a headless app with the simulation plugins and the given data.
fn build_test_app(config: GameConfig, catalog: GameCatalog) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);

    app.insert_resource(AnimationLibrary::builtin(&catalog))
        .insert_resource(config)
        .insert_resource(catalog)
        .init_resource::<ButtonInput<KeyCode>>();

    app.add_plugins(SimulationPlugin);
    app.insert_resource(GameClock::manual(START_MS));

    app.init_resource::<EventLog>()
        .add_systems(Last, record_events);

    app
}

/// Transitions the test app to InGame and ticks once to process it.
fn enter_game(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}

fn default_app() -> App {
    let mut app = build_test_app(GameConfig::default(), test_catalog());
    enter_game(&mut app);
    app
}

/// Advance the manual clock and run one update.
fn tick(app: &mut App, delta_ms: u64) {
    app.world_mut().resource_mut::<GameClock>().advance(delta_ms);
    app.update();
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
}

fn spawn_test_player(app: &mut App, top_left: Vec2) -> Entity {
    let catalog = app.world().resource::<GameCatalog>().clone();
    let config = app.world().resource::<GameConfig>().clone();
    let mut queue = CommandQueue::default();
    let entity = {
        let mut commands = Commands::new(&mut queue, app.world());
        spawn_player(&mut commands, top_left, &catalog, &config)
    };
    queue.apply(app.world_mut());
    entity
}

fn spawn_test_enemy(app: &mut App, name: &str, top_left: Vec2) -> Entity {
    let config = app.world().resource::<GameConfig>().clone();
    let def = app
        .world()
        .resource::<GameCatalog>()
        .monster(name)
        .cloned()
        .expect("monster in test catalog");
    let mut queue = CommandQueue::default();
    let entity = {
        let mut commands = Commands::new(&mut queue, app.world());
        spawn_enemy(&mut commands, name, &def, top_left, &config)
    };
    queue.apply(app.world_mut());
    entity
}

fn face(app: &mut App, player: Entity, facing: Facing) {
    app.world_mut()
        .get_mut::<PlayerStatus>(player)
        .unwrap()
        .facing = facing;
}

fn count<C: Component>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, With<C>>();
    query.iter(app.world()).count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_boot_loads_data_and_builds_level() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(StatesPlugin)
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins(SimulationPlugin)
        .add_plugins(DataPlugin)
        .add_plugins(WorldPlugin);

    // First update loads data and levels; second applies the transition.
    app.update();
    app.update();

    assert_eq!(
        app.world().resource::<State<GameState>>().get(),
        &GameState::InGame,
        "Expected to reach InGame after loading data"
    );
    assert!(app.world().contains_resource::<GameCatalog>());
    assert_eq!(count::<Player>(&mut app), 1);
    assert!(count::<Enemy>(&mut app) > 0);
    assert!(count::<Obstacle>(&mut app) > 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Enemy behavior
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_enemy_in_attack_radius_attacks_and_restarts_animation() {
    let mut catalog = test_catalog();
    catalog.monsters.insert(
        "dummy".to_string(),
        MonsterDef {
            attack_radius: 8.0,
            notice_radius: 20.0,
            ..dummy()
        },
    );
    let mut app = build_test_app(GameConfig::default(), catalog);
    enter_game(&mut app);

    spawn_test_player(&mut app, Vec2::ZERO);
    // Hitbox centers end up 5 px apart
    let enemy = spawn_test_enemy(&mut app, "dummy", Vec2::new(5.0, 0.0));
    app.world_mut().get_mut::<Animator>(enemy).unwrap().frame_index = 2.0;

    tick(&mut app, FRAME_MS);

    let world = app.world();
    assert_eq!(world.get::<EnemyStatus>(enemy), Some(&EnemyStatus::Attack));
    assert_eq!(world.get::<Animator>(enemy).unwrap().frame_index, 0.0);
    assert_eq!(world.get::<AnimationKey>(enemy).unwrap().status, "attack");
}

#[test]
fn test_enemy_notices_then_chases() {
    let mut catalog = test_catalog();
    catalog.monsters.insert(
        "dummy".to_string(),
        MonsterDef {
            speed: 2.0,
            attack_radius: 10.0,
            notice_radius: 300.0,
            ..dummy()
        },
    );
    let mut app = build_test_app(GameConfig::default(), catalog);
    enter_game(&mut app);

    spawn_test_player(&mut app, Vec2::ZERO);
    let enemy = spawn_test_enemy(&mut app, "dummy", Vec2::new(200.0, 0.0));
    let start = app.world().get::<Hitbox>(enemy).unwrap().left;

    tick(&mut app, FRAME_MS);
    assert_eq!(app.world().get::<EnemyStatus>(enemy), Some(&EnemyStatus::Move));

    tick(&mut app, FRAME_MS);
    let left = app.world().get::<Hitbox>(enemy).unwrap().left;
    assert!((start - left - 2.0).abs() < 1e-4, "moved {} toward the player", start - left);
}

/// A dummy standing 40 px from the player, close enough to strike.
fn striking_dummy_app(policy: EnemyHitPolicy) -> (App, Entity) {
    let mut config = GameConfig::default();
    config.enemy.hit_policy = policy;
    let mut catalog = test_catalog();
    catalog.monsters.insert(
        "dummy".to_string(),
        MonsterDef {
            attack_radius: 100.0,
            notice_radius: 200.0,
            ..dummy()
        },
    );
    let mut app = build_test_app(config, catalog);
    enter_game(&mut app);

    spawn_test_player(&mut app, Vec2::ZERO);
    let enemy = spawn_test_enemy(&mut app, "dummy", Vec2::new(40.0, 0.0));
    (app, enemy)
}

fn hits_from(app: &App, enemy: Entity) -> usize {
    app.world()
        .resource::<EventLog>()
        .damage
        .iter()
        .filter(|event| event.source == enemy)
        .count()
}

fn enemy_hits_over_ten_ticks(policy: EnemyHitPolicy) -> usize {
    let (mut app, enemy) = striking_dummy_app(policy);
    for _ in 0..10 {
        tick(&mut app, FRAME_MS);
    }
    hits_from(&app, enemy)
}

#[test]
fn test_enemy_hits_once_per_swing_by_default() {
    assert_eq!(enemy_hits_over_ten_ticks(EnemyHitPolicy::OncePerSwing), 1);
}

#[test]
fn test_enemy_hits_every_tick_when_configured() {
    assert_eq!(enemy_hits_over_ten_ticks(EnemyHitPolicy::EveryTick), 10);
}

#[test]
fn test_enemy_recharges_between_swings() {
    let (mut app, enemy) = striking_dummy_app(EnemyHitPolicy::OncePerSwing);
    let recharge = app.world().resource::<GameConfig>().enemy.attack_cooldown_ms;

    // (tick time, status, last attack stamp) after every tick
    let mut history = Vec::new();
    for _ in 0..60 {
        tick(&mut app, FRAME_MS);
        let now = app.world().resource::<GameClock>().now();
        let status = *app.world().get::<EnemyStatus>(enemy).unwrap();
        let stamp = app.world().get::<EnemyCombat>(enemy).unwrap().attack_time;
        history.push((now, status, stamp));
    }

    assert_eq!(history[0].1, EnemyStatus::Attack);

    // The clip wraps and the enemy falls back to chasing
    let left = history
        .iter()
        .position(|(_, status, _)| *status != EnemyStatus::Attack)
        .expect("enemy never finished its swing");
    assert_eq!(history[left].1, EnemyStatus::Move);
    let last_swing = history[left].2;

    // It strikes again on the first tick the recharge has elapsed
    let back = left
        + history[left..]
            .iter()
            .position(|(_, status, _)| *status == EnemyStatus::Attack)
            .expect("enemy never attacked again");
    let (returned_at, _, _) = history[back];
    let (before, _, _) = history[back - 1];
    assert!(returned_at - last_swing >= recharge);
    assert!(before - last_swing < recharge);

    assert_eq!(hits_from(&app, enemy), 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Player combat
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_weapon_kill_pays_experience_and_removes_enemy() {
    let mut catalog = test_catalog();
    catalog.weapons[0] = WeaponDef {
        name: "stick".to_string(),
        cooldown_ms: 100,
        damage: 5.0,
        size: (40.0, 24.0),
        graphic: String::new(),
    };
    let mut app = build_test_app(GameConfig::default(), catalog);
    enter_game(&mut app);

    let player = spawn_test_player(&mut app, Vec2::ZERO);
    let enemy = spawn_test_enemy(&mut app, "dummy", Vec2::new(64.0, 0.0));
    face(&mut app, player, Facing::Right);

    // attack 10 + stick 5
    press(&mut app, KeyCode::Space);
    tick(&mut app, FRAME_MS);
    release(&mut app, KeyCode::Space);
    assert_eq!(app.world().get::<EnemyHealth>(enemy).unwrap().0, 35.0);

    // Let the swing end and the invincibility lapse
    tick(&mut app, 600);
    assert_eq!(count::<AttackHitbox>(&mut app), 0);
    assert_eq!(app.world().get::<EnemyHealth>(enemy).unwrap().0, 35.0);

    app.world_mut().send_event(DamageEvent {
        target: enemy,
        source: player,
        amount: 35.0,
        attack_type: "weapon".to_string(),
        origin: Vec2::new(32.0, 32.0),
    });
    tick(&mut app, FRAME_MS);
    tick(&mut app, FRAME_MS);

    assert_eq!(count::<Enemy>(&mut app), 0);
    let progress = app.world().get::<Progress>(player).unwrap();
    assert_eq!(progress.exp, 75.0);
    assert_eq!(progress.gold, 3);

    let log = app.world().resource::<EventLog>();
    assert_eq!(log.deaths.len(), 1);
    assert_eq!(log.deaths[0].killed_by, Some(player));
    assert!(log.particles.iter().any(|p| p.kind == "dummy"));
}

#[test]
fn test_knockback_moves_at_enemy_speed() {
    let mut catalog = test_catalog();
    catalog.monsters.insert(
        "dummy".to_string(),
        MonsterDef {
            speed: 2.0,
            resistance: 3.0,
            ..dummy()
        },
    );
    let mut app = build_test_app(GameConfig::default(), catalog);
    enter_game(&mut app);

    let player = spawn_test_player(&mut app, Vec2::ZERO);
    let enemy = spawn_test_enemy(&mut app, "dummy", Vec2::new(64.0, 0.0));
    face(&mut app, player, Facing::Right);

    press(&mut app, KeyCode::Space);
    tick(&mut app, FRAME_MS);
    release(&mut app, KeyCode::Space);
    let before = app.world().get::<Hitbox>(enemy).unwrap().left;

    tick(&mut app, FRAME_MS);
    let after = app.world().get::<Hitbox>(enemy).unwrap().left;
    assert!((after - before - 2.0).abs() < 1e-4, "pushed {}", after - before);
}

#[test]
fn test_attack_window_closes_and_removes_weapon() {
    let mut app = default_app();
    let player = spawn_test_player(&mut app, Vec2::ZERO);

    press(&mut app, KeyCode::Space);
    press(&mut app, KeyCode::ArrowRight);
    tick(&mut app, 0);
    release(&mut app, KeyCode::Space);

    assert_eq!(count::<AttackHitbox>(&mut app), 1);
    assert_eq!(
        app.world().get::<AnimationKey>(player).unwrap().status,
        "right_attack"
    );
    let start_left = app.world().get::<Hitbox>(player).unwrap().left;

    // sword: 400 base + 100 weapon
    tick(&mut app, 499);
    assert_eq!(count::<AttackHitbox>(&mut app), 1);
    assert_eq!(app.world().get::<Hitbox>(player).unwrap().left, start_left);

    tick(&mut app, 1);
    assert_eq!(count::<AttackHitbox>(&mut app), 0);
    assert_eq!(app.world().resource::<EventLog>().attacks_ended, 1);
}

#[test]
fn test_weapon_breaks_grass_into_leaves() {
    let mut app = default_app();
    let player = spawn_test_player(&mut app, Vec2::ZERO);
    face(&mut app, player, Facing::Right);

    let grass_box = Hitbox::new(64.0, 5.0, 64.0, 54.0);
    let grass = app
        .world_mut()
        .spawn((Obstacle, Attackable, Breakable, grass_box))
        .id();

    press(&mut app, KeyCode::Space);
    tick(&mut app, FRAME_MS);

    assert!(app.world().get::<Hitbox>(grass).is_none());
    let leaves: Vec<_> = app
        .world()
        .resource::<EventLog>()
        .particles
        .iter()
        .filter(|p| p.kind == "leaf")
        .collect();
    assert!((3..=6).contains(&leaves.len()), "{} leaves", leaves.len());
    let expected = grass_box.center() - Vec2::new(0.0, 50.0);
    assert!(leaves.iter().all(|leaf| leaf.position == expected));
}

#[test]
fn test_player_stops_at_boundary() {
    let mut app = default_app();
    let player = spawn_test_player(&mut app, Vec2::new(64.0, 0.0));
    let wall = Hitbox::new(128.0, 0.0, 64.0, 64.0);
    app.world_mut().spawn((Obstacle, wall));

    press(&mut app, KeyCode::ArrowRight);
    tick(&mut app, FRAME_MS);

    let hitbox = *app.world().get::<Hitbox>(player).unwrap();
    assert_eq!(hitbox.right(), 128.0);
    assert!(!hitbox.overlaps(&wall));
}

// ─────────────────────────────────────────────────────────────────────────────
// Spells
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_spell_without_energy_does_nothing() {
    let mut catalog = test_catalog();
    catalog.spells[0].cost = 15.0;
    let mut app = build_test_app(GameConfig::default(), catalog);
    enter_game(&mut app);

    let player = spawn_test_player(&mut app, Vec2::ZERO);
    {
        let mut entity = app.world_mut().entity_mut(player);
        entity.get_mut::<Vitals>().unwrap().energy = 10.0;
        // No regeneration during the tick
        entity.get_mut::<PlayerStats>().unwrap().stats.magic = 0.0;
    }

    press(&mut app, KeyCode::ControlLeft);
    tick(&mut app, FRAME_MS);

    let vitals = app.world().get::<Vitals>(player).unwrap();
    assert_eq!(vitals.energy, 10.0);
    assert_eq!(vitals.health, 100.0);
    assert_eq!(count::<AttackHitbox>(&mut app), 0);
    assert!(app.world().resource::<EventLog>().particles.is_empty());
}

#[test]
fn test_flame_spends_energy_and_spawns_five_hitboxes() {
    let mut app = default_app();
    let player = spawn_test_player(&mut app, Vec2::ZERO);

    press(&mut app, KeyCode::ControlLeft);
    tick(&mut app, FRAME_MS);

    assert_eq!(app.world().get::<Vitals>(player).unwrap().energy, 40.0);
    assert_eq!(count::<AttackHitbox>(&mut app), 5);
}

#[test]
fn test_heal_clamps_at_health_stat() {
    let mut app = default_app();
    let player = spawn_test_player(&mut app, Vec2::ZERO);
    {
        let mut entity = app.world_mut().entity_mut(player);
        entity.get_mut::<Vitals>().unwrap().health = 95.0;
        entity.get_mut::<Loadout>().unwrap().magic_index = 1;
    }

    press(&mut app, KeyCode::ControlLeft);
    tick(&mut app, FRAME_MS);

    let vitals = app.world().get::<Vitals>(player).unwrap();
    assert_eq!(vitals.health, 100.0);
    assert_eq!(vitals.energy, 50.0);

    let center = app.world().get::<Hitbox>(player).unwrap().center();
    let heal = app
        .world()
        .resource::<EventLog>()
        .particles
        .iter()
        .find(|p| p.kind == "heal")
        .expect("heal particle");
    assert_eq!(heal.position, center - Vec2::new(0.0, 65.0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Player state
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_held_switch_key_advances_weapon_once() {
    let mut app = default_app();
    let player = spawn_test_player(&mut app, Vec2::ZERO);

    press(&mut app, KeyCode::KeyQ);
    for _ in 0..5 {
        tick(&mut app, FRAME_MS);
    }

    assert_eq!(app.world().get::<Loadout>(player).unwrap().weapon_index, 1);
}

#[test]
fn test_invulnerable_player_ignores_damage() {
    let mut app = default_app();
    let player = spawn_test_player(&mut app, Vec2::ZERO);
    app.world_mut()
        .get_mut::<CombatTimers>(player)
        .unwrap()
        .invulnerability
        .start(START_MS, 500);

    app.world_mut().send_event(DamageEvent {
        target: player,
        source: player,
        amount: 20.0,
        attack_type: "claw".to_string(),
        origin: Vec2::ZERO,
    });
    tick(&mut app, FRAME_MS);

    assert_eq!(app.world().get::<Vitals>(player).unwrap().health, 100.0);
    assert!(!app.world().get::<CombatTimers>(player).unwrap().vulnerable());
}

#[test]
fn test_invulnerability_lapses_and_next_hit_lands() {
    let mut app = default_app();
    let player = spawn_test_player(&mut app, Vec2::ZERO);
    let hit = |amount: f32| DamageEvent {
        target: player,
        source: player,
        amount,
        attack_type: "claw".to_string(),
        origin: Vec2::ZERO,
    };

    app.world_mut().send_event(hit(20.0));
    tick(&mut app, FRAME_MS);
    assert_eq!(app.world().get::<Vitals>(player).unwrap().health, 80.0);

    // Still inside the window
    app.world_mut().send_event(hit(20.0));
    tick(&mut app, FRAME_MS);
    assert_eq!(app.world().get::<Vitals>(player).unwrap().health, 80.0);

    // 500 ms after the first hit
    app.world_mut().send_event(hit(20.0));
    tick(&mut app, 500 - FRAME_MS);
    assert_eq!(app.world().get::<Vitals>(player).unwrap().health, 60.0);
}

#[test]
fn test_energy_regenerates_up_to_its_stat() {
    let mut app = default_app();
    let player = spawn_test_player(&mut app, Vec2::ZERO);

    // magic 4 * 0.01 per tick
    app.world_mut().get_mut::<Vitals>(player).unwrap().energy = 30.0;
    tick(&mut app, FRAME_MS);
    let energy = app.world().get::<Vitals>(player).unwrap().energy;
    assert!((energy - 30.04).abs() < 1e-4, "energy {energy}");
    tick(&mut app, FRAME_MS);
    let energy = app.world().get::<Vitals>(player).unwrap().energy;
    assert!((energy - 30.08).abs() < 1e-4, "energy {energy}");

    app.world_mut().get_mut::<Vitals>(player).unwrap().energy = 59.99;
    tick(&mut app, FRAME_MS);
    assert_eq!(app.world().get::<Vitals>(player).unwrap().energy, 60.0);
    tick(&mut app, FRAME_MS);
    assert_eq!(app.world().get::<Vitals>(player).unwrap().energy, 60.0);
}

#[test]
fn test_player_death_ends_the_game() {
    let mut catalog = test_catalog();
    catalog.monsters.insert(
        "dummy".to_string(),
        MonsterDef {
            attack_radius: 100.0,
            notice_radius: 200.0,
            ..dummy()
        },
    );
    let mut app = build_test_app(GameConfig::default(), catalog);
    enter_game(&mut app);

    let player = spawn_test_player(&mut app, Vec2::ZERO);
    app.world_mut().get_mut::<Vitals>(player).unwrap().health = 5.0;
    spawn_test_enemy(&mut app, "dummy", Vec2::new(40.0, 0.0));

    tick(&mut app, FRAME_MS);
    tick(&mut app, FRAME_MS);

    assert_eq!(
        app.world().resource::<State<GameState>>().get(),
        &GameState::GameOver
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Upgrades
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_upgrade_menu_buys_selected_stat() {
    let mut app = default_app();
    let player = spawn_test_player(&mut app, Vec2::ZERO);
    app.world_mut().get_mut::<Progress>(player).unwrap().exp = 150.0;

    app.world_mut()
        .resource_mut::<NextState<PlayState>>()
        .set(PlayState::Upgrading);
    app.update();
    app.world_mut().resource_mut::<UpgradeMenu>().selection_index = 4;

    press(&mut app, KeyCode::Space);
    tick(&mut app, FRAME_MS);
    tick(&mut app, FRAME_MS);

    let progress = app.world().get::<Progress>(player).unwrap();
    assert_eq!(progress.exp, 50.0);
    let stats = app.world().get::<PlayerStats>(player).unwrap();
    assert!((stats.stats.speed - 6.0).abs() < 1e-4);
    assert!((stats.upgrade_cost.speed - 140.0).abs() < 1e-4);
}
