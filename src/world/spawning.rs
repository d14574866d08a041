//! Entity spawning for level construction.

use bevy::prelude::*;
use rand::seq::SliceRandom;

use super::data::{LevelDefinition, Placement, TileKind};
use crate::actor::{Attackable, Breakable, Hitbox, Obstacle, SpriteImage};
use crate::data::{GameCatalog, GameConfig};
use crate::enemies::spawn_enemy;
use crate::player::spawn_player;

/// Marks everything that belongs to the loaded level.
#[derive(Component)]
pub struct LevelEntity;

/// Vertical shrink from tile sprite to hitbox, per tile kind.
const BOUNDARY_INSET: f32 = 0.0;
const GRASS_INSET: f32 = 10.0;
const OBJECT_INSET: f32 = 40.0;

const GRASS_GRAPHICS: [&str; 3] = [
    "graphics/grass/grass_1.png",
    "graphics/grass/grass_2.png",
    "graphics/grass/grass_3.png",
];

fn tile_hitbox(top_left: Vec2, size: Vec2, inset: f32) -> Hitbox {
    Hitbox::from_sprite_rect(
        Hitbox::new(top_left.x, top_left.y, size.x, size.y),
        Vec2::new(0.0, inset),
    )
}

/// Spawn every placement of a level. Returns the player entity, if any.
pub fn spawn_placements(
    commands: &mut Commands,
    placements: &[Placement],
    catalog: &GameCatalog,
    config: &GameConfig,
) -> Option<Entity> {
    let tile = config.tile_size;
    let mut rng = rand::thread_rng();
    let mut player = None;

    for placement in placements {
        let top_left = LevelDefinition::grid_to_world(placement.grid, tile);

        match &placement.kind {
            TileKind::Boundary => {
                commands.spawn((
                    Obstacle,
                    tile_hitbox(top_left, Vec2::splat(tile), BOUNDARY_INSET),
                    LevelEntity,
                ));
            }
            TileKind::Grass => {
                let graphic = GRASS_GRAPHICS.choose(&mut rng).copied().unwrap_or_default();
                commands.spawn((
                    Name::new("Grass"),
                    Obstacle,
                    Attackable,
                    Breakable,
                    tile_hitbox(top_left, Vec2::splat(tile), GRASS_INSET),
                    SpriteImage(graphic.to_string()),
                    LevelEntity,
                ));
            }
            TileKind::Object(graphic) => {
                // Objects stand on their cell and reach one tile above it
                let sprite_top_left = top_left - Vec2::new(0.0, tile);
                commands.spawn((
                    Name::new("Object"),
                    Obstacle,
                    tile_hitbox(sprite_top_left, Vec2::new(tile, tile * 2.0), OBJECT_INSET),
                    SpriteImage(graphic.clone()),
                    LevelEntity,
                ));
            }
            TileKind::Player => {
                let entity = spawn_player(commands, top_left, catalog, config);
                commands.entity(entity).insert(LevelEntity);
                player = Some(entity);
            }
            TileKind::Monster(name) => match catalog.monster(name) {
                Ok(def) => {
                    let entity = spawn_enemy(commands, name, def, top_left, config);
                    commands.entity(entity).insert(LevelEntity);
                }
                Err(e) => warn!("Skipping placement at {:?}: {}", placement.grid, e),
            },
        }
    }

    player
}
