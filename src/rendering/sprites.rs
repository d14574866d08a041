//! Sprite presentation of hitbox-positioned entities.
//!
//! The simulation works in screen space with +y down. Bevy's 2D world has +y
//! up, so every translation written here flips y.

use bevy::prelude::*;
use std::path::Path;

use super::visual_config::VisualConfig;
use crate::actor::{AnimationKey, Animator, Hitbox, SpriteImage};
use crate::data::AnimationLibrary;
use crate::effects::Mirrored;
use crate::player::Player;
use crate::world::LevelEntity;

/// Marker for the main 2D camera.
#[derive(Component)]
pub struct GameCamera;

/// Marker for the ground image.
#[derive(Component)]
pub struct Ground;

const GROUND_DEPTH: f32 = 0.0;
const SPRITE_DEPTH: f32 = 1.0;

pub fn screen_to_world(position: Vec2) -> Vec2 {
    Vec2::new(position.x, -position.y)
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, GameCamera));
}

pub fn spawn_ground(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    visual_config: Res<VisualConfig>,
) {
    commands.spawn((
        Ground,
        Sprite {
            image: asset_server.load(visual_config.ground_graphic.clone()),
            anchor: bevy::sprite::Anchor::TopLeft,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, GROUND_DEPTH),
        LevelEntity,
    ));
}

/// Give a sprite to everything that has something to draw.
pub fn attach_sprites(
    mut commands: Commands,
    query: Query<
        Entity,
        (
            Added<Hitbox>,
            Without<Sprite>,
            Or<(With<AnimationKey>, With<SpriteImage>)>,
        ),
    >,
) {
    for entity in query.iter() {
        commands
            .entity(entity)
            .insert((Sprite::default(), Transform::default(), Visibility::default()));
    }
}

fn shows(sprite: &Sprite, path: &str) -> bool {
    sprite
        .image
        .path()
        .is_some_and(|shown| shown.path() == Path::new(path))
}

/// Place sprites on their hitbox centers, y-sorted, showing the current frame.
#[allow(clippy::type_complexity)]
pub fn sync_sprites(
    asset_server: Res<AssetServer>,
    library: Res<AnimationLibrary>,
    visual_config: Res<VisualConfig>,
    mut query: Query<(
        &Hitbox,
        &mut Transform,
        &mut Sprite,
        Option<&AnimationKey>,
        Option<&Animator>,
        Option<&SpriteImage>,
        Has<Mirrored>,
    )>,
) {
    for (hitbox, mut transform, mut sprite, key, animator, image, mirrored) in query.iter_mut() {
        let center = screen_to_world(hitbox.center());
        let depth = SPRITE_DEPTH + hitbox.center().y * visual_config.y_sort_scale;
        transform.translation = center.extend(depth);

        let path = match (key, image) {
            (Some(key), _) => {
                let count = library.frame_count(&key.kind, &key.status);
                let frame = animator.map_or(0, Animator::frame);
                library.frame(&key.kind, &key.status, frame % count.max(1))
            }
            (None, Some(image)) => Some(image.0.as_str()),
            (None, None) => None,
        };
        if let Some(path) = path {
            if !shows(&sprite, path) {
                sprite.image = asset_server.load(path.to_string());
            }
        }

        let alpha = animator.map_or(1.0, |animator| animator.alpha);
        sprite.color = Color::srgba(1.0, 1.0, 1.0, alpha);
        sprite.flip_x = mirrored;
    }
}

/// Keep the camera centered on the player.
pub fn follow_player(
    player_query: Query<&Hitbox, With<Player>>,
    mut camera_query: Query<&mut Transform, With<GameCamera>>,
) {
    let Ok(hitbox) = player_query.get_single() else {
        return;
    };
    let Ok(mut camera) = camera_query.get_single_mut() else {
        return;
    };
    let center = screen_to_world(hitbox.center());
    camera.translation.x = center.x;
    camera.translation.y = center.y;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_y_is_flipped() {
        assert_eq!(screen_to_world(Vec2::new(10.0, 20.0)), Vec2::new(10.0, -20.0));
    }
}
