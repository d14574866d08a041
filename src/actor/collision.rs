//! Box-vs-box movement resolved one axis at a time.

use bevy::prelude::*;

use super::components::{Hitbox, Motion, Obstacle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Push `hitbox` out of every obstacle it overlaps along `axis`.
///
/// The moving edge snaps to the obstacle's facing edge according to the sign
/// of the movement on that axis. Obstacles are handled in order, so when they
/// overlap each other the last one wins.
pub fn resolve_collisions(hitbox: &mut Hitbox, direction: Vec2, axis: Axis, obstacles: &[Hitbox]) {
    for obstacle in obstacles {
        if !obstacle.overlaps(hitbox) {
            continue;
        }
        match axis {
            Axis::Horizontal => {
                if direction.x > 0.0 {
                    hitbox.set_right(obstacle.left);
                }
                if direction.x < 0.0 {
                    hitbox.left = obstacle.right();
                }
            }
            Axis::Vertical => {
                if direction.y > 0.0 {
                    hitbox.set_bottom(obstacle.top);
                }
                if direction.y < 0.0 {
                    hitbox.top = obstacle.bottom();
                }
            }
        }
    }
}

/// Move an actor by `speed` along its (normalized) direction, x then y.
pub fn move_actor(hitbox: &mut Hitbox, motion: &mut Motion, obstacles: &[Hitbox]) {
    motion.direction = motion.direction.normalize_or_zero();

    hitbox.left += motion.direction.x * motion.speed;
    resolve_collisions(hitbox, motion.direction, Axis::Horizontal, obstacles);
    hitbox.top += motion.direction.y * motion.speed;
    resolve_collisions(hitbox, motion.direction, Axis::Vertical, obstacles);
}

/// Move every actor tagged `T` against the obstacle set.
pub fn move_actors<T: Component>(
    mut movers: Query<(&mut Hitbox, &mut Motion), With<T>>,
    obstacles: Query<&Hitbox, (With<Obstacle>, Without<Motion>)>,
) {
    let obstacles: Vec<Hitbox> = obstacles.iter().copied().collect();
    for (mut hitbox, mut motion) in movers.iter_mut() {
        move_actor(&mut hitbox, &mut motion, &obstacles);
    }
}
