//! One-shot particle effects.

use bevy::prelude::*;
use rand::Rng;

use crate::actor::{AnimationKey, Animator, Hitbox};
use crate::core::ParticleRequest;
use crate::data::{AnimationLibrary, GameConfig, PARTICLE_KIND};
use crate::world::LevelEntity;

/// Number of leaf clip variants (`leaf1` .. `leaf6`).
const LEAF_VARIANTS: usize = 6;

/// A particle effect that despawns after its last frame.
#[derive(Component)]
pub struct Particle;

/// Drawn flipped horizontally.
#[derive(Component)]
pub struct Mirrored;

/// Spawn a particle entity per request. Unknown kinds are skipped.
pub fn spawn_particles(
    mut commands: Commands,
    config: Res<GameConfig>,
    library: Res<AnimationLibrary>,
    mut requests: EventReader<ParticleRequest>,
) {
    let mut rng = rand::thread_rng();

    for request in requests.read() {
        let (kind, mirrored) = if request.kind == "leaf" {
            (
                format!("leaf{}", rng.gen_range(1..=LEAF_VARIANTS)),
                rng.gen_bool(0.5),
            )
        } else {
            (request.kind.clone(), false)
        };

        if library.frame_count(PARTICLE_KIND, &kind) == 0 {
            debug!("No particle clip for '{}'", kind);
            continue;
        }

        let mut particle = commands.spawn((
            Particle,
            Name::new(format!("Particle: {kind}")),
            Hitbox::from_center(request.position, Vec2::splat(config.tile_size)),
            Animator::new(config.animation_speed),
            AnimationKey::new(PARTICLE_KIND, kind),
            LevelEntity,
        ));
        if mirrored {
            particle.insert(Mirrored);
        }
    }
}

/// Step particle clips once; a particle is gone when its clip wraps.
pub fn animate_particles(
    mut commands: Commands,
    library: Res<AnimationLibrary>,
    mut query: Query<(Entity, &AnimationKey, &mut Animator), With<Particle>>,
) {
    for (entity, key, mut animator) in query.iter_mut() {
        if animator.advance(library.frame_count(&key.kind, &key.status)) {
            commands.entity(entity).despawn_recursive();
        }
    }
}
