//! Effects module - particle effects and sound.

mod audio;
mod particles;
mod plugin;

pub use audio::SoundLibrary;
pub use particles::{Mirrored, Particle};
pub use plugin::{ParticlePlugin, SoundPlugin};
