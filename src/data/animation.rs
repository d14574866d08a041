//! Animation frame library.
//!
//! Maps an entity kind ("player", a monster name, "particles") to its clips,
//! and each clip (a status tag such as `down_idle` or `attack`) to an ordered
//! list of frame image paths. The simulation only ever asks for clip lengths;
//! rendering resolves the paths.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

use super::catalog::GameCatalog;
use super::error::CatalogError;

/// Kind key used for the player's clips.
pub const PLAYER_KIND: &str = "player";
/// Kind key used for particle effect clips.
pub const PARTICLE_KIND: &str = "particles";

/// Every status tag the player can be in.
pub const PLAYER_STATUSES: [&str; 12] = [
    "up", "down", "left", "right",
    "up_idle", "down_idle", "left_idle", "right_idle",
    "up_attack", "down_attack", "left_attack", "right_attack",
];

/// Every status tag an enemy can be in.
pub const ENEMY_STATUSES: [&str; 3] = ["idle", "move", "attack"];

/// Particle key -> (graphics folder, frame count)
const PARTICLES: [(&str, &str, usize); 18] = [
    ("flame", "flame/frames", 12),
    ("aura", "aura", 4),
    ("heal", "heal/frames", 5),
    ("claw", "claw", 4),
    ("slash", "slash", 4),
    ("sparkle", "sparkle", 4),
    ("leaf_attack", "leaf_attack", 7),
    ("thunder", "thunder", 8),
    ("squid", "smoke_orange", 6),
    ("raccoon", "raccoon", 6),
    ("spirit", "nova", 6),
    ("bamboo", "bamboo", 6),
    ("leaf1", "leaf1", 12),
    ("leaf2", "leaf2", 12),
    ("leaf3", "leaf3", 12),
    ("leaf4", "leaf4", 12),
    ("leaf5", "leaf5", 12),
    ("leaf6", "leaf6", 12),
];

/// Clips for one entity kind.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct AnimationSet {
    pub clips: HashMap<String, Vec<String>>,
}

/// All animation clips, keyed by entity kind.
#[derive(Resource, Deserialize, Clone, Debug, Default)]
pub struct AnimationLibrary {
    pub sets: HashMap<String, AnimationSet>,
}

impl AnimationLibrary {
    /// Number of frames in a clip, or 0 when the clip does not exist.
    pub fn frame_count(&self, kind: &str, status: &str) -> usize {
        self.clip(kind, status).map_or(0, |frames| frames.len())
    }

    /// Frame paths of a clip.
    pub fn clip(&self, kind: &str, status: &str) -> Option<&[String]> {
        self.sets
            .get(kind)
            .and_then(|set| set.clips.get(status))
            .map(Vec::as_slice)
    }

    /// Path of one frame, if the clip and index exist.
    pub fn frame(&self, kind: &str, status: &str, index: usize) -> Option<&str> {
        self.clip(kind, status)
            .and_then(|frames| frames.get(index))
            .map(String::as_str)
    }

    /// Add (or replace) a clip.
    pub fn with_clip(mut self, kind: &str, status: &str, frames: Vec<String>) -> Self {
        self.sets
            .entry(kind.to_string())
            .or_default()
            .clips
            .insert(status.to_string(), frames);
        self
    }

    /// Add a clip with `count` numbered frames under `folder`.
    pub fn with_numbered_clip(self, kind: &str, status: &str, folder: &str, count: usize) -> Self {
        let frames = (0..count).map(|i| format!("{folder}/{i}.png")).collect();
        self.with_clip(kind, status, frames)
    }

    /// The conventional `graphics/` layout for everything in the catalog.
    pub fn builtin(catalog: &GameCatalog) -> Self {
        let mut library = Self::default();

        for status in PLAYER_STATUSES {
            library = library.with_numbered_clip(
                PLAYER_KIND,
                status,
                &format!("graphics/player/{status}"),
                4,
            );
        }

        for name in catalog.monsters.keys() {
            for status in ENEMY_STATUSES {
                library = library.with_numbered_clip(
                    name,
                    status,
                    &format!("graphics/monsters/{name}/{status}"),
                    4,
                );
            }
        }

        for (key, folder, count) in PARTICLES {
            library = library.with_numbered_clip(
                PARTICLE_KIND,
                key,
                &format!("graphics/particles/{folder}"),
                count,
            );
        }

        library
    }

    /// Every clip the player and the catalog's monsters can enter must exist
    /// and have at least one frame.
    pub fn validate(&self, catalog: &GameCatalog) -> Result<(), CatalogError> {
        let required = PLAYER_STATUSES
            .iter()
            .map(|status| (PLAYER_KIND, *status))
            .chain(catalog.monsters.keys().flat_map(|name| {
                ENEMY_STATUSES
                    .iter()
                    .map(move |status| (name.as_str(), *status))
            }));

        for (kind, status) in required {
            if self.frame_count(kind, status) == 0 {
                return Err(CatalogError::EmptyAnimation {
                    kind: kind.to_string(),
                    status: status.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_library_covers_catalog() {
        let catalog = GameCatalog::default();
        let library = AnimationLibrary::builtin(&catalog);

        assert_eq!(library.validate(&catalog), Ok(()));
        assert_eq!(library.frame_count(PLAYER_KIND, "down_attack"), 4);
        assert_eq!(library.frame_count("squid", "move"), 4);
        assert_eq!(
            library.frame("squid", "idle", 2),
            Some("graphics/monsters/squid/idle/2.png")
        );
        assert_eq!(library.frame_count(PARTICLE_KIND, "flame"), 12);
    }

    #[test]
    fn missing_clip_fails_validation() {
        let catalog = GameCatalog::default();
        let library = AnimationLibrary::builtin(&catalog).with_clip("bamboo", "attack", Vec::new());

        assert_eq!(
            library.validate(&catalog),
            Err(CatalogError::EmptyAnimation {
                kind: "bamboo".to_string(),
                status: "attack".to_string(),
            })
        );
    }
}
