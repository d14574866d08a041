//! Player progression snapshot and its RON file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::PersistenceError;
use crate::data::{GameCatalog, StatBlock};
use crate::player::{Loadout, PlayerStats, Progress, Vitals};

const DEFAULT_SAVE_PATH: &str = "saves/player.ron";

/// Where the save file lives.
#[derive(Resource, Debug, Clone)]
pub struct SavePath(pub PathBuf);

impl Default for SavePath {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_SAVE_PATH))
    }
}

/// Everything about the player that outlives a level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SaveData {
    pub stats: StatBlock,
    pub max_stats: StatBlock,
    pub upgrade_cost: StatBlock,
    pub health: f32,
    pub energy: f32,
    pub exp: f32,
    pub gold: u32,
    pub weapon_index: usize,
    pub magic_index: usize,
}

impl SaveData {
    pub fn capture(
        stats: &PlayerStats,
        vitals: &Vitals,
        progress: &Progress,
        loadout: &Loadout,
    ) -> Self {
        Self {
            stats: stats.stats,
            max_stats: stats.max_stats,
            upgrade_cost: stats.upgrade_cost,
            health: vitals.health,
            energy: vitals.energy,
            exp: progress.exp,
            gold: progress.gold,
            weapon_index: loadout.weapon_index,
            magic_index: loadout.magic_index,
        }
    }

    /// Write this snapshot onto a freshly spawned player.
    ///
    /// A player saved dead comes back at full health. Loadout indices that no
    /// longer exist in the catalog fall back to the first entry.
    pub fn restore(
        &self,
        catalog: &GameCatalog,
        stats: &mut PlayerStats,
        vitals: &mut Vitals,
        progress: &mut Progress,
        loadout: &mut Loadout,
    ) {
        stats.stats = self.stats;
        stats.max_stats = self.max_stats;
        stats.upgrade_cost = self.upgrade_cost;
        vitals.health = if self.health > 0.0 {
            self.health
        } else {
            self.stats.health
        };
        vitals.energy = self.energy.min(self.stats.energy);
        progress.exp = self.exp;
        progress.gold = self.gold;
        loadout.weapon_index = if self.weapon_index < catalog.weapons.len() {
            self.weapon_index
        } else {
            0
        };
        loadout.magic_index = if self.magic_index < catalog.spells.len() {
            self.magic_index
        } else {
            0
        };
    }
}

pub fn write_save(path: &Path, data: &SaveData) -> Result<(), PersistenceError> {
    let io_error = |source| PersistenceError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let contents = ron::ser::to_string_pretty(data, ron::ser::PrettyConfig::default())?;
    fs::write(path, contents).map_err(io_error)
}

/// Read a save file. A missing file is not an error.
pub fn read_save(path: &Path) -> Result<Option<SaveData>, PersistenceError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    };

    ron::from_str(&contents)
        .map(Some)
        .map_err(|e| PersistenceError::Parse {
            path: path.display().to_string(),
            details: e.to_string(),
        })
}
