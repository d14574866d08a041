//! Level data structures and RON loading.
//!
//! A level is a character grid plus a palette that says what each character
//! places. Spaces and dots are empty ground.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::LevelError;
use crate::data::{read_ron, GameCatalog};

pub const LEVELS_DIR: &str = "assets/data/levels";

/// What a palette character places on its tile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum TileKind {
    /// Invisible wall
    Boundary,
    /// Breakable grass
    Grass,
    /// Solid decoration; the graphic is two tiles tall
    Object(String),
    Player,
    /// Monster by catalog name
    Monster(String),
}

/// One thing to spawn, at a grid cell (column, row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub grid: (usize, usize),
    pub kind: TileKind,
}

/// A level as written in its RON file.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub palette: HashMap<char, TileKind>,
    /// Rows, top to bottom
    pub grid: Vec<String>,
}

impl LevelDefinition {
    /// Resolve every grid character into a placement, row by row.
    pub fn placements(&self) -> Result<Vec<Placement>, LevelError> {
        let mut placements = Vec::new();
        for (y, row) in self.grid.iter().enumerate() {
            for (x, character) in row.chars().enumerate() {
                if character == ' ' || character == '.' {
                    continue;
                }
                let kind = self.palette.get(&character).ok_or_else(|| {
                    LevelError::UnknownPaletteEntry {
                        level: self.name.clone(),
                        character,
                        x,
                        y,
                    }
                })?;
                placements.push(Placement {
                    grid: (x, y),
                    kind: kind.clone(),
                });
            }
        }
        Ok(placements)
    }

    /// Resolve placements and check them against the catalog.
    pub fn validate(&self, catalog: &GameCatalog) -> Result<Vec<Placement>, LevelError> {
        let placements = self.placements()?;
        for placement in &placements {
            if let TileKind::Monster(name) = &placement.kind {
                if catalog.monster(name).is_err() {
                    return Err(LevelError::UnknownMonster {
                        level: self.name.clone(),
                        name: name.clone(),
                        x: placement.grid.0,
                        y: placement.grid.1,
                    });
                }
            }
        }
        if !placements.iter().any(|p| p.kind == TileKind::Player) {
            return Err(LevelError::MissingPlayer(self.name.clone()));
        }
        Ok(placements)
    }

    /// Top-left pixel of a grid cell.
    pub fn grid_to_world(grid: (usize, usize), tile_size: f32) -> Vec2 {
        Vec2::new(grid.0 as f32 * tile_size, grid.1 as f32 * tile_size)
    }
}

/// Resource storing all loaded level definitions.
#[derive(Resource, Default)]
pub struct LevelRegistry {
    pub levels: HashMap<String, LevelDefinition>,
}

impl LevelRegistry {
    pub fn get(&self, name: &str) -> Option<&LevelDefinition> {
        self.levels.get(name)
    }

    /// Read every `.ron` file in `dir`, keyed by file stem.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LevelError> {
        let mut registry = Self::default();
        let dir = dir.as_ref();

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => {
                warn!("Levels directory not found: {:?}", dir);
                return Ok(registry);
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }
            let Some(stem) = path.file_stem() else {
                continue;
            };
            let level: LevelDefinition = read_ron(&path)?;
            info!("Loaded level: {}", level.name);
            registry
                .levels
                .insert(stem.to_string_lossy().into_owned(), level);
        }

        Ok(registry)
    }
}

/// Resource naming the level to build on entering the game.
#[derive(Resource, Debug, Clone)]
pub struct CurrentLevel {
    pub name: String,
}

/// Load all levels and check the start level against the catalog.
pub fn load_levels_dir(
    dir: impl AsRef<Path>,
    start_level: &str,
    catalog: &GameCatalog,
) -> Result<LevelRegistry, LevelError> {
    let registry = LevelRegistry::load_dir(dir)?;
    for level in registry.levels.values() {
        level.validate(catalog)?;
    }
    if registry.get(start_level).is_none() {
        return Err(LevelError::UnknownLevel(start_level.to_string()));
    }
    info!("Loaded {} level(s)", registry.levels.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(grid: &[&str]) -> LevelDefinition {
        ron::from_str::<LevelDefinition>(&format!(
            r#"(
                name: "test",
                palette: {{
                    'X': Boundary,
                    'g': Grass,
                    'T': Object("graphics/objects/0.png"),
                    'p': Player,
                    's': Monster("squid"),
                    'd': Monster("dragon"),
                }},
                grid: {:?},
            )"#,
            grid
        ))
        .unwrap()
    }

    #[test]
    fn palette_resolves_to_placements() {
        let placements = level(&["XXX", "Xp.", "gs "]).placements().unwrap();
        assert_eq!(placements.len(), 7);
        assert_eq!(
            placements[4],
            Placement {
                grid: (1, 1),
                kind: TileKind::Player
            }
        );
        assert_eq!(placements[6].kind, TileKind::Monster("squid".to_string()));
    }

    #[test]
    fn unknown_character_is_an_error() {
        let err = level(&["X?"]).placements().unwrap_err();
        assert!(matches!(
            err,
            LevelError::UnknownPaletteEntry {
                character: '?',
                x: 1,
                y: 0,
                ..
            }
        ));
    }

    #[test]
    fn unknown_monster_is_an_error() {
        let catalog = GameCatalog::default();
        let err = level(&["pd"]).validate(&catalog).unwrap_err();
        assert!(matches!(err, LevelError::UnknownMonster { ref name, .. } if name == "dragon"));
        assert!(level(&["ps"]).validate(&catalog).is_ok());
        assert!(matches!(
            level(&["s"]).validate(&catalog),
            Err(LevelError::MissingPlayer(_))
        ));
    }

    #[test]
    fn levels_load_from_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("meadow.ron"),
            r#"(name: "meadow", palette: {'p': Player}, grid: ["p"])"#,
        )
        .unwrap();
        let catalog = GameCatalog::default();

        let registry = load_levels_dir(dir.path(), "meadow", &catalog).unwrap();
        assert!(registry.get("meadow").is_some());
        assert!(matches!(
            load_levels_dir(dir.path(), "castle", &catalog),
            Err(LevelError::UnknownLevel(_))
        ));
    }
}
