//! Weapon, spell, monster, and player base-stat tables.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

use super::error::CatalogError;
use super::stats::StatBlock;

/// A melee weapon. Catalog order is the switching order.
#[derive(Deserialize, Clone, Debug)]
pub struct WeaponDef {
    pub name: String,
    /// Added on top of the base attack cooldown
    pub cooldown_ms: u64,
    pub damage: f32,
    /// Hitbox size when swung to the right: (reach, thickness)
    pub size: (f32, f32),
    pub graphic: String,
}

/// What a spell does when cast.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpellStyle {
    Flame,
    Heal,
}

/// A spell. Catalog order is the switching order.
#[derive(Deserialize, Clone, Debug)]
pub struct SpellDef {
    pub style: SpellStyle,
    pub strength: f32,
    pub cost: f32,
    pub graphic: String,
}

impl SpellDef {
    pub fn name(&self) -> &'static str {
        match self.style {
            SpellStyle::Flame => "flame",
            SpellStyle::Heal => "heal",
        }
    }
}

/// A monster type.
#[derive(Deserialize, Clone, Debug)]
pub struct MonsterDef {
    pub health: f32,
    /// Experience paid to the killer
    pub exp: f32,
    /// Gold paid to the killer
    #[serde(default)]
    pub gold: u32,
    pub damage: f32,
    /// Particle key used when this monster hits the player
    pub attack_type: String,
    /// Sound cue played on each attack
    pub attack_sound: String,
    pub speed: f32,
    /// Knockback factor when hit
    pub resistance: f32,
    pub attack_radius: f32,
    pub notice_radius: f32,
}

/// Starting stats for a fresh player.
#[derive(Deserialize, Clone, Debug)]
pub struct PlayerBase {
    pub stats: StatBlock,
    pub max_stats: StatBlock,
    pub upgrade_cost: StatBlock,
    /// Horizontal and vertical shrink from sprite to hitbox
    pub hitbox_inset: (f32, f32),
}

impl Default for PlayerBase {
    fn default() -> Self {
        Self {
            stats: StatBlock::new(100.0, 60.0, 10.0, 4.0, 5.0),
            max_stats: StatBlock::new(300.0, 140.0, 20.0, 10.0, 10.0),
            upgrade_cost: StatBlock::splat(100.0),
            hitbox_inset: (6.0, 26.0),
        }
    }
}

/// Every static table the game reads, loaded from `assets/data/catalog.ron`.
#[derive(Resource, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GameCatalog {
    pub weapons: Vec<WeaponDef>,
    pub spells: Vec<SpellDef>,
    pub monsters: HashMap<String, MonsterDef>,
    pub player: PlayerBase,
    /// Sound cue -> audio asset path
    pub sounds: HashMap<String, String>,
}

impl GameCatalog {
    pub fn weapon(&self, index: usize) -> Result<&WeaponDef, CatalogError> {
        self.weapons.get(index).ok_or(CatalogError::UnknownWeapon(index))
    }

    pub fn spell(&self, index: usize) -> Result<&SpellDef, CatalogError> {
        self.spells.get(index).ok_or(CatalogError::UnknownSpell(index))
    }

    pub fn monster(&self, name: &str) -> Result<&MonsterDef, CatalogError> {
        self.monsters
            .get(name)
            .ok_or_else(|| CatalogError::UnknownMonster(name.to_string()))
    }

    /// Check everything the simulation takes for granted.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.weapons.is_empty() {
            return Err(CatalogError::EmptyCatalog("weapon"));
        }
        if self.spells.is_empty() {
            return Err(CatalogError::EmptyCatalog("spell"));
        }
        if self.monsters.is_empty() {
            return Err(CatalogError::EmptyCatalog("monster"));
        }
        for (name, monster) in &self.monsters {
            if monster.attack_radius < 0.0 || monster.notice_radius < 0.0 {
                return Err(CatalogError::InvalidMonster {
                    name: name.clone(),
                    details: "radii must not be negative".to_string(),
                });
            }
            if monster.health <= 0.0 {
                return Err(CatalogError::InvalidMonster {
                    name: name.clone(),
                    details: "health must be positive".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn weapon(name: &str, cooldown_ms: u64, damage: f32, size: (f32, f32)) -> WeaponDef {
    WeaponDef {
        name: name.to_string(),
        cooldown_ms,
        damage,
        size,
        graphic: format!("graphics/weapons/{name}/full.png"),
    }
}

#[allow(clippy::too_many_arguments)]
fn monster(
    health: f32,
    exp: f32,
    damage: f32,
    attack_type: &str,
    attack_sound: &str,
    speed: f32,
    attack_radius: f32,
    notice_radius: f32,
) -> MonsterDef {
    MonsterDef {
        health,
        exp,
        gold: 0,
        damage,
        attack_type: attack_type.to_string(),
        attack_sound: attack_sound.to_string(),
        speed,
        resistance: 3.0,
        attack_radius,
        notice_radius,
    }
}

impl Default for GameCatalog {
    fn default() -> Self {
        let weapons = vec![
            weapon("sword", 100, 15.0, (40.0, 24.0)),
            weapon("lance", 400, 30.0, (64.0, 20.0)),
            weapon("axe", 300, 20.0, (44.0, 32.0)),
            weapon("rapier", 50, 8.0, (52.0, 16.0)),
            weapon("sai", 80, 10.0, (36.0, 24.0)),
        ];

        let spells = vec![
            SpellDef {
                style: SpellStyle::Flame,
                strength: 5.0,
                cost: 20.0,
                graphic: "graphics/particles/flame/fire.png".to_string(),
            },
            SpellDef {
                style: SpellStyle::Heal,
                strength: 20.0,
                cost: 10.0,
                graphic: "graphics/particles/heal/heal.png".to_string(),
            },
        ];

        let monsters = HashMap::from([
            ("squid".to_string(), monster(100.0, 100.0, 20.0, "slash", "slash", 3.0, 80.0, 360.0)),
            ("raccoon".to_string(), monster(300.0, 250.0, 40.0, "claw", "claw", 2.0, 120.0, 400.0)),
            ("spirit".to_string(), monster(100.0, 110.0, 8.0, "thunder", "fireball", 4.0, 60.0, 350.0)),
            ("bamboo".to_string(), monster(70.0, 120.0, 6.0, "leaf_attack", "slash", 3.0, 50.0, 300.0)),
        ]);

        let sounds = [
            ("main", "audio/main.ogg"),
            ("sword", "audio/sword.wav"),
            ("hit", "audio/hit.wav"),
            ("death", "audio/death.wav"),
            ("heal", "audio/heal.wav"),
            ("flame", "audio/Fire.wav"),
            ("slash", "audio/attack/slash.wav"),
            ("claw", "audio/attack/claw.wav"),
            ("fireball", "audio/attack/fireball.wav"),
        ]
        .into_iter()
        .map(|(cue, path)| (cue.to_string(), path.to_string()))
        .collect();

        Self {
            weapons,
            spells,
            monsters,
            player: PlayerBase::default(),
            sounds,
        }
    }
}
