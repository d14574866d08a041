//! Player-related components.

use bevy::prelude::*;

use crate::combat::Cooldown;
use crate::data::{CatalogError, GameCatalog, PlayerBase, StatBlock};

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Current stats, their displayed ceilings, and what the next upgrade costs.
#[derive(Component, Debug, Clone)]
pub struct PlayerStats {
    pub stats: StatBlock,
    pub max_stats: StatBlock,
    pub upgrade_cost: StatBlock,
}

impl PlayerStats {
    pub fn from_base(base: &PlayerBase) -> Self {
        Self {
            stats: base.stats,
            max_stats: base.max_stats,
            upgrade_cost: base.upgrade_cost,
        }
    }

    /// Stat attack plus the damage of the weapon at `weapon_index`.
    pub fn full_weapon_damage(
        &self,
        catalog: &GameCatalog,
        weapon_index: usize,
    ) -> Result<f32, CatalogError> {
        Ok(self.stats.attack + catalog.weapon(weapon_index)?.damage)
    }

    /// Stat magic plus the strength of the spell at `magic_index`.
    pub fn full_magic_damage(
        &self,
        catalog: &GameCatalog,
        magic_index: usize,
    ) -> Result<f32, CatalogError> {
        Ok(self.stats.magic + catalog.spell(magic_index)?.strength)
    }
}

/// Running health and energy. Health is only clamped by heals.
#[derive(Component, Debug, Clone, Copy)]
pub struct Vitals {
    pub health: f32,
    pub energy: f32,
}

impl Vitals {
    pub fn full(stats: &StatBlock) -> Self {
        Self {
            health: stats.health,
            energy: stats.energy,
        }
    }
}

/// Experience and gold collected from kills.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Progress {
    pub exp: f32,
    pub gold: u32,
}

/// Selected weapon and spell, with their switch debounce.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Loadout {
    pub weapon_index: usize,
    pub magic_index: usize,
    pub weapon_switch: Cooldown,
    pub magic_switch: Cooldown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn name(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }

    /// Unit vector in screen space (+y down).
    pub fn vector(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::NEG_Y,
            Facing::Down => Vec2::Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    Moving,
    #[default]
    Idle,
    Attacking,
}

/// Facing and stance; together they name the animation clip.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStatus {
    pub facing: Facing,
    pub stance: Stance,
}

impl PlayerStatus {
    /// Clip tag such as `down`, `left_idle` or `up_attack`.
    pub fn tag(&self) -> String {
        match self.stance {
            Stance::Moving => self.facing.name().to_string(),
            Stance::Idle => format!("{}_idle", self.facing.name()),
            Stance::Attacking => format!("{}_attack", self.facing.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tags() {
        let status = PlayerStatus {
            facing: Facing::Left,
            stance: Stance::Attacking,
        };
        assert_eq!(status.tag(), "left_attack");
        assert_eq!(PlayerStatus::default().tag(), "down_idle");
    }

    #[test]
    fn full_damage_adds_stat_and_item() {
        let catalog = GameCatalog::default();
        let stats = PlayerStats::from_base(&catalog.player);
        // attack 10 + sword 15
        assert_eq!(stats.full_weapon_damage(&catalog, 0), Ok(25.0));
        // magic 4 + flame 5
        assert_eq!(stats.full_magic_damage(&catalog, 0), Ok(9.0));
        assert!(stats.full_weapon_damage(&catalog, 42).is_err());
    }
}
