//! The player's five upgradeable stats.

use serde::{Deserialize, Serialize};

/// One of the upgradeable stats, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Health,
    Energy,
    Attack,
    Magic,
    Speed,
}

impl Stat {
    /// All stats in upgrade-menu order.
    pub const ALL: [Stat; 5] = [Stat::Health, Stat::Energy, Stat::Attack, Stat::Magic, Stat::Speed];

    pub fn from_index(index: usize) -> Option<Stat> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Stat::Health => "health",
            Stat::Energy => "energy",
            Stat::Attack => "attack",
            Stat::Magic => "magic",
            Stat::Speed => "speed",
        }
    }
}

/// A value per stat.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    pub health: f32,
    pub energy: f32,
    pub attack: f32,
    pub magic: f32,
    pub speed: f32,
}

impl StatBlock {
    pub fn new(health: f32, energy: f32, attack: f32, magic: f32, speed: f32) -> Self {
        Self {
            health,
            energy,
            attack,
            magic,
            speed,
        }
    }

    /// Same value for every stat.
    pub fn splat(value: f32) -> Self {
        Self::new(value, value, value, value, value)
    }

    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Health => self.health,
            Stat::Energy => self.energy,
            Stat::Attack => self.attack,
            Stat::Magic => self.magic,
            Stat::Speed => self.speed,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut f32 {
        match stat {
            Stat::Health => &mut self.health,
            Stat::Energy => &mut self.energy,
            Stat::Attack => &mut self.attack,
            Stat::Magic => &mut self.magic,
            Stat::Speed => &mut self.speed,
        }
    }
}
