//! Progression module - experience payouts and stat upgrades.

mod plugin;
mod rewards;
mod upgrade;

pub use plugin::ProgressionPlugin;
pub use upgrade::{purchase_upgrade, UpgradeMenu};
