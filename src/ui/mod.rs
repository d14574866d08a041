//! UI module - HUD, upgrade menu, and game over screen.

mod hud;
mod plugin;
mod upgrade_menu;

pub use plugin::UiPlugin;
