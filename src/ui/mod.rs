//! Menus, HUD, and the ranking screen.

mod hud;
mod menu;
mod plugin;
mod ranking_screen;
mod selection;

pub use plugin::UiPlugin;
