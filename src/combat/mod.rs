//! Combat systems - attacks, ultimates, projectiles, bombs, auras.

mod abilities;
mod components;
mod plugin;
mod projectiles;

pub use components::*;
pub use plugin::CombatPlugin;
pub use projectiles::spawn_explosion;
