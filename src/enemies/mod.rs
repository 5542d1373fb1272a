//! The skeleton horde: spawning, chase AI, contact damage, death and loot.

mod ai;
mod components;
mod plugin;
mod spawning;

pub use ai::{chase_axes, AiTicker};
pub use components::*;
pub use plugin::EnemyPlugin;
pub use spawning::{sample_spawn_point, Spawner};
