//! The player-controlled warrior: archetypes, stats, input, movement.

mod components;
mod input;
mod plugin;

pub use components::{
    Archetype, Emeralds, Invincible, Mana, SelectedArchetype, Warrior, EMERALD_GOAL, MANA_CAP,
    WARRIOR_SIZE,
};
pub use input::{MoveTicker, MOVE_TICK};
pub use plugin::PlayerPlugin;
