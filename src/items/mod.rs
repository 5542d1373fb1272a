//! Loot drops and pickup watching.

mod components;
mod plugin;
mod systems;

pub use components::{roll_loot, Item, ItemKind, ITEM_SIZE, PICKUP_TICK};
pub use plugin::ItemPlugin;
