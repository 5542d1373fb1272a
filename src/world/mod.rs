//! Static arena geometry and the collision utility.

mod data;
mod error;
pub mod geometry;
mod plugin;

pub use data::{load_arena, Arena, ArenaRaw, ARENA_PATH};
pub use error::MapLoadError;
pub use plugin::WorldPlugin;
