//! Presentation layer: cameras, sprites, and state-to-transform sync.

mod plugin;
mod sync;

pub use plugin::RenderingPlugin;
