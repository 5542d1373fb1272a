//! Shared components for everything that lives on the play surface.
//!
//! Positions are authoritative gameplay state in integer pixel units; the
//! rendering layer reads them each frame and never the other way around.

use bevy::prelude::*;

use crate::world::geometry::{Dir, Rect};

/// Top-left corner of an entity's bounding box, in pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub IVec2);

/// Fixed bounding-box size of an entity, in pixels.
#[derive(Component, Debug, Clone, Copy)]
pub struct BodySize(pub IVec2);

/// Movement speed in pixels per movement tick.
#[derive(Component, Debug, Clone, Copy)]
pub struct Speed(pub i32);

/// Facing and motion state, exposed to the presentation layer as the
/// entity's animation state (idle/moving in each of four directions).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    pub facing: Dir,
    pub moving: bool,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            facing: Dir::Down,
            moving: false,
        }
    }
}

/// Marker for entities that belong to the current match and are removed
/// wholesale when it ends.
#[derive(Component)]
pub struct MatchEntity;

/// The entity's bounding box.
pub fn body(pos: &Position, size: &BodySize) -> Rect {
    Rect::new(pos.0.x, pos.0.y, size.0.x, size.0.y)
}
