//! Arena data structures and RON loading.
//!
//! The arena is immutable for the lifetime of the program: a fixed set of
//! wall segments and floor regions, loaded once at startup and shared by
//! reference across every collision check.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::MapLoadError;
use super::geometry::{is_clear_of_walls, is_inside_walkable_area, Rect};

/// Path of the arena definition, relative to the working directory.
pub const ARENA_PATH: &str = "assets/data/levels/arena.ron";

/// Raw arena definition as read from RON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "Arena")]
pub struct ArenaRaw {
    pub name: String,
    pub bounds: (i32, i32),
    pub player_start: (i32, i32),
    pub safe_spawn: (i32, i32),
    pub walls: Vec<(i32, i32, i32, i32)>,
    pub floors: Vec<(i32, i32, i32, i32)>,
}

/// Processed arena definition.
#[derive(Resource, Debug, Clone)]
pub struct Arena {
    pub name: String,
    /// Extent of the play surface in pixels.
    pub bounds: IVec2,
    /// Where the warrior starts a match.
    pub player_start: IVec2,
    /// Known-good skeleton placement used when rejection sampling gives up.
    pub safe_spawn: IVec2,
    pub walls: Vec<Rect>,
    pub floors: Vec<Rect>,
}

impl Arena {
    /// Create from a raw definition, validating that the spawn points are
    /// actually usable.
    pub fn from_raw(raw: ArenaRaw) -> Result<Self, String> {
        let arena = Self {
            name: raw.name,
            bounds: IVec2::new(raw.bounds.0, raw.bounds.1),
            player_start: IVec2::new(raw.player_start.0, raw.player_start.1),
            safe_spawn: IVec2::new(raw.safe_spawn.0, raw.safe_spawn.1),
            walls: raw.walls.iter().map(|&(x, y, w, h)| Rect::new(x, y, w, h)).collect(),
            floors: raw.floors.iter().map(|&(x, y, w, h)| Rect::new(x, y, w, h)).collect(),
        };

        if arena.bounds.x <= 0 || arena.bounds.y <= 0 {
            return Err(format!("non-positive bounds {}x{}", arena.bounds.x, arena.bounds.y));
        }
        if arena.floors.is_empty() {
            return Err("no floor regions".to_string());
        }

        // Both designated spawn points must hold a 32x32 body.
        for (label, point) in [("player_start", arena.player_start), ("safe_spawn", arena.safe_spawn)] {
            let body = Rect::new(point.x, point.y, 32, 32);
            if !is_inside_walkable_area(&body, &arena.floors) {
                return Err(format!("{label} ({}, {}) is outside the floor", point.x, point.y));
            }
            if !is_clear_of_walls(&body, &arena.walls) {
                return Err(format!("{label} ({}, {}) overlaps a wall", point.x, point.y));
            }
        }

        Ok(arena)
    }
}

/// Load and validate the arena definition from disk.
pub fn load_arena(path: &str) -> Result<Arena, MapLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| MapLoadError::Read {
        path: path.to_string(),
        source,
    })?;
    let raw: ArenaRaw = ron::from_str(&contents).map_err(|source| MapLoadError::Parse {
        path: path.to_string(),
        source,
    })?;
    Arena::from_raw(raw).map_err(|details| MapLoadError::Invalid {
        path: path.to_string(),
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_fixture() -> ArenaRaw {
        ArenaRaw {
            name: "test".to_string(),
            bounds: (640, 480),
            player_start: (100, 100),
            safe_spawn: (200, 100),
            walls: vec![(0, 0, 640, 16)],
            floors: vec![(16, 16, 608, 448)],
        }
    }

    #[test]
    fn valid_raw_converts() {
        let arena = Arena::from_raw(raw_fixture()).unwrap();
        assert_eq!(arena.bounds, IVec2::new(640, 480));
        assert_eq!(arena.walls.len(), 1);
        assert_eq!(arena.floors.len(), 1);
    }

    #[test]
    fn spawn_point_in_wall_is_rejected() {
        let mut raw = raw_fixture();
        raw.safe_spawn = (0, 0);
        let err = Arena::from_raw(raw).unwrap_err();
        assert!(err.contains("safe_spawn"));
    }

    #[test]
    fn spawn_point_off_floor_is_rejected() {
        let mut raw = raw_fixture();
        raw.player_start = (-100, -100);
        let err = Arena::from_raw(raw).unwrap_err();
        assert!(err.contains("player_start"));
    }
}
