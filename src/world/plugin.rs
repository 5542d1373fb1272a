//! World plugin - loads the arena and hands off to the main menu.

use bevy::prelude::*;

use super::data::{load_arena, ARENA_PATH};
use crate::core::GameState;

/// World plugin - owns the static arena geometry.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_arena_map);
    }
}

/// Load the arena definition and move on to the main menu.
///
/// A game without a map cannot run, so a broken definition is fatal here
/// rather than logged and limped past.
fn load_arena_map(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    match load_arena(ARENA_PATH) {
        Ok(arena) => {
            info!(
                "loaded arena '{}': {} walls, {} floor regions",
                arena.name,
                arena.walls.len(),
                arena.floors.len()
            );
            commands.insert_resource(arena);
            next_state.set(GameState::MainMenu);
        }
        Err(e) => panic!("failed to load arena map: {e}"),
    }
}
