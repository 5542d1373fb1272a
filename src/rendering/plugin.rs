//! Rendering plugin - presentation-side sync of gameplay state.

use bevy::prelude::*;

use super::sync;
use crate::core::GameState;

/// Rendering plugin - draws what the gameplay core says exists.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, sync::setup_camera)
            .add_systems(OnEnter(GameState::InGame), sync::spawn_arena_tiles)
            .add_systems(PostUpdate, (sync::attach_sprites, sync::sync_transforms));
    }
}
