//! Enemy plugin - registers spawning, AI, damage, and death systems.

use bevy::prelude::*;

use super::ai::{self, AiTicker};
use super::spawning::{self, Spawner};
use crate::core::{GameState, TickSet};

/// Enemy plugin - the skeleton horde.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Spawner>()
            .init_resource::<AiTicker>()
            .add_systems(OnEnter(GameState::InGame), spawning::setup_spawner)
            .add_systems(Update, spawning::spawn_skeletons.in_set(TickSet::Spawning))
            .add_systems(Update, ai::skeleton_ai.in_set(TickSet::Ai))
            .add_systems(Update, ai::apply_skeleton_damage.in_set(TickSet::Damage))
            .add_systems(Update, ai::handle_skeleton_death.in_set(TickSet::Deaths));
    }
}
