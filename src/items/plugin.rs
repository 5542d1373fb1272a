//! Item plugin - registers the pickup watcher.

use bevy::prelude::*;

use super::systems::watch_pickups;
use crate::core::TickSet;

/// Item plugin - loot drops and pickups.
pub struct ItemPlugin;

impl Plugin for ItemPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, watch_pickups.in_set(TickSet::Pickups));
    }
}
