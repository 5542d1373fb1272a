//! Combat plugin - attacks, ultimates, and transient combat objects.

use bevy::prelude::*;

use super::abilities;
use super::projectiles;
use crate::core::TickSet;

/// Combat plugin - everything a warrior can throw at the horde.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                abilities::tick_attack_cooldowns,
                abilities::execute_attack,
                abilities::execute_ultimate,
                abilities::update_attack_pose,
                abilities::update_soldier_channel,
                abilities::update_aura,
                abilities::update_magician_channel,
                abilities::update_bombardment,
                projectiles::move_bolts,
                projectiles::update_bombs,
                projectiles::move_rockets,
            )
                .chain()
                .in_set(TickSet::Abilities),
        )
        .add_systems(Update, projectiles::expire_lifetimes.in_set(TickSet::Deaths));
    }
}
