//! Player plugin - warrior spawning, input, movement, damage intake.

use bevy::prelude::*;

use super::components::*;
use super::input::{self, MoveTicker};
use crate::combat::{AttackCooldown, Health};
use crate::core::{
    BodySize, GameState, MatchEntity, Pose, Position, Speed, TickSet, WarriorStruck,
};
use crate::world::Arena;

/// Player plugin - handles the warrior's lifecycle and controls.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoveTicker>()
            .add_systems(OnEnter(GameState::InGame), spawn_warrior)
            .add_systems(Update, input::action_input.in_set(TickSet::Input))
            .add_systems(Update, input::warrior_movement.in_set(TickSet::Movement))
            .add_systems(Update, apply_warrior_damage.in_set(TickSet::Damage));
    }
}

/// Spawn the warrior for the selected archetype at the arena start point.
fn spawn_warrior(
    mut commands: Commands,
    arena: Res<Arena>,
    selected: Res<SelectedArchetype>,
    mut ticker: ResMut<MoveTicker>,
) {
    let archetype = selected.0;
    let mut warrior = commands.spawn((
        Warrior,
        archetype,
        Position(arena.player_start),
        BodySize(WARRIOR_SIZE),
        Speed(archetype.speed()),
        Pose::default(),
        Health::new(archetype.base_health()),
        Mana::default(),
        Emeralds::default(),
        Invincible(false),
        MatchEntity,
    ));
    if let Some(seconds) = archetype.attack_cooldown() {
        warrior.insert(AttackCooldown::ready(seconds));
    }
    ticker.0.reset();

    info!("match started as {}", archetype.label());
}

/// Apply skeleton contact damage to the warrior.
///
/// The AI has already gated each strike on its own cooldown and the
/// warrior's invincibility; every event here is one point of damage.
fn apply_warrior_damage(
    mut events: EventReader<WarriorStruck>,
    mut query: Query<&mut Health, With<Warrior>>,
) {
    let Ok(mut health) = query.get_single_mut() else {
        return;
    };
    for _ in events.read() {
        health.take_damage(1);
    }
}
