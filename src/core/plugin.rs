//! Core plugin that sets up game states, events, and the match controller.

use bevy::prelude::*;

use super::clock;
use super::events::*;
use super::states::GameState;

/// Fixed ordering of the gameplay tick within a frame.
///
/// Every periodic behavior in the game - movement, abilities, the spawner,
/// enemy AI, pickups, the match clock - advances inside one of these sets,
/// so independent concerns always observe each other in a defined order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Read input, emit attack/ultimate events
    Input,
    /// Warrior movement
    Movement,
    /// Attack/ultimate execution, projectile and bomb stepping
    Abilities,
    /// Skeleton spawning
    Spawning,
    /// Skeleton chase AI and contact damage
    Ai,
    /// Damage application
    Damage,
    /// Death handling, explosions, loot drops
    Deaths,
    /// Item pickup watching
    Pickups,
    /// Match clock and terminal-condition checks
    Clock,
}

/// Set holding match teardown on entering a terminal state. Anything that
/// must still see the match (victory recording, result banners) orders
/// itself before this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeardownSet;

/// Core plugin - must be added first as other plugins depend on it.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<DamageSkeleton>()
            .add_event::<WarriorStruck>()
            .add_event::<AttackInput>()
            .add_event::<UltimateInput>()

            // One authoritative tick order for the whole match
            .configure_sets(
                Update,
                (
                    TickSet::Input,
                    TickSet::Movement,
                    TickSet::Abilities,
                    TickSet::Spawning,
                    TickSet::Ai,
                    TickSet::Damage,
                    TickSet::Deaths,
                    TickSet::Pickups,
                    TickSet::Clock,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            .add_systems(OnEnter(GameState::InGame), clock::setup_match_clock)
            .add_systems(
                Update,
                (clock::advance_match_clock, clock::check_terminal_conditions)
                    .chain()
                    .in_set(TickSet::Clock),
            )

            // Terminal states: persistence (victory only) orders itself
            // before TeardownSet; see the ranking plugin.
            .add_systems(
                OnEnter(GameState::Victory),
                clock::teardown_match.in_set(TeardownSet),
            )
            .add_systems(
                OnEnter(GameState::Defeat),
                clock::teardown_match.in_set(TeardownSet),
            )
            .add_systems(
                Update,
                clock::return_to_menu.run_if(|state: Res<State<GameState>>| {
                    state.get().is_match_over()
                }),
            );
    }
}
