//! The screens and phases the game moves through.
//!
//! Every gameplay and UI system is gated on one of these states, so the
//! whole tick order switches off the moment a match ends and the menu
//! screens never see match entities. Terminal states (Victory, Defeat)
//! are states of their own rather than flags: entering one is what
//! triggers recording and teardown.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `Loading` to load the arena and the ranking store
/// - Move to `MainMenu` when loading completes
/// - `SelectingWarrior` once a user is confirmed
/// - Enter `InGame` when an archetype is chosen
/// - `Victory` / `Defeat` are terminal match states that tear the match
///   down and return to the main menu
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading the arena map and ranking data
    #[default]
    Loading,
    /// Main menu / user entry
    MainMenu,
    /// Ranking screen
    Ranking,
    /// Archetype selection screen
    SelectingWarrior,
    /// Active match
    InGame,
    /// The warrior collected ten emeralds
    Victory,
    /// The warrior's health reached zero
    Defeat,
}

impl GameState {
    /// Whether this state is a terminal match outcome.
    pub fn is_match_over(self) -> bool {
        matches!(self, GameState::Victory | GameState::Defeat)
    }
}
