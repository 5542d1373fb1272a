//! Match clock and terminal-condition detection.
//!
//! The clock accumulates elapsed time on a fixed 5 ms tick, adding 0.05 s
//! per tick - the unit every ranked time is measured in. The terminal check
//! runs alongside it: health at zero ends the match in defeat, ten emeralds
//! in victory. Both outcomes tear down every match-scoped entity and hand
//! control back to the main menu.

use std::time::Duration;

use bevy::prelude::*;

use super::entity::MatchEntity;
use super::states::GameState;
use crate::combat::Health;
use crate::player::{Emeralds, Warrior, EMERALD_GOAL};

/// Elapsed seconds credited per finished clock tick.
pub const SECONDS_PER_TICK: f64 = 0.05;

/// Interval of the match clock tick.
pub const CLOCK_TICK: f32 = 0.005;

/// Authoritative elapsed-time counter for the running match.
#[derive(Resource)]
pub struct MatchClock {
    tick: Timer,
    ticks: u64,
}

impl Default for MatchClock {
    fn default() -> Self {
        Self {
            tick: Timer::from_seconds(CLOCK_TICK, TimerMode::Repeating),
            ticks: 0,
        }
    }
}

impl MatchClock {
    /// Advance the clock by a frame delta, crediting every tick that
    /// elapsed within it.
    pub fn advance(&mut self, delta: Duration) {
        self.tick.tick(delta);
        self.ticks += u64::from(self.tick.times_finished_this_tick());
    }

    /// Elapsed match time in seconds.
    pub fn seconds(&self) -> f64 {
        self.ticks as f64 * SECONDS_PER_TICK
    }
}

/// Countdown on the result screen before returning to the main menu.
#[derive(Resource)]
pub struct ResultCountdown(pub Timer);

/// Insert a fresh clock when a match starts.
pub fn setup_match_clock(mut commands: Commands) {
    commands.init_resource::<MatchClock>();
}

/// Tick the match clock.
pub fn advance_match_clock(time: Res<Time>, mut clock: ResMut<MatchClock>) {
    clock.advance(time.delta());
}

/// Detect the terminal conditions and transition out of the match.
///
/// A missing warrior during an active match is a programming error, not a
/// recoverable condition.
pub fn check_terminal_conditions(
    warrior: Query<(&Health, &Emeralds), With<Warrior>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let (health, emeralds) = warrior
        .get_single()
        .expect("active match without a warrior entity");

    if health.is_dead() {
        info!("warrior has fallen - defeat");
        next_state.set(GameState::Defeat);
    } else if emeralds.0 >= EMERALD_GOAL {
        info!("ten emeralds collected - victory");
        next_state.set(GameState::Victory);
    }
}

/// Remove every match-scoped entity and the clock.
pub fn teardown_match(
    mut commands: Commands,
    entities: Query<Entity, With<MatchEntity>>,
) {
    for entity in entities.iter() {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<MatchClock>();
    commands.insert_resource(ResultCountdown(Timer::from_seconds(3.0, TimerMode::Once)));
}

/// Hold on the result screen briefly, then return to the main menu.
pub fn return_to_menu(
    time: Res<Time>,
    countdown: Option<ResMut<ResultCountdown>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(mut countdown) = countdown else {
        return;
    };
    countdown.0.tick(time.delta());
    if countdown.0.finished() {
        commands.remove_resource::<ResultCountdown>();
        next_state.set(GameState::MainMenu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_credits_ticks_from_frame_deltas() {
        let mut clock = MatchClock::default();
        for _ in 0..10 {
            clock.advance(Duration::from_millis(5));
        }
        // 50 ms of 5 ms ticks at 0.05 s each
        assert!((clock.seconds() - 0.5).abs() < 0.1, "got {}", clock.seconds());
    }

    #[test]
    fn one_large_delta_credits_every_elapsed_tick() {
        let mut clock = MatchClock::default();
        clock.advance(Duration::from_millis(50));
        assert!((clock.seconds() - 0.5).abs() < 0.1, "got {}", clock.seconds());
    }
}
