//! Keyboard input and warrior movement.
//!
//! Movement advances on a fixed 10 ms tick: each tick, every held direction
//! key moves the warrior by its speed, each step validated against the wall
//! set. A channeling warrior ignores all input until the channel resolves.

use bevy::prelude::*;

use super::components::{Emeralds, Mana, Warrior};
use crate::combat::Channeling;
use crate::core::{body, AttackInput, BodySize, Pose, Position, Speed, UltimateInput};
use crate::world::geometry::{validate_move, Dir};
use crate::world::Arena;

/// Fixed movement tick interval.
pub const MOVE_TICK: f32 = 0.01;

/// Drives warrior movement at a fixed rate independent of frame rate.
#[derive(Resource)]
pub struct MoveTicker(pub Timer);

impl Default for MoveTicker {
    fn default() -> Self {
        Self(Timer::from_seconds(MOVE_TICK, TimerMode::Repeating))
    }
}

const DIRECTION_KEYS: [(KeyCode, Dir); 4] = [
    (KeyCode::KeyW, Dir::Up),
    (KeyCode::KeyS, Dir::Down),
    (KeyCode::KeyA, Dir::Left),
    (KeyCode::KeyD, Dir::Right),
];

/// Move the warrior according to held direction keys.
pub fn warrior_movement(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    arena: Res<Arena>,
    mut ticker: ResMut<MoveTicker>,
    mut query: Query<
        (&mut Position, &BodySize, &Speed, &mut Pose),
        (With<Warrior>, Without<Channeling>),
    >,
) {
    ticker.0.tick(time.delta());
    let steps = ticker.0.times_finished_this_tick();

    let Ok((mut position, size, speed, mut pose)) = query.get_single_mut() else {
        return;
    };

    // Releasing a key leaves the warrior idle, facing that way.
    for (key, dir) in DIRECTION_KEYS {
        if keyboard.just_released(key) {
            pose.facing = dir;
            pose.moving = false;
        }
    }

    for _ in 0..steps {
        for (key, dir) in DIRECTION_KEYS {
            if !keyboard.pressed(key) {
                continue;
            }
            pose.facing = dir;
            pose.moving = true;
            let current = body(&position, size);
            let permitted = validate_move(&current, &arena.walls, speed.0, dir);
            position.0 += dir.delta() * permitted;
        }
    }
}

/// Emit attack/ultimate events and handle the debug cheat.
pub fn action_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut attack_events: EventWriter<AttackInput>,
    mut ultimate_events: EventWriter<UltimateInput>,
    mut query: Query<(&Mana, &mut Emeralds), (With<Warrior>, Without<Channeling>)>,
) {
    let Ok((mana, mut emeralds)) = query.get_single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::KeyP) {
        attack_events.send(AttackInput);
    }

    if keyboard.just_pressed(KeyCode::KeyO) && mana.allows_ultimate() {
        ultimate_events.send(UltimateInput);
    }

    // Debug cheat: grant a full set of emeralds.
    if keyboard.just_pressed(KeyCode::KeyT) {
        emeralds.0 = emeralds.0.saturating_add(10);
    }
}
