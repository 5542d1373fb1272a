//! Skeleton spawning.
//!
//! Every two seconds a skeleton appears at a uniformly random map
//! coordinate, resampled until it lies on walkable floor and clear of
//! every wall. Sampling is capped; a pathological map falls back to the
//! designated safe spawn point instead of wedging the frame.

use bevy::prelude::*;
use rand::Rng;

use super::components::*;
use crate::combat::Health;
use crate::core::{BodySize, MatchEntity, Pose, Position, Speed};
use crate::player::{Emeralds, Warrior, EMERALD_GOAL};
use crate::world::geometry::{is_clear_of_walls, is_inside_walkable_area, Rect};
use crate::world::Arena;

/// Drives periodic skeleton spawning.
#[derive(Resource)]
pub struct Spawner(pub Timer);

impl Default for Spawner {
    fn default() -> Self {
        Self(Timer::from_seconds(SPAWN_INTERVAL, TimerMode::Repeating))
    }
}

/// Pick a random walkable, wall-free placement for a skeleton body.
pub fn sample_spawn_point<R: Rng>(rng: &mut R, arena: &Arena) -> IVec2 {
    for _ in 0..SPAWN_RETRY_CAP {
        let candidate = IVec2::new(
            rng.gen_range(0..=arena.bounds.x),
            rng.gen_range(0..=arena.bounds.y),
        );
        let body = Rect::from_pos_size(candidate, SKELETON_SIZE);
        if is_inside_walkable_area(&body, &arena.floors) && is_clear_of_walls(&body, &arena.walls)
        {
            return candidate;
        }
    }
    warn!(
        "spawn sampling exhausted after {} attempts, using safe spawn point",
        SPAWN_RETRY_CAP
    );
    arena.safe_spawn
}

/// Reset the spawner when a match starts.
pub fn setup_spawner(mut spawner: ResMut<Spawner>) {
    spawner.0.reset();
}

/// Spawn skeletons on the fixed interval while the match can still be won.
pub fn spawn_skeletons(
    time: Res<Time>,
    mut commands: Commands,
    mut spawner: ResMut<Spawner>,
    arena: Res<Arena>,
    warrior: Query<(&Health, &Emeralds), With<Warrior>>,
) {
    // The schedule already stops at a terminal state; this re-check keeps a
    // same-frame kill or win from feeding one last skeleton in.
    let Ok((health, emeralds)) = warrior.get_single() else {
        return;
    };
    if health.is_dead() || emeralds.0 >= EMERALD_GOAL {
        return;
    }

    spawner.0.tick(time.delta());
    let mut rng = rand::thread_rng();
    for _ in 0..spawner.0.times_finished_this_tick() {
        let position = sample_spawn_point(&mut rng, &arena);
        commands.spawn((
            Skeleton,
            Position(position),
            BodySize(SKELETON_SIZE),
            Speed(SKELETON_SPEED),
            Pose::default(),
            Health::new(rng.gen_range(1..=2)),
            ContactCooldown::default(),
            MatchEntity,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn tiny_arena() -> Arena {
        Arena {
            name: "test".to_string(),
            bounds: IVec2::new(640, 480),
            player_start: IVec2::new(100, 100),
            safe_spawn: IVec2::new(200, 200),
            walls: vec![Rect::new(0, 0, 640, 16)],
            floors: vec![Rect::new(16, 16, 608, 448)],
        }
    }

    #[test]
    fn sampled_point_is_walkable_and_clear() {
        let arena = tiny_arena();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let point = sample_spawn_point(&mut rng, &arena);
            let body = Rect::from_pos_size(point, SKELETON_SIZE);
            assert!(is_inside_walkable_area(&body, &arena.floors));
            assert!(is_clear_of_walls(&body, &arena.walls));
        }
    }

    #[test]
    fn exhausted_sampling_falls_back_to_safe_spawn() {
        // No floor at all: every candidate is rejected.
        let mut arena = tiny_arena();
        arena.floors = vec![];
        arena.safe_spawn = IVec2::new(321, 123);
        let mut rng = StepRng::new(0, 1);
        assert_eq!(sample_spawn_point(&mut rng, &arena), IVec2::new(321, 123));
    }
}
