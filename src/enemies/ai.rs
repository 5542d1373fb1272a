//! Skeleton chase AI, contact damage, and death handling.

use bevy::prelude::*;
use rand::Rng;

use super::components::*;
use crate::combat::{spawn_explosion, Health};
use crate::core::{body, BodySize, DamageSkeleton, MatchEntity, Pose, Position, Speed, WarriorStruck};
use crate::items::{roll_loot, Item, ITEM_SIZE};
use crate::player::{Invincible, Warrior};
use crate::world::geometry::{validate_move, Dir};
use crate::world::Arena;

/// Drives skeleton AI at a fixed rate independent of frame rate.
#[derive(Resource)]
pub struct AiTicker(pub Timer);

impl Default for AiTicker {
    fn default() -> Self {
        Self(Timer::from_seconds(AI_TICK, TimerMode::Repeating))
    }
}

/// Pick the chase axes for one AI step.
///
/// `distance` is skeleton minus warrior. The axis with the smaller absolute
/// distance is closed first while it still exceeds the proximity threshold;
/// once within it, priority flips to the other axis. The second direction
/// is the fallback used when the chosen move is fully blocked by a wall.
pub fn chase_axes(distance: IVec2) -> (Dir, Dir) {
    let horizontal = if distance.x < 0 { Dir::Right } else { Dir::Left };
    let vertical = if distance.y < 0 { Dir::Down } else { Dir::Up };

    if distance.x.abs() < distance.y.abs() {
        if distance.x.abs() > PROXIMITY_THRESHOLD {
            (horizontal, vertical)
        } else {
            (vertical, horizontal)
        }
    } else if distance.y.abs() > PROXIMITY_THRESHOLD {
        (vertical, horizontal)
    } else {
        (horizontal, vertical)
    }
}

/// Chase the warrior and land contact damage.
///
/// Runs on the fixed AI tick. Each step a skeleton moves along its chosen
/// axis (falling back to the perpendicular axis when fully blocked), then
/// strikes if it overlaps the warrior, its own cooldown is idle, and the
/// warrior is not invincible.
pub fn skeleton_ai(
    time: Res<Time>,
    mut ticker: ResMut<AiTicker>,
    arena: Res<Arena>,
    warrior: Query<(&Position, &BodySize, &Invincible), With<Warrior>>,
    mut skeletons: Query<
        (&mut Position, &BodySize, &Speed, &mut Pose, &mut ContactCooldown),
        (With<Skeleton>, Without<Warrior>),
    >,
    mut struck: EventWriter<WarriorStruck>,
) {
    ticker.0.tick(time.delta());
    let steps = ticker.0.times_finished_this_tick();

    let Ok((warrior_pos, warrior_size, invincible)) = warrior.get_single() else {
        return;
    };
    let warrior_box = body(warrior_pos, warrior_size);

    for (mut position, size, speed, mut pose, mut cooldown) in skeletons.iter_mut() {
        cooldown.0.tick(time.delta());

        for _ in 0..steps {
            let distance = position.0 - warrior_pos.0;
            let (primary, fallback) = chase_axes(distance);

            let current = body(&position, size);
            let mut moved = validate_move(&current, &arena.walls, speed.0, primary);
            let mut dir = primary;
            if moved == 0 {
                moved = validate_move(&current, &arena.walls, speed.0, fallback);
                dir = fallback;
            }
            position.0 += dir.delta() * moved;
            pose.facing = dir;
            pose.moving = moved != 0;

            let skeleton_box = body(&position, size);
            if skeleton_box.intersects(&warrior_box) && cooldown.is_ready() && !invincible.0 {
                struck.send(WarriorStruck);
                cooldown.restart();
            }
        }
    }
}

/// Apply queued ability damage to skeletons.
pub fn apply_skeleton_damage(
    mut events: EventReader<DamageSkeleton>,
    mut skeletons: Query<&mut Health, With<Skeleton>>,
) {
    for event in events.read() {
        // The target may already be despawned if several hits landed in
        // the same frame; stale damage is simply dropped.
        if let Ok(mut health) = skeletons.get_mut(event.target) {
            health.take_damage(event.amount);
        }
    }
}

/// Remove dead skeletons, play their explosion, and roll loot.
pub fn handle_skeleton_death(
    mut commands: Commands,
    skeletons: Query<(Entity, &Health, &Position), With<Skeleton>>,
) {
    let mut rng = rand::thread_rng();
    for (entity, health, position) in skeletons.iter() {
        if !health.is_dead() {
            continue;
        }
        commands.entity(entity).despawn();
        spawn_explosion(
            &mut commands,
            position.0,
            DEATH_EXPLOSION_SIZE,
            DEATH_EXPLOSION_SECS,
        );

        if let Some(kind) = roll_loot(rng.gen::<f64>()) {
            commands.spawn((
                Item::new(kind),
                Position(position.0 + IVec2::new(10, 10)),
                BodySize(ITEM_SIZE),
                MatchEntity,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distant_target_closes_smaller_axis_first() {
        // Warrior far down-right; x gap is smaller but still above the
        // threshold, so the skeleton closes x first.
        let (primary, fallback) = chase_axes(IVec2::new(-100, -400));
        assert_eq!(primary, Dir::Right);
        assert_eq!(fallback, Dir::Down);
    }

    #[test]
    fn near_axis_flips_priority() {
        // Within 32 px horizontally: move vertically instead.
        let (primary, fallback) = chase_axes(IVec2::new(-20, -400));
        assert_eq!(primary, Dir::Down);
        assert_eq!(fallback, Dir::Right);
    }

    #[test]
    fn smaller_vertical_gap_is_closed_first() {
        // Warrior far left but also 40 px up: the smaller axis is still
        // above the threshold, so it is closed before the long approach.
        let (primary, fallback) = chase_axes(IVec2::new(500, 40));
        assert_eq!(primary, Dir::Up);
        assert_eq!(fallback, Dir::Left);
    }

    #[test]
    fn aligned_vertical_axis_moves_along_the_larger() {
        // Within 32 px vertically: approach horizontally.
        let (primary, fallback) = chase_axes(IVec2::new(30, 10));
        assert_eq!(primary, Dir::Left);
        assert_eq!(fallback, Dir::Up);
    }
}
