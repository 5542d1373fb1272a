//! Transient combat objects: bolts, bombs, rockets, explosions.
//!
//! Each mover advances on its own fixed tick and self-terminates on a wall
//! hit, an enemy hit, leaving the map, or lifetime expiry. The terminal
//! match states tear the rest down wholesale.

use bevy::prelude::*;

use super::components::*;
use crate::core::{body, BodySize, DamageSkeleton, MatchEntity, Position};
use crate::enemies::Skeleton;
use crate::world::geometry::{all_intersecting, first_intersecting, is_clear_of_walls, Rect};
use crate::world::Arena;

/// Spawn a transient explosion visual that despawns after `seconds`.
pub fn spawn_explosion(commands: &mut Commands, pos: IVec2, size: IVec2, seconds: f32) {
    commands.spawn((
        Explosion,
        Position(pos),
        BodySize(size),
        Lifetime::seconds(seconds),
        MatchEntity,
    ));
}

/// Advance magician bolts: constant-velocity flight until a wall, a
/// skeleton, or the map edge ends it.
pub fn move_bolts(
    time: Res<Time>,
    mut commands: Commands,
    arena: Res<Arena>,
    mut bolts: Query<(Entity, &mut Bolt, &mut Position, &BodySize)>,
    skeletons: Query<(Entity, &Position, &BodySize), (With<Skeleton>, Without<Bolt>)>,
    mut damage: EventWriter<DamageSkeleton>,
) {
    let map = Rect::new(0, 0, arena.bounds.x, arena.bounds.y);

    for (entity, mut bolt, mut position, size) in bolts.iter_mut() {
        bolt.tick.tick(time.delta());

        for _ in 0..bolt.tick.times_finished_this_tick() {
            position.0 += bolt.dir.delta() * BOLT_STEP;
            let bolt_box = body(&position, size);

            if !is_clear_of_walls(&bolt_box, &arena.walls) {
                spawn_explosion(
                    &mut commands,
                    position.0,
                    IVec2::new(60, 60),
                    BOLT_EXPLOSION_SECS,
                );
                commands.entity(entity).despawn();
                break;
            }

            let (targets, boxes): (Vec<Entity>, Vec<Rect>) = skeletons
                .iter()
                .map(|(e, p, s)| (e, body(p, s)))
                .unzip();
            if let Some(index) = first_intersecting(&bolt_box, &boxes) {
                damage.send(DamageSkeleton {
                    target: targets[index],
                    amount: BOLT_DAMAGE,
                });
                spawn_explosion(
                    &mut commands,
                    position.0,
                    IVec2::new(60, 60),
                    BOLT_EXPLOSION_SECS,
                );
                commands.entity(entity).despawn();
                break;
            }

            if !bolt_box.intersects(&map) {
                commands.entity(entity).despawn();
                break;
            }
        }
    }
}

/// Watch armed bombs: the first skeleton to step on one detonates it,
/// damaging everything inside the blast rectangle.
pub fn update_bombs(
    time: Res<Time>,
    mut commands: Commands,
    mut bombs: Query<(Entity, &mut Bomb, &Position, &BodySize)>,
    skeletons: Query<(Entity, &Position, &BodySize), (With<Skeleton>, Without<Bomb>)>,
    mut damage: EventWriter<DamageSkeleton>,
) {
    for (entity, mut bomb, position, size) in bombs.iter_mut() {
        bomb.tick.tick(time.delta());
        if bomb.tick.times_finished_this_tick() == 0 {
            continue;
        }

        let bomb_box = body(position, size);
        let (targets, boxes): (Vec<Entity>, Vec<Rect>) = skeletons
            .iter()
            .map(|(e, p, s)| (e, body(p, s)))
            .unzip();

        if first_intersecting(&bomb_box, &boxes).is_none() {
            continue;
        }

        let blast = Rect::from_pos_size(position.0 + BOMB_BLAST_OFFSET, BLAST_SIZE);
        for index in all_intersecting(&blast, &boxes) {
            damage.send(DamageSkeleton {
                target: targets[index],
                amount: BLAST_DAMAGE,
            });
        }
        spawn_explosion(
            &mut commands,
            position.0 + BOMB_BLAST_OFFSET,
            BLAST_SIZE,
            BLAST_EXPLOSION_SECS,
        );
        commands.entity(entity).despawn();
    }
}

/// Advance barrage rockets: constant fall until a skeleton or the bottom
/// of the map ends them.
pub fn move_rockets(
    time: Res<Time>,
    mut commands: Commands,
    arena: Res<Arena>,
    mut rockets: Query<(Entity, &mut Rocket, &mut Position, &BodySize)>,
    skeletons: Query<(Entity, &Position, &BodySize), (With<Skeleton>, Without<Rocket>)>,
    mut damage: EventWriter<DamageSkeleton>,
) {
    for (entity, mut rocket, mut position, size) in rockets.iter_mut() {
        rocket.tick.tick(time.delta());

        for _ in 0..rocket.tick.times_finished_this_tick() {
            position.0.y += ROCKET_FALL;
            let rocket_box = body(&position, size);

            let (targets, boxes): (Vec<Entity>, Vec<Rect>) = skeletons
                .iter()
                .map(|(e, p, s)| (e, body(p, s)))
                .unzip();
            if first_intersecting(&rocket_box, &boxes).is_some() {
                let blast = Rect::from_pos_size(position.0 + ROCKET_BLAST_OFFSET, BLAST_SIZE);
                for index in all_intersecting(&blast, &boxes) {
                    damage.send(DamageSkeleton {
                        target: targets[index],
                        amount: BLAST_DAMAGE,
                    });
                }
                spawn_explosion(
                    &mut commands,
                    position.0 + ROCKET_BLAST_OFFSET,
                    BLAST_SIZE,
                    BLAST_EXPLOSION_SECS,
                );
                commands.entity(entity).despawn();
                break;
            }

            if position.0.y > arena.bounds.y - size.0.y {
                commands.entity(entity).despawn();
                break;
            }
        }
    }
}

/// Despawn transient visuals whose lifetime has run out.
pub fn expire_lifetimes(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Lifetime)>,
) {
    for (entity, mut lifetime) in query.iter_mut() {
        lifetime.0.tick(time.delta());
        if lifetime.0.finished() {
            commands.entity(entity).despawn();
        }
    }
}
