//! Attack and ultimate execution, dispatched per warrior archetype.
//!
//! Each archetype keeps the same shape: the attack reads the warrior's
//! facing and either strikes directly (soldier), spawns a transient combat
//! object (magician bolt, priest bomb), or is refused by its cooldown. The
//! ultimates drain the full mana gauge and run as small state machines of
//! scheduled phases: channel, activate, expire.

use bevy::prelude::*;
use rand::Rng;

use super::components::*;
use super::projectiles::spawn_explosion;
use crate::core::{
    body, AttackInput, BodySize, DamageSkeleton, MatchEntity, Pose, Position, UltimateInput,
};
use crate::enemies::Skeleton;
use crate::player::{Archetype, Invincible, Mana, Warrior};
use crate::world::geometry::{all_intersecting, first_intersecting, validate_move, Dir, Rect};
use crate::world::Arena;

/// Collect skeleton entities and bounding boxes in list order.
fn skeleton_boxes(
    skeletons: &Query<(Entity, &Position, &BodySize), (With<Skeleton>, Without<Warrior>)>,
) -> (Vec<Entity>, Vec<Rect>) {
    skeletons.iter().map(|(e, p, s)| (e, body(p, s))).unzip()
}

/// Execute a primary attack for the warrior's archetype.
pub fn execute_attack(
    mut commands: Commands,
    mut events: EventReader<AttackInput>,
    arena: Res<Arena>,
    mut warrior: Query<
        (
            Entity,
            &Archetype,
            &mut Position,
            &BodySize,
            &Pose,
            &mut Invincible,
            Option<&mut AttackCooldown>,
        ),
        (With<Warrior>, Without<Channeling>),
    >,
    skeletons: Query<(Entity, &Position, &BodySize), (With<Skeleton>, Without<Warrior>)>,
    mut damage: EventWriter<DamageSkeleton>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let Ok((entity, archetype, mut position, size, pose, mut invincible, cooldown)) =
        warrior.get_single_mut()
    else {
        return;
    };

    match archetype {
        // Melee strike: brief invincibility, a validated lunge in the
        // facing direction, 3 damage to the first skeleton overlapping the
        // post-lunge body.
        Archetype::Soldier => {
            invincible.0 = true;
            commands.entity(entity).insert(AttackPose::new(pose.facing));

            let current = body(&position, size);
            let permitted = validate_move(&current, &arena.walls, SOLDIER_LUNGE, pose.facing);
            position.0 += pose.facing.delta() * permitted;

            let strike_box = body(&position, size);
            let (targets, boxes) = skeleton_boxes(&skeletons);
            if let Some(index) = first_intersecting(&strike_box, &boxes) {
                damage.send(DamageSkeleton {
                    target: targets[index],
                    amount: SOLDIER_ATTACK_DAMAGE,
                });
            }
        }
        Archetype::Magician => {
            let Some(mut cooldown) = cooldown else {
                return;
            };
            if cooldown.is_ready() {
                spawn_bolt(&mut commands, &position, size, pose.facing);
                cooldown.restart();
            }
        }
        Archetype::Priest => {
            let Some(mut cooldown) = cooldown else {
                return;
            };
            if cooldown.is_ready() {
                commands.spawn((
                    Bomb::default(),
                    Position(position.0),
                    BodySize(IVec2::splat(BOMB_SIZE)),
                    MatchEntity,
                ));
                cooldown.restart();
            }
        }
    }
}

/// Spawn a magician bolt at the warrior's body edge for the given facing.
fn spawn_bolt(commands: &mut Commands, position: &Position, size: &BodySize, dir: Dir) {
    let bolt_size = Bolt::size(dir);
    let origin = match dir {
        Dir::Left => IVec2::new(position.0.x - bolt_size.x, position.0.y + 4),
        Dir::Right => IVec2::new(position.0.x + size.0.x, position.0.y + 4),
        Dir::Down => IVec2::new(position.0.x + 4, position.0.y + size.0.y),
        Dir::Up => IVec2::new(position.0.x + 4, position.0.y - size.0.y),
    };
    commands.spawn((
        Bolt::new(dir),
        Position(origin),
        BodySize(bolt_size),
        MatchEntity,
    ));
}

/// Begin the ultimate for the warrior's archetype. The full mana gauge is
/// consumed up front in every case.
pub fn execute_ultimate(
    mut commands: Commands,
    mut events: EventReader<UltimateInput>,
    mut warrior: Query<
        (Entity, &Archetype, &mut Mana, &mut Invincible),
        (With<Warrior>, Without<Channeling>),
    >,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let Ok((entity, archetype, mut mana, mut invincible)) = warrior.get_single_mut() else {
        return;
    };

    mana.clear();
    match archetype {
        Archetype::Soldier => {
            invincible.0 = true;
            commands
                .entity(entity)
                .insert((Channeling, SoldierChannel::default()));
        }
        Archetype::Magician => {
            invincible.0 = true;
            commands
                .entity(entity)
                .insert((Channeling, MagicianChannel::default()));
        }
        Archetype::Priest => {
            commands.entity(entity).insert(Bombardment::default());
        }
    }
}

/// Revert the soldier's attack pose and its invincibility window.
pub fn update_attack_pose(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut AttackPose, &mut Invincible), With<Warrior>>,
) {
    for (entity, mut attack_pose, mut invincible) in query.iter_mut() {
        attack_pose.timer.tick(time.delta());
        if attack_pose.timer.finished() {
            invincible.0 = false;
            commands.entity(entity).remove::<AttackPose>();
        }
    }
}

/// Finish the soldier's channel and ignite the aura.
pub fn update_soldier_channel(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut SoldierChannel), With<Warrior>>,
) {
    for (entity, mut channel) in query.iter_mut() {
        channel.0.tick(time.delta());
        if channel.0.finished() {
            commands
                .entity(entity)
                .remove::<(SoldierChannel, Channeling)>()
                .insert(Aura::default());
        }
    }
}

/// Damage every skeleton touching the warrior on each aura tick, then shut
/// the aura down when its duration runs out.
pub fn update_aura(
    time: Res<Time>,
    mut commands: Commands,
    mut warrior: Query<(Entity, &mut Aura, &Position, &BodySize, &mut Invincible), With<Warrior>>,
    skeletons: Query<(Entity, &Position, &BodySize), (With<Skeleton>, Without<Warrior>)>,
    mut damage: EventWriter<DamageSkeleton>,
) {
    let Ok((entity, mut aura, position, size, mut invincible)) = warrior.get_single_mut() else {
        return;
    };

    aura.tick.tick(time.delta());
    aura.remaining.tick(time.delta());

    let pulses = aura.tick.times_finished_this_tick();
    if pulses > 0 {
        let aura_box = body(position, size);
        let (targets, boxes) = skeleton_boxes(&skeletons);
        for index in all_intersecting(&aura_box, &boxes) {
            for _ in 0..pulses {
                damage.send(DamageSkeleton {
                    target: targets[index],
                    amount: AURA_DAMAGE,
                });
            }
        }
    }

    if aura.remaining.finished() {
        invincible.0 = false;
        commands.entity(entity).remove::<Aura>();
    }
}

/// Land the magician's blast at impact time and lift the lockout when the
/// channel fully resolves.
///
/// Victims are collected when the blast actually lands, so skeletons that
/// die or wander during the channel are judged by where they are, not
/// where they were.
pub fn update_magician_channel(
    time: Res<Time>,
    mut commands: Commands,
    mut warrior: Query<
        (Entity, &mut MagicianChannel, &Position, &BodySize, &mut Invincible),
        With<Warrior>,
    >,
    skeletons: Query<(Entity, &Position, &BodySize), (With<Skeleton>, Without<Warrior>)>,
    mut damage: EventWriter<DamageSkeleton>,
) {
    let Ok((entity, mut channel, position, size, mut invincible)) = warrior.get_single_mut()
    else {
        return;
    };

    channel.impact.tick(time.delta());
    channel.unlock.tick(time.delta());

    if channel.impact.just_finished() {
        let center = body(position, size).center();
        let blast = Rect::new(
            center.x - MAGICIAN_BLAST_SIZE / 2,
            center.y - MAGICIAN_BLAST_SIZE / 2,
            MAGICIAN_BLAST_SIZE,
            MAGICIAN_BLAST_SIZE,
        );
        let (targets, boxes) = skeleton_boxes(&skeletons);
        for index in all_intersecting(&blast, &boxes) {
            damage.send(DamageSkeleton {
                target: targets[index],
                amount: MAGICIAN_BLAST_DAMAGE,
            });
            spawn_explosion(
                &mut commands,
                IVec2::new(boxes[index].x - 19, boxes[index].y - 29),
                IVec2::new(80, 100),
                MAGICIAN_EXPLOSION_SECS,
            );
        }
    }

    if channel.unlock.finished() {
        invincible.0 = false;
        commands
            .entity(entity)
            .remove::<(MagicianChannel, Channeling)>();
    }
}

/// Launch rockets from random positions along the top of the map until the
/// barrage runs dry.
pub fn update_bombardment(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Bombardment), With<Warrior>>,
) {
    for (entity, mut bombardment) in query.iter_mut() {
        bombardment.duration.tick(time.delta());
        bombardment.spawn.tick(time.delta());

        if !bombardment.duration.finished() {
            let mut rng = rand::thread_rng();
            for _ in 0..bombardment.spawn.times_finished_this_tick() {
                let x = ROCKET_X_MIN + rng.gen_range(0..ROCKET_X_SPAN);
                commands.spawn((
                    Rocket::default(),
                    Position(IVec2::new(x, 0)),
                    BodySize(ROCKET_SIZE),
                    MatchEntity,
                ));
            }
        } else {
            commands.entity(entity).remove::<Bombardment>();
        }
    }
}

/// Tick primary-attack cooldowns.
pub fn tick_attack_cooldowns(time: Res<Time>, mut query: Query<&mut AttackCooldown>) {
    for mut cooldown in query.iter_mut() {
        cooldown.0.tick(time.delta());
    }
}
