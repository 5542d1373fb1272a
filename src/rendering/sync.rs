//! Syncs authoritative gameplay state to 2D sprites.
//!
//! Gameplay positions are integer pixels with +y pointing down and the
//! origin at the arena's top-left; render space is Bevy's y-up world. The
//! conversion lives here and nowhere else. Gameplay code never touches a
//! sprite or transform.

use bevy::prelude::*;

use crate::combat::{Bolt, Bomb, Explosion, Rocket};
use crate::core::{BodySize, MatchEntity, Position};
use crate::enemies::Skeleton;
use crate::items::{Item, ItemKind};
use crate::player::Warrior;
use crate::world::Arena;

/// Render depth per entity class, back to front.
mod layer {
    pub const FLOOR: f32 = 0.0;
    pub const WALL: f32 = 1.0;
    pub const ITEM: f32 = 2.0;
    pub const DEVICE: f32 = 3.0;
    pub const SKELETON: f32 = 4.0;
    pub const WARRIOR: f32 = 5.0;
    pub const EXPLOSION: f32 = 6.0;
}

/// Convert a gameplay rect to a render translation at the given depth.
fn render_translation(pos: IVec2, size: IVec2, z: f32) -> Vec3 {
    Vec3::new(
        pos.x as f32 + size.x as f32 / 2.0,
        -(pos.y as f32 + size.y as f32 / 2.0),
        z,
    )
}

/// Spawn the camera over the arena center.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            // The 1920x1080 arena in a 1280x720 window.
            scale: 1.5,
            ..OrthographicProjection::default_2d()
        },
        Transform::from_xyz(960.0, -540.0, 0.0),
    ));
}

/// Draw the static arena: floor regions below, wall segments above.
pub fn spawn_arena_tiles(mut commands: Commands, arena: Res<Arena>) {
    for floor in &arena.floors {
        commands.spawn((
            Sprite {
                color: Color::srgb(0.16, 0.13, 0.10),
                custom_size: Some(Vec2::new(floor.w as f32, floor.h as f32)),
                ..default()
            },
            Transform::from_translation(render_translation(
                IVec2::new(floor.x, floor.y),
                IVec2::new(floor.w, floor.h),
                layer::FLOOR,
            )),
            MatchEntity,
        ));
    }
    for wall in &arena.walls {
        commands.spawn((
            Sprite {
                color: Color::srgb(0.45, 0.42, 0.38),
                custom_size: Some(Vec2::new(wall.w as f32, wall.h as f32)),
                ..default()
            },
            Transform::from_translation(render_translation(
                IVec2::new(wall.x, wall.y),
                IVec2::new(wall.w, wall.h),
                layer::WALL,
            )),
            MatchEntity,
        ));
    }
}

/// Give every newly spawned gameplay entity a sprite matching its class.
#[allow(clippy::type_complexity)]
pub fn attach_sprites(
    mut commands: Commands,
    query: Query<
        (
            Entity,
            &Position,
            &BodySize,
            Option<&Warrior>,
            Option<&Skeleton>,
            Option<&Item>,
            Option<&Bolt>,
            Option<&Bomb>,
            Option<&Rocket>,
            Option<&Explosion>,
        ),
        Added<Position>,
    >,
) {
    for (entity, position, size, warrior, skeleton, item, bolt, bomb, rocket, explosion) in
        query.iter()
    {
        let (color, z) = if warrior.is_some() {
            (Color::srgb(0.25, 0.55, 0.95), layer::WARRIOR)
        } else if skeleton.is_some() {
            (Color::srgb(0.85, 0.85, 0.80), layer::SKELETON)
        } else if let Some(item) = item {
            let color = match item.kind {
                ItemKind::Mana => Color::srgb(0.30, 0.60, 1.00),
                ItemKind::Life => Color::srgb(0.90, 0.25, 0.30),
                ItemKind::Emerald => Color::srgb(0.20, 0.85, 0.40),
            };
            (color, layer::ITEM)
        } else if bolt.is_some() {
            (Color::srgb(0.45, 0.90, 1.00), layer::DEVICE)
        } else if bomb.is_some() {
            (Color::srgb(0.25, 0.22, 0.20), layer::DEVICE)
        } else if rocket.is_some() {
            (Color::srgb(0.95, 0.55, 0.20), layer::DEVICE)
        } else if explosion.is_some() {
            (Color::srgb(1.00, 0.85, 0.30), layer::EXPLOSION)
        } else {
            continue;
        };

        commands.entity(entity).insert((
            Sprite {
                color,
                custom_size: Some(Vec2::new(size.0.x as f32, size.0.y as f32)),
                ..default()
            },
            Transform::from_translation(render_translation(position.0, size.0, z)),
        ));
    }
}

/// Copy gameplay positions into render transforms.
pub fn sync_transforms(mut query: Query<(&Position, &BodySize, &mut Transform)>) {
    for (position, size, mut transform) in query.iter_mut() {
        let z = transform.translation.z;
        transform.translation = render_translation(position.0, size.0, z);
    }
}

