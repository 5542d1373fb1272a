//! In-game HUD - hearts, mana pips, emerald counter.
//!
//! The HUD polls the warrior's authoritative state every frame; gameplay
//! never reaches into these nodes.

use bevy::prelude::*;

use crate::combat::Health;
use crate::player::{Emeralds, Mana, SelectedArchetype, Warrior, MANA_CAP};

/// Marker for the HUD root.
#[derive(Component)]
pub struct HudRoot;

/// One heart slot; lit while the warrior's health exceeds its index.
#[derive(Component)]
pub struct HeartIcon(pub i32);

/// One mana pip slot; lit while the warrior's mana exceeds its index.
#[derive(Component)]
pub struct ManaPip(pub u8);

/// The emerald counter text.
#[derive(Component)]
pub struct EmeraldCounter;

const HEART_LIT: Color = Color::srgb(0.90, 0.20, 0.25);
const HEART_DEPLETED: Color = Color::srgb(0.25, 0.10, 0.10);
const PIP_LIT: Color = Color::srgb(0.30, 0.65, 1.00);
const PIP_EMPTY: Color = Color::srgb(0.10, 0.15, 0.25);

/// Spawn the HUD for the selected archetype.
pub fn spawn_hud(mut commands: Commands, selected: Res<SelectedArchetype>) {
    let max_hearts = selected.0.base_health();

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            // Hearts
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|row| {
                    for i in 0..max_hearts {
                        row.spawn((
                            Node {
                                width: Val::Px(26.0),
                                height: Val::Px(26.0),
                                ..default()
                            },
                            BackgroundColor(HEART_LIT),
                            HeartIcon(i),
                        ));
                    }
                });

            // Mana pips
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(3.0),
                    ..default()
                })
                .with_children(|row| {
                    for i in 0..MANA_CAP {
                        row.spawn((
                            Node {
                                width: Val::Px(18.0),
                                height: Val::Px(18.0),
                                ..default()
                            },
                            BackgroundColor(PIP_EMPTY),
                            ManaPip(i),
                        ));
                    }
                });

            // Emerald counter
            parent.spawn((
                Text::new("0 x"),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgb(0.20, 0.85, 0.40)),
                EmeraldCounter,
            ));
        });
}

/// Poll warrior state into the HUD.
pub fn update_hud(
    warrior: Query<(&Health, &Mana, &Emeralds), With<Warrior>>,
    mut hearts: Query<(&HeartIcon, &mut BackgroundColor)>,
    mut pips: Query<(&ManaPip, &mut BackgroundColor), Without<HeartIcon>>,
    mut counter: Query<&mut Text, With<EmeraldCounter>>,
) {
    let Ok((health, mana, emeralds)) = warrior.get_single() else {
        return;
    };

    for (heart, mut color) in hearts.iter_mut() {
        color.0 = if heart.0 < health.current {
            HEART_LIT
        } else {
            HEART_DEPLETED
        };
    }

    for (pip, mut color) in pips.iter_mut() {
        color.0 = if pip.0 < mana.0 { PIP_LIT } else { PIP_EMPTY };
    }

    if let Ok(mut text) = counter.get_single_mut() {
        text.0 = format!("{} x", emeralds.0);
    }
}
