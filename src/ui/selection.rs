//! Warrior archetype selection screen.

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::{Archetype, SelectedArchetype};

/// Marker for the selection screen root.
#[derive(Component)]
pub struct SelectionRoot;

/// Spawn the archetype cards.
pub fn spawn_selection(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            SelectionRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("CHOOSE YOUR WARRIOR"),
                TextFont {
                    font_size: 44.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.8, 0.3)),
            ));
            for line in [
                "1 - Soldier: 7 hearts, relentless blade, channeled aura",
                "2 - Magician: 3 hearts, swift bolts, devastating blast",
                "3 - Priest: 5 hearts, contact bombs, rocket barrage",
                "",
                "Escape: back",
            ] {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                ));
            }
        });
}

/// Pick an archetype or go back.
pub fn archetype_selection(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let choice = if keyboard.just_pressed(KeyCode::Digit1) {
        Some(Archetype::Soldier)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(Archetype::Magician)
    } else if keyboard.just_pressed(KeyCode::Digit3) {
        Some(Archetype::Priest)
    } else {
        None
    };

    if let Some(archetype) = choice {
        commands.insert_resource(SelectedArchetype(archetype));
        next_state.set(GameState::InGame);
    } else if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::MainMenu);
    }
}
