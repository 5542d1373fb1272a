//! Main menu - user entry and navigation.

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;

use crate::core::GameState;
use crate::ranking::{create_user, ActiveUser, Gateway, UserRegistry};

/// Marker for the menu screen root.
#[derive(Component)]
pub struct MenuRoot;

/// Marker for the typed-name line.
#[derive(Component)]
pub struct NameText;

/// Marker for the feedback message line.
#[derive(Component)]
pub struct MessageText;

/// The name being typed and the last feedback message.
#[derive(Resource, Default)]
pub struct NameBuffer {
    pub text: String,
    pub message: String,
}

const NAME_LIMIT: usize = 16;

/// Spawn the main menu UI.
pub fn spawn_menu(mut commands: Commands, mut buffer: ResMut<NameBuffer>) {
    buffer.message.clear();

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            MenuRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("FALLEN LEGENDS"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.8, 0.3)),
            ));
            parent.spawn((
                Text::new("Type your name and press Enter"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 34.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                NameText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.4, 0.4)),
                MessageText,
            ));
            parent.spawn((
                Text::new("Tab: ranking"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

/// Handle typing, user confirmation, and menu navigation.
pub fn name_entry(
    mut events: EventReader<KeyboardInput>,
    mut buffer: ResMut<NameBuffer>,
    mut registry: ResMut<UserRegistry>,
    gateway: Res<Gateway>,
    mut active: ResMut<ActiveUser>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        match &event.logical_key {
            Key::Character(text) => {
                for c in text.chars() {
                    if (c.is_alphanumeric() || c == '_') && buffer.text.len() < NAME_LIMIT {
                        buffer.text.push(c);
                    }
                }
            }
            Key::Backspace => {
                buffer.text.pop();
            }
            Key::Tab => {
                next_state.set(GameState::Ranking);
            }
            Key::Enter => {
                let name = buffer.text.trim().to_string();
                if registry.contains(&name) {
                    buffer.message = format!("Welcome back, {name}");
                    active.0 = Some(name);
                    next_state.set(GameState::SelectingWarrior);
                    continue;
                }
                match create_user(&mut registry, &gateway, &name) {
                    Ok(()) => {
                        buffer.message = format!("User {name} created");
                        active.0 = Some(name);
                        next_state.set(GameState::SelectingWarrior);
                    }
                    // Rejected without mutating anything; tell the player.
                    Err(e) => buffer.message = e.to_string(),
                }
            }
            _ => {}
        }
    }
}

/// Mirror the buffer into the menu text nodes.
pub fn update_menu_text(
    buffer: Res<NameBuffer>,
    mut name_text: Query<&mut Text, With<NameText>>,
    mut message_text: Query<&mut Text, (With<MessageText>, Without<NameText>)>,
) {
    if !buffer.is_changed() {
        return;
    }
    if let Ok(mut text) = name_text.get_single_mut() {
        text.0 = format!("> {}_", buffer.text);
    }
    if let Ok(mut text) = message_text.get_single_mut() {
        text.0 = buffer.message.clone();
    }
}
