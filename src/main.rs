//! Fallen Legends - Entry Point
//!
//! A 2D top-down arena game: pick a warrior, survive the skeleton horde,
//! and collect ten emeralds before you fall.
//!
//! Controls:
//! - WASD: Move
//! - P: Attack
//! - O: Ultimate (only at 0 or 10 mana)
//! - T: Debug cheat (grants 10 emeralds)
//! - 1/2/3: Pick a warrior on the selection screen

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Fallen Legends".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(fallen_legends::FallenLegendsPlugin)

        .run();
}
