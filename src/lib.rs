//! Fallen Legends - a 2D top-down arena brawler in Bevy.
//!
//! One warrior against an endless skeleton horde: collect ten emeralds to
//! win the match, and the fastest victories climb a persistent ranking.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, the match clock and controller
//! - **World**: The fixed arena map and the collision utility
//! - **Player**: Warrior archetypes, stats, input, movement
//! - **Combat**: Attacks, ultimates, projectiles, bombs, auras
//! - **Enemies**: Skeleton spawning, chase AI, contact damage, loot
//! - **Items**: Dropped loot and pickup watching
//! - **Ranking**: Users, completed rounds, the persistence gateway
//! - **Rendering**: Syncs authoritative gameplay state to sprites
//! - **UI**: Menus, HUD, ranking screen

pub mod combat;
pub mod core;
pub mod enemies;
pub mod items;
pub mod player;
pub mod ranking;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct FallenLegendsPlugin;

impl Plugin for FallenLegendsPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Arena map and collision data
            .add_plugins(world::WorldPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // Loot pickups
            .add_plugins(items::ItemPlugin)

            // Ranking and persistence
            .add_plugins(ranking::RankingPlugin)

            // Presentation
            .add_plugins(rendering::RenderingPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
