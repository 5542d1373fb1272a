//! UI plugin - wires every screen to its state.

use bevy::prelude::*;

use super::hud::{self, HudRoot};
use super::menu::{self, MenuRoot, NameBuffer};
use super::ranking_screen::{self, RankingRoot};
use super::selection::{self, SelectionRoot};
use crate::core::{GameState, MatchClock};

/// Marker for a match-result banner.
#[derive(Component)]
pub struct BannerRoot;

/// UI plugin - menus, HUD, ranking, result banners.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NameBuffer>()
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), menu::spawn_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup::<MenuRoot>)
            .add_systems(
                Update,
                (menu::name_entry, menu::update_menu_text)
                    .chain()
                    .run_if(in_state(GameState::MainMenu)),
            )
            // Archetype selection
            .add_systems(OnEnter(GameState::SelectingWarrior), selection::spawn_selection)
            .add_systems(OnExit(GameState::SelectingWarrior), cleanup::<SelectionRoot>)
            .add_systems(
                Update,
                selection::archetype_selection.run_if(in_state(GameState::SelectingWarrior)),
            )
            // HUD
            .add_systems(OnEnter(GameState::InGame), hud::spawn_hud)
            .add_systems(OnExit(GameState::InGame), cleanup::<HudRoot>)
            .add_systems(Update, hud::update_hud.run_if(in_state(GameState::InGame)))
            // Ranking screen
            .add_systems(OnEnter(GameState::Ranking), ranking_screen::spawn_ranking)
            .add_systems(OnExit(GameState::Ranking), cleanup::<RankingRoot>)
            .add_systems(
                Update,
                ranking_screen::ranking_input.run_if(in_state(GameState::Ranking)),
            )
            // Result banners
            .add_systems(OnEnter(GameState::Victory), spawn_victory_banner)
            .add_systems(OnExit(GameState::Victory), cleanup::<BannerRoot>)
            .add_systems(OnEnter(GameState::Defeat), spawn_defeat_banner)
            .add_systems(OnExit(GameState::Defeat), cleanup::<BannerRoot>);
    }
}

/// Despawn every entity carrying the screen's root marker.
fn cleanup<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

fn spawn_banner(commands: &mut Commands, headline: &str, detail: String, color: Color) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BannerRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(headline),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(color),
            ));
            parent.spawn((
                Text::new(detail),
                TextFont {
                    font_size: 26.0,
                    ..default()
                },
            ));
        });
}

fn spawn_victory_banner(mut commands: Commands, clock: Option<Res<MatchClock>>) {
    let detail = match clock {
        Some(clock) => format!("Ten emeralds in {:.3}s", clock.seconds()),
        None => "Ten emeralds collected".to_string(),
    };
    spawn_banner(
        &mut commands,
        "VICTORY",
        detail,
        Color::srgb(0.3, 0.9, 0.4),
    );
}

fn spawn_defeat_banner(mut commands: Commands) {
    spawn_banner(
        &mut commands,
        "DEFEAT",
        "The horde prevails".to_string(),
        Color::srgb(0.9, 0.25, 0.25),
    );
}
