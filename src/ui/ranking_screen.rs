//! Ranking screen - every recorded round, fastest first.

use bevy::prelude::*;

use crate::core::GameState;
use crate::ranking::RankingBoard;

/// Marker for the ranking screen root.
#[derive(Component)]
pub struct RankingRoot;

/// Spawn the ranking list from the in-memory board.
pub fn spawn_ranking(mut commands: Commands, board: Res<RankingBoard>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(30.0)),
                row_gap: Val::Px(8.0),
                ..default()
            },
            RankingRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("RANKING"),
                TextFont {
                    font_size: 44.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.8, 0.3)),
            ));

            if board.is_empty() {
                parent.spawn((
                    Text::new("No victories yet"),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.6, 0.6, 0.6)),
                ));
            }

            for (place, round) in board.iter().enumerate() {
                parent.spawn((
                    Text::new(format!(
                        "{:>2}. {:<16} {:>9.3}s  {}",
                        place + 1,
                        round.user,
                        round.seconds,
                        round.warrior.label()
                    )),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                ));
            }

            parent.spawn((
                Text::new("Escape: back"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

/// Leave the ranking screen.
pub fn ranking_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) || keyboard.just_pressed(KeyCode::Tab) {
        next_state.set(GameState::MainMenu);
    }
}
