//! Ranking plugin - store loading and victory recording.

use bevy::prelude::*;

use super::error::UserCreateError;
use super::gateway::Gateway;
use super::records::{ActiveUser, RankingBoard, Round, UserRegistry};
use super::store::{RonRankingStore, RANKING_PATH};
use crate::core::{GameState, MatchClock, TeardownSet};
use crate::player::{Archetype, Warrior};

/// Ranking plugin - users, rounds, and their persistence.
pub struct RankingPlugin;

impl Plugin for RankingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gateway(Box::new(RonRankingStore::new(RANKING_PATH))))
            .init_resource::<UserRegistry>()
            .init_resource::<RankingBoard>()
            .init_resource::<ActiveUser>()
            .add_systems(OnEnter(GameState::Loading), load_ranking)
            .add_systems(
                OnEnter(GameState::Victory),
                record_victory.before(TeardownSet),
            );
    }
}

/// Load users and rounds from the store into the in-memory registry and
/// ranking board. Store failures leave both empty; the game plays on.
fn load_ranking(
    gateway: Res<Gateway>,
    mut registry: ResMut<UserRegistry>,
    mut board: ResMut<RankingBoard>,
) {
    let users = match gateway.0.list_users() {
        Ok(users) => users,
        Err(e) => {
            error!("could not load users from the ranking store: {e}");
            return;
        }
    };
    for user in &users {
        if let Err(e) = registry.create(&user.name) {
            warn!("skipping stored user: {e}");
        }
    }

    let rounds = match gateway.0.list_rounds() {
        Ok(rounds) => rounds,
        Err(e) => {
            error!("could not load rounds from the ranking store: {e}");
            return;
        }
    };
    for record in rounds {
        let Some(user) = users.iter().find(|u| u.id == record.user_id) else {
            warn!("round references unknown user id {}", record.user_id);
            continue;
        };
        let round = Round::new(record.warrior, record.seconds, user.name.clone());
        if let Some(entry) = registry.get_mut(&user.name) {
            entry.rounds.insert(round.clone());
        }
        board.insert(round);
    }

    info!(
        "ranking loaded: {} users, {} rounds",
        registry.len(),
        board.len()
    );
}

/// Register a user in the in-memory registry and persist it.
///
/// Validation failures are returned to the caller untouched; a persistence
/// failure is logged and the in-memory registration stands.
pub fn create_user(
    registry: &mut UserRegistry,
    gateway: &Gateway,
    name: &str,
) -> Result<(), UserCreateError> {
    registry.create(name)?;
    if let Err(e) = gateway.0.insert_user(name) {
        error!("could not persist user '{name}': {e}");
    }
    Ok(())
}

/// Build the Round for a victorious match, rank it, and persist it.
///
/// Runs on entering Victory, before match teardown. Persistence failures
/// are logged and never block the return to the menu.
pub fn record_victory(
    clock: Res<MatchClock>,
    active: Res<ActiveUser>,
    gateway: Res<Gateway>,
    mut registry: ResMut<UserRegistry>,
    mut board: ResMut<RankingBoard>,
    warrior: Query<&Archetype, With<Warrior>>,
) {
    let archetype = *warrior
        .get_single()
        .expect("victory declared without a warrior entity");

    let Some(name) = active.0.clone() else {
        error!("no active user; the round will not be recorded");
        return;
    };

    let round = Round::new(archetype, clock.seconds(), name.clone());
    info!(
        "recording victory: {} in {:.3}s as {}",
        name,
        round.seconds,
        archetype.label()
    );

    if let Some(user) = registry.get_mut(&name) {
        user.rounds.insert(round.clone());
    }
    if !board.insert(round.clone()) {
        info!("an equal time is already ranked; the earlier entry stands");
    }

    match gateway.0.lookup_user_id(&name) {
        Ok(Some(user_id)) => {
            if let Err(e) = gateway.0.insert_round(archetype, round.seconds, user_id) {
                error!("could not persist the round: {e}");
            }
        }
        Ok(None) => error!("user '{name}' is missing from the ranking store; round not persisted"),
        Err(e) => error!("could not look up the user id: {e}"),
    }
}
