//! The persistence gateway for users and completed rounds.
//!
//! Gameplay talks to the store through this trait only. Every operation
//! can fail; the callers treat failure as non-fatal, logging and carrying
//! on as if the operation had succeeded.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::RankingError;
use crate::player::Archetype;

/// A stored user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
}

/// A stored round row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub warrior: Archetype,
    pub seconds: f64,
    pub user_id: u64,
}

/// Operations the ranking store must support.
pub trait RankingGateway: Send + Sync {
    /// Every stored user, in insertion order.
    fn list_users(&self) -> Result<Vec<UserRecord>, RankingError>;

    /// Every stored round, ascending by elapsed seconds.
    fn list_rounds(&self) -> Result<Vec<RoundRecord>, RankingError>;

    /// Store a new user and return its id.
    fn insert_user(&self, name: &str) -> Result<u64, RankingError>;

    /// Store a completed round.
    fn insert_round(
        &self,
        warrior: Archetype,
        seconds: f64,
        user_id: u64,
    ) -> Result<(), RankingError>;

    /// Resolve a user name to its stored id.
    fn lookup_user_id(&self, name: &str) -> Result<Option<u64>, RankingError>;
}

/// The gateway the game was wired up with.
#[derive(Resource)]
pub struct Gateway(pub Box<dyn RankingGateway>);
