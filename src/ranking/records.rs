//! Completed-run records, users, and the in-memory ranking set.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use bevy::prelude::*;

use super::error::UserCreateError;
use crate::player::Archetype;

/// A completed, victorious run. Immutable once created.
#[derive(Debug, Clone)]
pub struct Round {
    pub warrior: Archetype,
    pub seconds: f64,
    pub user: String,
}

impl Round {
    pub fn new(warrior: Archetype, seconds: f64, user: impl Into<String>) -> Self {
        Self {
            warrior,
            seconds,
            user: user.into(),
        }
    }
}

// Rounds are ordered purely by elapsed time, fastest first. Two rounds with
// identical times compare equal, so an ordered set keeps whichever was
// inserted first.
impl PartialEq for Round {
    fn eq(&self, other: &Self) -> bool {
        self.seconds.total_cmp(&other.seconds) == Ordering::Equal
    }
}

impl Eq for Round {}

impl PartialOrd for Round {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Round {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds.total_cmp(&other.seconds)
    }
}

/// A registered player and their victory history.
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub rounds: BTreeSet<Round>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rounds: BTreeSet::new(),
        }
    }
}

/// All known users, keyed by name, iterated in registration order.
#[derive(Resource, Default)]
pub struct UserRegistry {
    users: HashMap<String, User>,
    order: Vec<String>,
}

impl UserRegistry {
    /// Register a new user. Empty and duplicate names are rejected without
    /// mutating anything.
    pub fn create(&mut self, name: &str) -> Result<(), UserCreateError> {
        if name.trim().is_empty() {
            return Err(UserCreateError::EmptyName);
        }
        if self.users.contains_key(name) {
            return Err(UserCreateError::Duplicate(name.to_string()));
        }
        self.users.insert(name.to_string(), User::new(name));
        self.order.push(name.to_string());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.get_mut(name)
    }

    /// Users in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.order.iter().filter_map(|name| self.users.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// The displayed ranking: every recorded round, fastest first.
#[derive(Resource, Default)]
pub struct RankingBoard {
    rounds: BTreeSet<Round>,
}

impl RankingBoard {
    /// Insert a round. Returns false when an equal-time round is already
    /// ranked; the earlier entry is kept.
    pub fn insert(&mut self, round: Round) -> bool {
        self.rounds.insert(round)
    }

    /// Rounds in ascending order of elapsed seconds.
    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

/// The user the next match will be recorded for.
#[derive(Resource, Default)]
pub struct ActiveUser(pub Option<String>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_iterate_fastest_first() {
        let mut board = RankingBoard::default();
        board.insert(Round::new(Archetype::Soldier, 12.3, "ana"));
        board.insert(Round::new(Archetype::Magician, 9.8, "bo"));
        board.insert(Round::new(Archetype::Priest, 15.0, "cyn"));

        let times: Vec<f64> = board.iter().map(|r| r.seconds).collect();
        assert_eq!(times, vec![9.8, 12.3, 15.0]);
    }

    #[test]
    fn equal_time_keeps_first_entry() {
        let mut board = RankingBoard::default();
        assert!(board.insert(Round::new(Archetype::Soldier, 10.0, "first")));
        assert!(!board.insert(Round::new(Archetype::Priest, 10.0, "second")));
        assert_eq!(board.len(), 1);
        assert_eq!(board.iter().next().unwrap().user, "first");
    }

    #[test]
    fn registry_rejects_empty_and_duplicate_names() {
        let mut registry = UserRegistry::default();
        assert_eq!(registry.create(""), Err(UserCreateError::EmptyName));
        assert_eq!(registry.create("   "), Err(UserCreateError::EmptyName));
        assert!(registry.create("ana").is_ok());
        assert_eq!(
            registry.create("ana"),
            Err(UserCreateError::Duplicate("ana".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_iterates_in_registration_order() {
        let mut registry = UserRegistry::default();
        registry.create("zed").unwrap();
        registry.create("ana").unwrap();
        let names: Vec<&str> = registry.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["zed", "ana"]);
    }
}
