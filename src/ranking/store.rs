//! RON-file implementation of the ranking gateway.
//!
//! The store is a single RON document holding user rows with stable ids
//! and round rows referencing them. Every operation is read-modify-write;
//! the store keeps no in-memory state, so a crashed match never leaves it
//! half-updated.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::RankingError;
use super::gateway::{RankingGateway, RoundRecord, UserRecord};
use crate::player::Archetype;

/// Default location of the ranking store file.
pub const RANKING_PATH: &str = "saves/ranking.ron";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    next_user_id: u64,
    users: Vec<UserRecord>,
    rounds: Vec<RoundRecord>,
}

/// File-backed ranking store.
pub struct RonRankingStore {
    path: PathBuf,
}

impl RonRankingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    /// Read the store file; a missing file is an empty store.
    fn read(&self) -> Result<StoreFile, RankingError> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let contents = fs::read_to_string(&self.path).map_err(|source| RankingError::Io {
            path: self.path_str(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| RankingError::Parse {
            path: self.path_str(),
            source,
        })
    }

    fn write(&self, file: &StoreFile) -> Result<(), RankingError> {
        if let Some(parent) = self.path.parent() {
            if parent != Path::new("") {
                fs::create_dir_all(parent).map_err(|source| RankingError::Io {
                    path: self.path_str(),
                    source,
                })?;
            }
        }
        let contents = ron::ser::to_string_pretty(file, ron::ser::PrettyConfig::default())?;
        fs::write(&self.path, contents).map_err(|source| RankingError::Io {
            path: self.path_str(),
            source,
        })
    }
}

impl RankingGateway for RonRankingStore {
    fn list_users(&self) -> Result<Vec<UserRecord>, RankingError> {
        Ok(self.read()?.users)
    }

    fn list_rounds(&self) -> Result<Vec<RoundRecord>, RankingError> {
        let mut rounds = self.read()?.rounds;
        rounds.sort_by(|a, b| a.seconds.total_cmp(&b.seconds));
        Ok(rounds)
    }

    fn insert_user(&self, name: &str) -> Result<u64, RankingError> {
        let mut file = self.read()?;
        if file.users.iter().any(|u| u.name == name) {
            return Err(RankingError::DuplicateUser(name.to_string()));
        }
        let id = file.next_user_id;
        file.next_user_id += 1;
        file.users.push(UserRecord {
            id,
            name: name.to_string(),
        });
        self.write(&file)?;
        Ok(id)
    }

    fn insert_round(
        &self,
        warrior: Archetype,
        seconds: f64,
        user_id: u64,
    ) -> Result<(), RankingError> {
        let mut file = self.read()?;
        file.rounds.push(RoundRecord {
            warrior,
            seconds,
            user_id,
        });
        self.write(&file)
    }

    fn lookup_user_id(&self, name: &str) -> Result<Option<u64>, RankingError> {
        Ok(self
            .read()?
            .users
            .iter()
            .find(|u| u.name == name)
            .map(|u| u.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A store on a unique temp path, removed when dropped.
    struct TempStore {
        store: RonRankingStore,
        path: PathBuf,
    }

    impl TempStore {
        fn new(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "fallen-legends-ranking-{}-{}.ron",
                tag,
                std::process::id()
            ));
            let _ = fs::remove_file(&path);
            Self {
                store: RonRankingStore::new(&path),
                path,
            }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let temp = TempStore::new("empty");
        assert!(temp.store.list_users().unwrap().is_empty());
        assert!(temp.store.list_rounds().unwrap().is_empty());
    }

    #[test]
    fn users_get_stable_sequential_ids() {
        let temp = TempStore::new("ids");
        let ana = temp.store.insert_user("ana").unwrap();
        let bo = temp.store.insert_user("bo").unwrap();
        assert_ne!(ana, bo);
        assert_eq!(temp.store.lookup_user_id("ana").unwrap(), Some(ana));
        assert_eq!(temp.store.lookup_user_id("bo").unwrap(), Some(bo));
        assert_eq!(temp.store.lookup_user_id("nobody").unwrap(), None);
    }

    #[test]
    fn duplicate_user_insert_is_rejected() {
        let temp = TempStore::new("dup");
        temp.store.insert_user("ana").unwrap();
        assert!(matches!(
            temp.store.insert_user("ana"),
            Err(RankingError::DuplicateUser(_))
        ));
        assert_eq!(temp.store.list_users().unwrap().len(), 1);
    }

    #[test]
    fn rounds_list_ascending_by_seconds() {
        let temp = TempStore::new("rounds");
        let id = temp.store.insert_user("ana").unwrap();
        temp.store
            .insert_round(Archetype::Soldier, 12.3, id)
            .unwrap();
        temp.store
            .insert_round(Archetype::Magician, 9.8, id)
            .unwrap();
        temp.store.insert_round(Archetype::Priest, 15.0, id).unwrap();

        let times: Vec<f64> = temp
            .store
            .list_rounds()
            .unwrap()
            .iter()
            .map(|r| r.seconds)
            .collect();
        assert_eq!(times, vec![9.8, 12.3, 15.0]);
    }
}
