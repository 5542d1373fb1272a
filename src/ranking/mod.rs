//! Users, completed rounds, and the persistence gateway.

mod error;
mod gateway;
mod plugin;
mod records;
mod store;

pub use error::{RankingError, UserCreateError};
pub use gateway::{Gateway, RankingGateway, RoundRecord, UserRecord};
pub use plugin::{create_user, record_victory, RankingPlugin};
pub use records::{ActiveUser, RankingBoard, Round, User, UserRegistry};
pub use store::{RonRankingStore, RANKING_PATH};
