//! Core game systems - states, events, entity model, match control.

mod clock;
mod entity;
mod events;
mod plugin;
mod states;

pub use clock::{MatchClock, ResultCountdown, CLOCK_TICK, SECONDS_PER_TICK};
pub use entity::{body, BodySize, MatchEntity, Pose, Position, Speed};
pub use events::{AttackInput, DamageSkeleton, UltimateInput, WarriorStruck};
pub use plugin::{CorePlugin, TeardownSet, TickSet};
pub use states::GameState;
