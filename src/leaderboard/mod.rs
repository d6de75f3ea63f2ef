//! Leaderboard Ranker
//!
//! Keeps the top scored dives in rank order and persists them through a
//! pluggable store.
//!
//! - `entry`: The persisted record
//! - `ranker`: Pure ranking state and the store-backed leaderboard
//! - `store`: Storage contract plus memory and JSON-file backends

pub mod entry;
pub mod ranker;
pub mod store;

pub use entry::LeaderboardEntry;
pub use ranker::{Leaderboard, LeaderboardState, MAX_ENTRIES};
pub use store::{JsonFileStore, LeaderboardStore, MemoryStore, StoreError, LEADERBOARD_KEY};
