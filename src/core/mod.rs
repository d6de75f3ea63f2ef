//! Core primitives.
//!
//! Small value types shared by the score engine and the leaderboard.

pub mod vec2;
pub mod hash;

// Re-export core types
pub use vec2::{Vec2, finite_or_zero, saturate};
pub use hash::{StateHash, StateHasher};
