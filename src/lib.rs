//! # SwimSwap Dive
//!
//! Scoring and ranking for the "dive to set your swap fee" minigame.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SWIMSWAP DIVE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Shared primitives                         │
//! │  ├── vec2.rs     - 2D vector with NaN sanitisation           │
//! │  └── hash.rs     - State digests for verification            │
//! │                                                              │
//! │  dive/           - Score engine (pure)                       │
//! │  ├── gesture.rs  - Dive telemetry and summary                │
//! │  ├── style.rs    - Style classification                      │
//! │  ├── tier.rs     - Score brackets                            │
//! │  ├── character.rs- Character fee bonuses                     │
//! │  └── score.rs    - Score and fee formula                     │
//! │                                                              │
//! │  leaderboard/    - Ranked top-10 list                        │
//! │  ├── entry.rs    - Persisted record                          │
//! │  ├── ranker.rs   - Ranking state and store binding           │
//! │  └── store.rs    - Memory and JSON-file stores               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! The game collaborator captures a [`DiveGesture`] at drag-release and
//! calls [`score_dive`] once. The resulting [`DiveResult`] is shown to the
//! player and, wrapped in a [`LeaderboardEntry`], folded into a
//! [`Leaderboard`].
//!
//! Scoring is total: any gesture, including NaN or zero-length drags,
//! produces a valid result with a score in [0, 100] and a fee of at least
//! 0.1%.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod dive;
pub mod leaderboard;
pub mod config;

// Re-export commonly used types
pub use crate::core::vec2::Vec2;
pub use dive::{
    score_dive, Character, DiveGesture, DiveResult, DiveStyle, DiveTier, ScoringConfig,
};
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardState, LeaderboardStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
