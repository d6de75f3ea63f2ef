//! Score Engine
//!
//! Turns a captured dive gesture into a score, tier and swap fee.
//! Nothing in this module keeps state or touches I/O.
//!
//! ## Module Structure
//!
//! - `gesture`: Raw dive telemetry and the classification summary
//! - `style`: Style classification and per-style constants
//! - `tier`: Score brackets
//! - `character`: Selectable characters and their fee bonuses
//! - `score`: The scoring formula

pub mod gesture;
pub mod style;
pub mod tier;
pub mod character;
pub mod score;

// Re-export key types
pub use gesture::{DiveGesture, GestureSummary, ScreenDive};
pub use style::{DiveStyle, StyleProfile};
pub use tier::DiveTier;
pub use character::Character;
pub use score::{score_dive, DiveResult, FeeRating, ScoreBreakdown, ScoringConfig};
