//! Dive Styles
//!
//! Classification of a drag gesture into one of four techniques, and the
//! scoring constants each technique carries.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::dive::gesture::GestureSummary;

// =============================================================================
// CLASSIFICATION THRESHOLDS
// =============================================================================

/// Swan dive: horizontal drag must exceed this...
pub const SWAN_MIN_HORIZONTAL: f64 = 50.0;
/// ...and amplified vertical drag must exceed this.
pub const SWAN_MIN_VERTICAL: f64 = 30.0;
/// Straight dive: amplified vertical drag must exceed this.
pub const STRAIGHT_MIN_VERTICAL: f64 = 60.0;
/// Cannonball: horizontal drag must exceed this.
pub const CANNONBALL_MIN_HORIZONTAL: f64 = 80.0;

// =============================================================================
// STYLE
// =============================================================================

/// Dive technique.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DiveStyle {
    /// Wide and high drag
    SwanDive = 0,
    /// Mostly vertical drag
    StraightDive = 1,
    /// Wide, flat drag
    Cannonball = 2,
    /// Anything else
    BellyFlop = 3,
}

/// Scoring constants for one style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleProfile {
    /// Points before bonuses.
    pub base_score: f64,
    /// Multiplier applied to base plus bonuses.
    pub score_multiplier: f64,
    /// Multiplier applied to the base fee.
    pub fee_modifier: f64,
    /// Turns that earn the full rotation bonus.
    pub optimal_turns: f64,
    /// Rotation added per physics tick, in tenths of a radian.
    pub spin_rate: f64,
}

/// Profiles indexed by `DiveStyle as usize`.
const STYLE_PROFILES: [StyleProfile; 4] = [
    // SwanDive: 30% fee reduction
    StyleProfile { base_score: 70.0, score_multiplier: 1.3, fee_modifier: 0.7, optimal_turns: 0.5, spin_rate: 2.0 },
    // StraightDive: 20% fee reduction
    StyleProfile { base_score: 80.0, score_multiplier: 1.2, fee_modifier: 0.8, optimal_turns: 0.0, spin_rate: 0.0 },
    // Cannonball: 10% fee reduction
    StyleProfile { base_score: 60.0, score_multiplier: 1.1, fee_modifier: 0.9, optimal_turns: 2.0, spin_rate: 8.0 },
    // BellyFlop: 20% fee increase
    StyleProfile { base_score: 20.0, score_multiplier: 0.8, fee_modifier: 1.2, optimal_turns: 0.0, spin_rate: 1.0 },
];

impl DiveStyle {
    /// All styles, in classification priority order.
    pub const ALL: [DiveStyle; 4] = [
        DiveStyle::SwanDive,
        DiveStyle::StraightDive,
        DiveStyle::Cannonball,
        DiveStyle::BellyFlop,
    ];

    /// Classify a gesture summary. First match wins.
    pub fn classify(summary: &GestureSummary) -> DiveStyle {
        let horizontal = summary.horizontal();
        let vertical = summary.vertical;

        if horizontal > SWAN_MIN_HORIZONTAL && vertical > SWAN_MIN_VERTICAL {
            DiveStyle::SwanDive
        } else if vertical > STRAIGHT_MIN_VERTICAL {
            DiveStyle::StraightDive
        } else if horizontal > CANNONBALL_MIN_HORIZONTAL {
            DiveStyle::Cannonball
        } else {
            DiveStyle::BellyFlop
        }
    }

    /// Scoring constants for this style.
    #[inline]
    pub fn profile(self) -> &'static StyleProfile {
        &STYLE_PROFILES[self as usize]
    }

    /// Wire name ("swan_dive").
    pub fn as_str(self) -> &'static str {
        match self {
            DiveStyle::SwanDive => "swan_dive",
            DiveStyle::StraightDive => "straight_dive",
            DiveStyle::Cannonball => "cannonball",
            DiveStyle::BellyFlop => "belly_flop",
        }
    }

    /// Display name ("Swan Dive").
    pub fn label(self) -> &'static str {
        match self {
            DiveStyle::SwanDive => "Swan Dive",
            DiveStyle::StraightDive => "Straight Dive",
            DiveStyle::Cannonball => "Cannonball",
            DiveStyle::BellyFlop => "Belly Flop",
        }
    }

    /// Parse a wire name.
    pub fn from_wire(name: &str) -> Option<DiveStyle> {
        DiveStyle::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for DiveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// TESTS
// =============================================================================
