//! Score Tiers
//!
//! Human-readable brackets over the 0-100 score range.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Score bracket, worst to best.
///
/// Serialised as its label so stored leaderboards stay readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DiveTier {
    /// Below 40
    #[serde(rename = "Belly Flop")]
    BellyFlop = 0,
    /// 40-59
    #[serde(rename = "Splash Dive")]
    Splash = 1,
    /// 60-69
    #[serde(rename = "Good Dive")]
    Good = 2,
    /// 70-79
    #[serde(rename = "Great Dive")]
    Great = 3,
    /// 80-89
    #[serde(rename = "Perfect Dive")]
    Perfect = 4,
    /// 90 and above
    #[serde(rename = "Olympic Dive")]
    Olympic = 5,
}

/// Inclusive lower bounds, best tier first.
const TIER_BREAKPOINTS: [(u32, DiveTier); 5] = [
    (90, DiveTier::Olympic),
    (80, DiveTier::Perfect),
    (70, DiveTier::Great),
    (60, DiveTier::Good),
    (40, DiveTier::Splash),
];

impl DiveTier {
    /// All tiers, worst to best.
    pub const ALL: [DiveTier; 6] = [
        DiveTier::BellyFlop,
        DiveTier::Splash,
        DiveTier::Good,
        DiveTier::Great,
        DiveTier::Perfect,
        DiveTier::Olympic,
    ];

    /// Tier for a score.
    pub fn from_score(score: u32) -> DiveTier {
        TIER_BREAKPOINTS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(DiveTier::BellyFlop)
    }

    /// Ordinal rank (0 = worst).
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            DiveTier::Olympic => "Olympic Dive",
            DiveTier::Perfect => "Perfect Dive",
            DiveTier::Great => "Great Dive",
            DiveTier::Good => "Good Dive",
            DiveTier::Splash => "Splash Dive",
            DiveTier::BellyFlop => "Belly Flop",
        }
    }

    /// Badge shown next to a leaderboard row.
    pub fn badge(self) -> &'static str {
        match self {
            DiveTier::Olympic => "🏆",
            DiveTier::Perfect => "🥇",
            DiveTier::Great => "🥈",
            DiveTier::Good => "🥉",
            DiveTier::Splash => "💦",
            DiveTier::BellyFlop => "🤕",
        }
    }
}

impl fmt::Display for DiveTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_breakpoints_inclusive() {
        assert_eq!(DiveTier::from_score(100), DiveTier::Olympic);
        assert_eq!(DiveTier::from_score(90), DiveTier::Olympic);
        assert_eq!(DiveTier::from_score(89), DiveTier::Perfect);
        assert_eq!(DiveTier::from_score(80), DiveTier::Perfect);
        assert_eq!(DiveTier::from_score(70), DiveTier::Great);
        assert_eq!(DiveTier::from_score(60), DiveTier::Good);
        assert_eq!(DiveTier::from_score(59), DiveTier::Splash);
        assert_eq!(DiveTier::from_score(40), DiveTier::Splash);
        assert_eq!(DiveTier::from_score(39), DiveTier::BellyFlop);
        assert_eq!(DiveTier::from_score(0), DiveTier::BellyFlop);
    }

    #[test]
    fn test_label_round_trip() {
        for tier in DiveTier::ALL {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier.label()));
            assert_eq!(serde_json::from_str::<DiveTier>(&json).unwrap(), tier);
        }
        assert!(serde_json::from_str::<DiveTier>("\"Meh Dive\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_tier_monotonic(a in 0u32..=100, b in 0u32..=100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(DiveTier::from_score(lo).rank() <= DiveTier::from_score(hi).rank());
        }
    }
}
