//! Dive Scoring
//!
//! Maps one gesture to a score, tier and fee. Pure: no state, no I/O, and
//! total over every input (degenerate gestures score as a belly flop).
//!
//! ## Formula
//!
//! ```text
//! style          = classify(|dx|, max(0, -dy) * amplification)
//! height_bonus   = max(0, height / 100 * 20)
//! accuracy       = max(0, 1 - distance_to_center / pool_radius)
//! accuracy_bonus = accuracy * 15
//! rotation_score = max(0, 10 - |turns - optimal_turns| * 5)
//! score          = clamp(round((base + height_bonus + accuracy_bonus
//!                               + rotation_score) * multiplier), 0, 100)
//! fee            = max(0.1, base_fee * fee_modifier * fee_bonus)
//! ```

use std::f64::consts::TAU;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::vec2::finite_or_zero;
use crate::dive::character::Character;
use crate::dive::gesture::{DiveGesture, DEFAULT_VERTICAL_AMPLIFICATION};
use crate::dive::style::DiveStyle;
use crate::dive::tier::DiveTier;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Highest possible score.
pub const MAX_SCORE: u32 = 100;

/// Fee floor, in percent.
pub const MIN_FEE_PERCENT: f64 = 0.1;

/// Base swap fee, in percent.
pub const DEFAULT_BASE_FEE_PERCENT: f64 = 1.0;

/// Half the pool's larger side.
pub const DEFAULT_POOL_RADIUS: f64 = 160.0;

/// Smallest fee bonus accepted; lower values clamp here.
pub const MIN_FEE_BONUS: f64 = 0.01;

/// Height that earns the full height bonus.
const HEIGHT_REFERENCE: f64 = 100.0;
/// Points for a dive reaching `HEIGHT_REFERENCE`.
const HEIGHT_BONUS_POINTS: f64 = 20.0;
/// Points for a dead-center landing.
const ACCURACY_BONUS_POINTS: f64 = 15.0;
/// Points for hitting the optimal rotation exactly.
const ROTATION_BONUS_POINTS: f64 = 10.0;
/// Points lost per turn away from optimal.
const ROTATION_PENALTY_PER_TURN: f64 = 5.0;

// =============================================================================
// CONFIG
// =============================================================================

/// Scoring parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Base swap fee in percent before style and bonus.
    pub base_fee_percent: f64,
    /// Character fee multiplier in (0, 1]. 1 = no bonus.
    pub fee_bonus: f64,
    /// Distance from pool center at which accuracy reaches zero.
    pub pool_radius: f64,
    /// Amplification applied to the upward drag component.
    pub vertical_amplification: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_fee_percent: DEFAULT_BASE_FEE_PERCENT,
            fee_bonus: 1.0,
            pool_radius: DEFAULT_POOL_RADIUS,
            vertical_amplification: DEFAULT_VERTICAL_AMPLIFICATION,
        }
    }
}

impl ScoringConfig {
    /// Default config with a character's fee bonus.
    pub fn for_character(character: Character) -> Self {
        Self::default().with_fee_bonus(character.fee_bonus())
    }

    /// Replace the fee bonus.
    pub fn with_fee_bonus(mut self, fee_bonus: f64) -> Self {
        self.fee_bonus = fee_bonus;
        self
    }

    /// Copy with every field pulled into its valid range.
    pub fn normalized(&self) -> Self {
        let fee_bonus = if self.fee_bonus.is_nan() {
            1.0
        } else {
            self.fee_bonus.clamp(MIN_FEE_BONUS, 1.0)
        };

        let base_fee_percent = if self.base_fee_percent.is_finite() {
            self.base_fee_percent.max(0.0)
        } else {
            DEFAULT_BASE_FEE_PERCENT
        };

        let pool_radius = if self.pool_radius.is_finite() {
            self.pool_radius.max(0.0)
        } else {
            DEFAULT_POOL_RADIUS
        };

        let vertical_amplification = if self.vertical_amplification.is_finite() {
            self.vertical_amplification.max(0.0)
        } else {
            DEFAULT_VERTICAL_AMPLIFICATION
        };

        Self {
            base_fee_percent,
            fee_bonus,
            pool_radius,
            vertical_amplification,
        }
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Outcome of one scored dive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiveResult {
    /// Score in [0, 100]
    pub score: u32,
    /// Bracket for `score`
    pub tier: DiveTier,
    /// Swap fee in percent, never below `MIN_FEE_PERCENT`
    pub fee_percentage: f64,
    /// Classified technique
    pub style: DiveStyle,
    /// Full turns completed in flight
    pub rotations: f64,
    /// Entry angle in degrees, [0, 360)
    pub angle: f64,
}

impl DiveResult {
    /// How the player should feel about this fee.
    pub fn fee_rating(&self) -> FeeRating {
        FeeRating::from_fee(self.fee_percentage)
    }
}

/// Player-facing verdict on a fee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeeRating {
    /// At most 0.5%
    Excellent,
    /// At most 1.0%
    Normal,
    /// Above 1.0%
    Costly,
}

impl FeeRating {
    /// Rate a fee percentage.
    pub fn from_fee(fee_percentage: f64) -> FeeRating {
        if fee_percentage <= 0.5 {
            FeeRating::Excellent
        } else if fee_percentage <= 1.0 {
            FeeRating::Normal
        } else {
            FeeRating::Costly
        }
    }

    /// Message shown under the result.
    pub fn message(self) -> &'static str {
        match self {
            FeeRating::Excellent => "Excellent! Low fees!",
            FeeRating::Normal => "Good dive, normal fees",
            FeeRating::Costly => "Practice more for better fees",
        }
    }
}

/// Individual score components, before rounding and clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBreakdown {
    /// Classified technique
    pub style: DiveStyle,
    /// Style base points
    pub base_score: f64,
    /// Points for height
    pub height_bonus: f64,
    /// Landing accuracy in [0, 1]
    pub accuracy: f64,
    /// Points for accuracy
    pub accuracy_bonus: f64,
    /// Points for rotation
    pub rotation_score: f64,
    /// Style multiplier
    pub multiplier: f64,
}

impl ScoreBreakdown {
    /// Unrounded, unclamped total.
    pub fn raw_total(&self) -> f64 {
        (self.base_score + self.height_bonus + self.accuracy_bonus + self.rotation_score)
            * self.multiplier
    }

    /// Rounded total clamped to [0, MAX_SCORE].
    pub fn final_score(&self) -> u32 {
        let total = self.raw_total().round();
        if total.is_nan() {
            return 0;
        }
        total.clamp(0.0, MAX_SCORE as f64) as u32
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Landing accuracy in [0, 1]. A zero radius pool has no accuracy.
pub fn landing_accuracy(distance: f64, pool_radius: f64) -> f64 {
    if pool_radius <= 0.0 || !pool_radius.is_finite() {
        return 0.0;
    }
    // An infinite distance is a miss, not a bullseye.
    let distance = if distance.is_nan() { 0.0 } else { distance };
    (1.0 - distance / pool_radius).clamp(0.0, 1.0)
}

/// Full turns for an accumulated rotation.
#[inline]
pub fn rotation_turns(rotation_radians: f64) -> f64 {
    finite_or_zero(rotation_radians).abs() / TAU
}

/// Entry angle in degrees, [0, 360).
pub fn entry_angle(rotation_radians: f64) -> f64 {
    let angle = (finite_or_zero(rotation_radians) % TAU).abs().to_degrees();
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Compute score components without rounding.
pub fn score_breakdown(gesture: &DiveGesture, config: &ScoringConfig) -> ScoreBreakdown {
    let config = config.normalized();
    let gesture = gesture.sanitized();

    let summary = gesture.summarize(config.vertical_amplification);
    let style = DiveStyle::classify(&summary);
    let profile = style.profile();

    let height_bonus =
        (gesture.height_above_baseline / HEIGHT_REFERENCE * HEIGHT_BONUS_POINTS).max(0.0);

    let accuracy = landing_accuracy(gesture.landing_offset.length(), config.pool_radius);
    let accuracy_bonus = accuracy * ACCURACY_BONUS_POINTS;

    let turns = rotation_turns(gesture.rotation_radians);
    let rotation_score = (ROTATION_BONUS_POINTS
        - (turns - profile.optimal_turns).abs() * ROTATION_PENALTY_PER_TURN)
        .max(0.0);

    ScoreBreakdown {
        style,
        base_score: profile.base_score,
        height_bonus,
        accuracy,
        accuracy_bonus,
        rotation_score,
        multiplier: profile.score_multiplier,
    }
}

/// Final fee for a style under a config, floored at `MIN_FEE_PERCENT`.
pub fn dive_fee(style: DiveStyle, config: &ScoringConfig) -> f64 {
    let config = config.normalized();
    let fee = config.base_fee_percent * style.profile().fee_modifier * config.fee_bonus;
    fee.max(MIN_FEE_PERCENT)
}

/// Score one dive.
pub fn score_dive(gesture: &DiveGesture, config: &ScoringConfig) -> DiveResult {
    let breakdown = score_breakdown(gesture, config);

    #[cfg(feature = "debug-tracing")]
    tracing::trace!(?breakdown, raw = breakdown.raw_total(), "dive breakdown");

    let score = breakdown.final_score();
    let tier = DiveTier::from_score(score);
    let fee_percentage = dive_fee(breakdown.style, config);

    let result = DiveResult {
        score,
        tier,
        fee_percentage,
        style: breakdown.style,
        rotations: rotation_turns(gesture.rotation_radians),
        angle: entry_angle(gesture.rotation_radians),
    };

    debug!(
        style = result.style.as_str(),
        score = result.score,
        fee = result.fee_percentage,
        "dive scored"
    );

    result
}

// =============================================================================
// TESTS
// =============================================================================
