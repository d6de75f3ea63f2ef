//! Dive Gestures
//!
//! The raw telemetry of one dive attempt, as delivered by the input
//! collaborator at drag-release, and the immutable summary that style
//! classification reads.

use serde::{Serialize, Deserialize};
use crate::core::vec2::{Vec2, finite_or_zero, saturate};

/// Screen y of the diving board baseline. Peak heights are measured upward
/// from here.
pub const SCREEN_BASELINE_Y: f64 = 150.0;

/// Default amplification applied to the upward drag component.
pub const DEFAULT_VERTICAL_AMPLIFICATION: f64 = 2.0;

// =============================================================================
// GESTURE
// =============================================================================

/// Telemetry captured for a single dive.
///
/// Constructed once per drag-and-release, consumed once by the score
/// engine. All fields are sanitised on construction; non-finite input
/// reads as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiveGesture {
    /// Drag displacement from grab point to release point (screen space,
    /// y grows downward, so pulling up gives a negative y).
    pub drag: Vec2,
    /// Milliseconds between release and pool contact.
    pub air_time_ms: f64,
    /// Peak height reached above the baseline.
    pub height_above_baseline: f64,
    /// Landing point relative to the pool center.
    pub landing_offset: Vec2,
    /// Rotation accumulated over the flight, in radians.
    pub rotation_radians: f64,
}

impl DiveGesture {
    /// Create a gesture from a drag vector with no flight telemetry.
    pub fn new(drag: Vec2) -> Self {
        Self {
            drag: drag.sanitized(),
            ..Self::default()
        }
    }

    /// Set peak height above the baseline.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height_above_baseline = finite_or_zero(height);
        self
    }

    /// Set landing offset from the pool center.
    pub fn with_landing(mut self, offset: Vec2) -> Self {
        self.landing_offset = offset.sanitized();
        self
    }

    /// Set accumulated rotation in radians.
    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation_radians = finite_or_zero(radians);
        self
    }

    /// Set air time in milliseconds.
    pub fn with_air_time(mut self, millis: f64) -> Self {
        self.air_time_ms = finite_or_zero(millis).max(0.0);
        self
    }

    /// Build a gesture from raw screen-space points.
    pub fn from_screen(screen: &ScreenDive) -> Self {
        let drag = screen.release - screen.grab;
        let height = (SCREEN_BASELINE_Y - finite_or_zero(screen.peak_y)).max(0.0);
        let landing = screen.landing - screen.pool_center;

        Self::new(drag)
            .with_height(height)
            .with_landing(landing)
            .with_rotation(screen.rotation_radians)
            .with_air_time(screen.air_time_ms)
    }

    /// Copy with every field re-sanitised. Needed when a gesture was built
    /// through its public fields or deserialised.
    pub fn sanitized(self) -> Self {
        Self {
            drag: self.drag.sanitized(),
            air_time_ms: finite_or_zero(self.air_time_ms).max(0.0),
            height_above_baseline: finite_or_zero(self.height_above_baseline),
            landing_offset: self.landing_offset.sanitized(),
            rotation_radians: finite_or_zero(self.rotation_radians),
        }
    }

    /// Reduce the drag vector to the two quantities style classification
    /// reads.
    pub fn summarize(&self, vertical_amplification: f64) -> GestureSummary {
        let drag = self.drag.sanitized();
        let amplification = finite_or_zero(vertical_amplification).max(0.0);
        // Pulling up moves the release point to a smaller screen y.
        let lift = (-drag.y).max(0.0);
        GestureSummary::new(drag.x, saturate(lift * amplification))
    }
}

/// Screen-space points recorded by the game engine for one dive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenDive {
    /// Where the drag started.
    pub grab: Vec2,
    /// Where the drag was released.
    pub release: Vec2,
    /// Smallest screen y reached in flight.
    pub peak_y: f64,
    /// Where the diver hit the water.
    pub landing: Vec2,
    /// Center of the pool target.
    pub pool_center: Vec2,
    /// Rotation accumulated in flight (radians).
    pub rotation_radians: f64,
    /// Flight duration in milliseconds.
    pub air_time_ms: f64,
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Immutable classification input derived from a gesture's drag vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureSummary {
    /// Signed horizontal drag.
    pub dx: f64,
    /// Amplified upward drag, never negative.
    pub vertical: f64,
}

impl GestureSummary {
    /// Create a summary. Non-finite values read as zero; vertical is
    /// floored at zero.
    pub fn new(dx: f64, vertical: f64) -> Self {
        Self {
            dx: finite_or_zero(dx),
            vertical: finite_or_zero(vertical).max(0.0),
        }
    }

    /// Horizontal magnitude.
    #[inline]
    pub fn horizontal(&self) -> f64 {
        self.dx.abs()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dive::style::DiveStyle;

    #[test]
    fn test_summary_amplifies_upward_drag() {
        // Dragged 20 up and 60 right.
        let gesture = DiveGesture::new(Vec2::new(60.0, -20.0));
        let summary = gesture.summarize(DEFAULT_VERTICAL_AMPLIFICATION);
        assert_eq!(summary.dx, 60.0);
        assert_eq!(summary.vertical, 40.0);
    }

    #[test]
    fn test_downward_drag_has_no_vertical_component() {
        let gesture = DiveGesture::new(Vec2::new(-10.0, 35.0));
        let summary = gesture.summarize(DEFAULT_VERTICAL_AMPLIFICATION);
        assert_eq!(summary.vertical, 0.0);
        assert_eq!(summary.horizontal(), 10.0);
    }

    #[test]
    fn test_nan_gesture_summarizes_to_zero() {
        let gesture = DiveGesture {
            drag: Vec2 { x: f64::NAN, y: f64::NAN },
            ..DiveGesture::default()
        };
        let summary = gesture.summarize(f64::NAN);
        assert_eq!(summary, GestureSummary::default());
    }

    #[test]
    fn test_huge_upward_drag_saturates() {
        let summary = DiveGesture::new(Vec2::new(0.0, -1e308)).summarize(DEFAULT_VERTICAL_AMPLIFICATION);
        assert_eq!(summary.vertical, f64::MAX);
        assert_eq!(DiveStyle::classify(&summary), DiveStyle::StraightDive);
    }

    #[test]
    fn test_from_screen_overflowing_drag_saturates() {
        let screen = ScreenDive {
            grab: Vec2::new(0.0, f64::MAX),
            release: Vec2::new(0.0, -f64::MAX),
            ..ScreenDive::default()
        };
        let gesture = DiveGesture::from_screen(&screen);
        assert_eq!(gesture.drag, Vec2::new(0.0, f64::MIN));
        assert_eq!(gesture.summarize(DEFAULT_VERTICAL_AMPLIFICATION).vertical, f64::MAX);
    }

    #[test]
    fn test_from_screen() {
        let screen = ScreenDive {
            grab: Vec2::new(200.0, 100.0),
            release: Vec2::new(260.0, 70.0),
            peak_y: 40.0,
            landing: Vec2::new(330.0, 410.0),
            pool_center: Vec2::new(300.0, 370.0),
            rotation_radians: 3.0,
            air_time_ms: 900.0,
        };
        let gesture = DiveGesture::from_screen(&screen);

        assert_eq!(gesture.drag, Vec2::new(60.0, -30.0));
        assert_eq!(gesture.height_above_baseline, 110.0);
        assert_eq!(gesture.landing_offset, Vec2::new(30.0, 40.0));
        assert_eq!(gesture.rotation_radians, 3.0);
        assert_eq!(gesture.air_time_ms, 900.0);
    }

    #[test]
    fn test_from_screen_peak_below_baseline() {
        let screen = ScreenDive {
            peak_y: 220.0,
            ..ScreenDive::default()
        };
        assert_eq!(DiveGesture::from_screen(&screen).height_above_baseline, 0.0);
    }

    #[test]
    fn test_sanitized_clears_public_field_garbage() {
        let gesture = DiveGesture {
            drag: Vec2 { x: 1.0, y: f64::INFINITY },
            air_time_ms: -5.0,
            height_above_baseline: f64::NAN,
            landing_offset: Vec2 { x: f64::NAN, y: 3.0 },
            rotation_radians: f64::NEG_INFINITY,
        }
        .sanitized();

        assert_eq!(gesture.drag, Vec2::new(1.0, 0.0));
        assert_eq!(gesture.air_time_ms, 0.0);
        assert_eq!(gesture.height_above_baseline, 0.0);
        assert_eq!(gesture.landing_offset, Vec2::new(0.0, 3.0));
        assert_eq!(gesture.rotation_radians, 0.0);
    }
}
