//! 2D Vector
//!
//! Plain f64 vector for drag displacements and landing offsets.
//! Every constructor sanitises its input: NaN and infinite components
//! collapse to zero so downstream scoring never sees a non-finite value.
//! Arithmetic on finite components saturates at `±f64::MAX` instead.

use std::fmt;
use std::ops::Sub;
use serde::{Serialize, Deserialize};

/// Replace a non-finite value with zero.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clamp an overflowed result of finite operands to `±f64::MAX`.
/// NaN still reads as zero.
#[inline]
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// 2D vector with f64 components.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component (screen space, grows right)
    pub x: f64,
    /// Y component (screen space, grows down)
    pub y: f64,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector. Non-finite components become zero.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
        }
    }

    /// Re-apply sanitisation (for values built through the public fields).
    #[inline]
    pub fn sanitized(self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (a, b) = (self.sanitized(), rhs.sanitized());
        Self {
            x: saturate(a.x - b.x),
            y: saturate(a.y - b.y),
        }
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.3}, {:.3})", self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================
