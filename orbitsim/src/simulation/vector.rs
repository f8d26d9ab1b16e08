//! 2D vector primitive used throughout the simulation.
//!
//! `NVec2` is a nalgebra `Vector2<f64>`, so addition, subtraction, scalar
//! multiplication/division (scalar on either side for `*`), the in-place
//! accumulation operators and `dot` come from nalgebra directly.
//! [`Vec2Ext`] adds the few helpers whose semantics nalgebra does not match,
//! most importantly a normalization that returns zero instead of NaN.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Length, normalization and distance helpers for [`NVec2`]
pub trait Vec2Ext {
    fn length_squared(&self) -> f64;
    fn length(&self) -> f64;

    /// Unit vector in the same direction, or the zero vector when the length
    /// is exactly zero (no error, no NaN)
    fn normalized_or_zero(&self) -> Self;

    /// Euclidean distance between two points
    fn distance(&self, other: &Self) -> f64;
}

impl Vec2Ext for NVec2 {
    fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    fn normalized_or_zero(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return NVec2::zeros();
        }
        NVec2::new(self.x / len, self.y / len)
    }

    fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
