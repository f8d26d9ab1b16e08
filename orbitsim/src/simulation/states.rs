//! Core state type for the simulation.
//!
//! A `Body` carries its kinematic state (public, mutated by the integrators)
//! and a set of identity fields (mass, radius, color, flags, name) that are
//! fixed at construction and only readable afterwards.

pub use super::vector::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: NVec2, // m
    pub velocity: NVec2, // m/s
    pub acceleration: NVec2, // m/s^2, overwritten every step
    mass: f64, // kg
    radius: f64, // pixels, rendering only
    color: u32, // 0xRRGGBB
    is_satellite: bool,
    is_star: bool,
    name: Option<String>,
}

impl Body {
    pub fn new(mass: f64, position: NVec2, velocity: NVec2, radius: f64, color: u32) -> Self {
        Self {
            position,
            velocity,
            acceleration: NVec2::zeros(),
            mass,
            radius,
            color,
            is_satellite: false,
            is_star: false,
            name: None,
        }
    }

    /// Set the classification flags read by the collision policy
    pub fn with_flags(mut self, is_satellite: bool, is_star: bool) -> Self {
        self.is_satellite = is_satellite;
        self.is_star = is_star;
        self
    }

    /// Attach a display label used by the state export
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn is_satellite(&self) -> bool {
        self.is_satellite
    }

    pub fn is_star(&self) -> bool {
        self.is_star
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(0.0, NVec2::zeros(), NVec2::zeros(), 1.0, 0xFFFFFF)
    }
}
