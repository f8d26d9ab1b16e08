//! Numerical and physical parameters for the simulation
//!
//! `SimParams` holds runtime settings owned by the `Simulator`:
//! - gravitational constant `G`,
//! - external step size `dt`,
//! - integration scheme,
//! - number of internal substeps per external step

use serde::Deserialize;

use super::forces::DEFAULT_G;

/// Which integration scheme `Simulator::step` uses
/// integrator: "euler"` or `integrator: "rk4"
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Integrator {
    #[serde(rename = "euler")] // Semi-implicit Euler, cheap, good long-run energy behavior
    Euler,

    #[default]
    #[serde(rename = "rk4")] // Classical RK4 against a frozen snapshot of the other bodies
    Rk4,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    pub G: f64, // gravitational constant
    pub dt: f64, // external step size
    pub integrator: Integrator,
    substeps: u32, // always >= 1
}

impl SimParams {
    pub fn new(G: f64, dt: f64, integrator: Integrator) -> Self {
        Self {
            G,
            dt,
            integrator,
            substeps: 1,
        }
    }

    pub fn substeps(&self) -> u32 {
        self.substeps
    }

    /// Set the substep count, clamping anything below 1 to 1
    pub fn set_substeps(&mut self, n: i32) {
        if n < 1 {
            log::debug!("substep count {n} clamped to 1");
        }
        self.substeps = n.max(1) as u32;
    }

    /// Internal step size `dt / substeps`
    pub fn substep_dt(&self) -> f64 {
        self.dt / f64::from(self.substeps)
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self::new(DEFAULT_G, 1.0, Integrator::Rk4)
    }
}
