//! Simulation orchestrator
//!
//! The `Simulator` owns the body collection and its `SimParams`, and turns
//! one external step into `substeps` internal integration passes. Every pass
//! reads a frozen snapshot of the bodies and commits all updates at once, so
//! results never depend on body order.

use super::forces::acceleration;
use super::integrator::{step_euler, step_rk4};
use super::params::{Integrator, SimParams};
use super::states::{Body, NVec2};

#[derive(Debug, Clone, Default)]
pub struct Simulator {
    params: SimParams,
    bodies: Vec<Body>,
    time: f64, // accumulated simulated time
}

impl Simulator {
    pub fn new(G: f64, dt: f64, integrator: Integrator) -> Self {
        Self::from_params(SimParams::new(G, dt, integrator))
    }

    pub fn from_params(params: SimParams) -> Self {
        Self {
            params,
            bodies: Vec::new(),
            time: 0.0,
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    // Body management ==============================================================

    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn set_bodies(&mut self, bodies: Vec<Body>) {
        self.bodies = bodies;
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access for external deletion (collision handling). The
    /// simulator itself never removes bodies.
    pub fn bodies_mut(&mut self) -> &mut Vec<Body> {
        &mut self.bodies
    }

    // Parameters ===================================================================

    pub fn gravity(&self) -> f64 {
        self.params.G
    }

    pub fn set_gravity(&mut self, G: f64) {
        self.params.G = G;
    }

    pub fn dt(&self) -> f64 {
        self.params.dt
    }

    pub fn set_dt(&mut self, dt: f64) {
        self.params.dt = dt;
    }

    pub fn integrator(&self) -> Integrator {
        self.params.integrator
    }

    pub fn set_integrator(&mut self, integrator: Integrator) {
        self.params.integrator = integrator;
    }

    pub fn substeps(&self) -> u32 {
        self.params.substeps()
    }

    /// Non-positive counts are clamped to 1
    pub fn set_substeps(&mut self, n: i32) {
        self.params.set_substeps(n);
    }

    // Time =========================================================================

    /// Simulated time since construction or the last `reset_time`
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Zero the time counter; bodies are left untouched
    pub fn reset_time(&mut self) {
        self.time = 0.0;
    }

    // Stepping =====================================================================

    /// Advance the whole system by one external step of size `dt`
    ///
    /// Runs `substeps` passes of size `dt / substeps`, then advances the time
    /// counter by `dt` exactly once. An empty collection is a no-op and does
    /// not advance time.
    pub fn step(&mut self) {
        if self.bodies.is_empty() { // nothing to simulate
            return;
        }

        let n = self.params.substeps();
        let h = self.params.substep_dt();

        for _ in 0..n {
            match self.params.integrator {
                Integrator::Euler => self.substep_euler(h),
                Integrator::Rk4 => self.substep_rk4(h),
            }
        }

        self.time += self.params.dt;
        log::trace!("stepped {} bodies to t = {}", self.bodies.len(), self.time);
    }

    /// Compute every acceleration from the unmodified collection, then apply
    fn substep_euler(&mut self, h: f64) {
        let G = self.params.G;

        // Self is included in the source list; zero self-distance is skipped
        // by the softening guard
        let accs: Vec<NVec2> = self
            .bodies
            .iter()
            .map(|b| acceleration(b, &self.bodies, G))
            .collect();

        for (b, a) in self.bodies.iter_mut().zip(accs) {
            step_euler(b, a, h);
        }
    }

    /// Advance copies of every body against the pre-substep snapshot, then
    /// commit them together
    fn substep_rk4(&mut self, h: f64) {
        let G = self.params.G;
        let snapshot = &self.bodies;

        let next: Vec<Body> = snapshot
            .iter()
            .enumerate()
            .map(|(i, b)| {
                // Exclude self by index, so coincident distinct bodies both stay
                let others = snapshot
                    .iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != i)
                    .map(|(_, o)| o);

                let mut updated = b.clone();
                step_rk4(&mut updated, others, G, h);
                updated
            })
            .collect();

        self.bodies = next;
    }
}
