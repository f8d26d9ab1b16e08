//! Windowless front end
//!
//! Steps a scenario a fixed number of times, applies the collision policy's
//! automatic deletions, logs conserved-quantity drift and optionally writes a
//! final state export.

use std::path::Path;

use anyhow::Result;

use crate::export::snapshot::write_snapshot;
use crate::simulation::diagnostics::{total_energy, total_momentum};
use crate::simulation::scenario::Scenario;
use crate::visualization::collision::CollisionPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub time: f64,
    pub bodies: usize,
    pub energy_drift: f64, // relative, 0 when the initial energy is 0
}

pub fn run_headless(scenario: &mut Scenario, steps: usize) -> Result<RunSummary> {
    let mut policy = CollisionPolicy::new(scenario.view.scale);
    let sim = &mut scenario.simulator;
    let G = sim.gravity();

    let e0 = total_energy(sim.bodies(), G);
    let p0 = total_momentum(sim.bodies());
    log::info!("headless run: {} steps, E0 = {:e}, |p0| = {:e}", steps, e0, p0.norm());

    for _ in 0..steps {
        sim.step();

        // Nobody can answer a prompt here, so prompted pairs are dismissed
        while let Some(pair) = policy.resolve(sim.bodies_mut()) {
            log::warn!("bodies {} and {} overlap, continuing without deletion", pair.a, pair.b);
            policy.dismiss(pair);
        }
    }

    let e1 = total_energy(sim.bodies(), G);
    let p1 = total_momentum(sim.bodies());
    let energy_drift = if e0 != 0.0 { ((e1 - e0) / e0).abs() } else { 0.0 };

    log::info!(
        "finished at t = {}: {} bodies, energy drift {:e}, |p| {:e} -> {:e}",
        sim.time(),
        sim.bodies().len(),
        energy_drift,
        p0.norm(),
        p1.norm(),
    );

    if let Some(export) = &scenario.export {
        write_snapshot(Path::new(&export.path), &scenario.simulator)?;
    }

    Ok(RunSummary {
        steps,
        time: scenario.simulator.time(),
        bodies: scenario.simulator.bodies().len(),
        energy_drift,
    })
}
