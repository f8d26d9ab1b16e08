//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - the `Simulator` (parameters and bodies at t = 0)
//! - viewer settings (`ViewConfig`)
//! - optional export settings (`ExportConfig`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! stepping, collision, export and drawing systems, or driven directly by
//! the headless runner.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ExportConfig, ScenarioConfig, ViewConfig};
use crate::simulation::color::{random_color_u32, rgb_u32};
use crate::simulation::engine::Simulator;
use crate::simulation::params::SimParams;
use crate::simulation::states::{Body, NVec2};

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub simulator: Simulator,
    pub view: ViewConfig,
    pub export: Option<ExportConfig>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| body_from_config(i, bc))
            .collect();

        // Parameters (runtime) from EngineConfig + ParametersConfig
        let mut params = SimParams::new(cfg.parameters.G, cfg.parameters.dt, cfg.engine.integrator);
        params.set_substeps(cfg.engine.substeps);

        let mut simulator = Simulator::from_params(params);
        simulator.set_bodies(bodies);

        log::info!(
            "scenario: {} bodies, G = {:e}, dt = {}, {:?} x {} substeps",
            simulator.bodies().len(),
            simulator.gravity(),
            simulator.dt(),
            simulator.integrator(),
            simulator.substeps(),
        );

        Self {
            simulator,
            view: cfg.view,
            export: cfg.export,
        }
    }

    /// Scale the external step by `multiplier`; non-positive or non-finite
    /// values fall back to 1.0
    pub fn with_speed(mut self, multiplier: f64) -> Self {
        let multiplier = if multiplier.is_finite() && multiplier > 0.0 {
            multiplier
        } else {
            log::warn!("speed multiplier {multiplier} ignored, using 1.0");
            1.0
        };

        let dt = self.simulator.dt() * multiplier;
        self.simulator.set_dt(dt);
        self
    }
}

fn body_from_config(index: usize, bc: &BodyConfig) -> Body {
    let color = match bc.color {
        Some([r, g, b]) => rgb_u32(r, g, b),
        None => random_color_u32(index as u32),
    };

    let body = Body::new(
        bc.mass,
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.radius,
        color,
    )
    .with_flags(bc.satellite, bc.star);

    match &bc.name {
        Some(name) => body.with_name(name.clone()),
        None => body,
    }
}
