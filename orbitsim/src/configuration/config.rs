//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integration scheme and substep count
//! - [`ParametersConfig`] – gravitational constant and external step size
//! - [`ViewConfig`]       – window size, world-to-screen scale, trail length
//! - [`ExportConfig`]     – optional periodic JSON state export
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # or "euler"
//!   substeps: 20            # internal steps per external step
//!
//! parameters:
//!   G: 6.674e-11            # gravitational constant
//!   dt: 3600.0              # external step size (seconds)
//!
//! view:
//!   width: 1000
//!   height: 800
//!   scale: 2.0e-10          # meters to pixels
//!   trail_length: 200
//!
//! export:
//!   path: "state.json"
//!   interval: 1.0           # seconds of wall time between exports
//!
//! bodies:
//!   - name: "SunA"
//!     mass: 1.989e30
//!     x: [ -3.0e11, 0.0 ]
//!     v: [ 0.0, 10517.678 ]
//!     radius: 30.0
//!     color: [ 255, 220, 120 ]
//!     star: true
//! ```
//!
//! Every section except `bodies` may be omitted. The engine maps this
//! configuration into a runtime `Scenario` (see `simulation::scenario`).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::forces::DEFAULT_G;
use crate::simulation::params::Integrator;

/// Integration settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: Integrator, // Time integrator used for advancing the system state
    pub substeps: i32, // Internal steps per external step, non-positive is clamped to 1
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: Integrator::Rk4,
            substeps: 1,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,  // gravitational constant
    pub dt: f64, // external time step size
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: DEFAULT_G,
            dt: 1.0,
        }
    }
}

/// Window and drawing settings for the viewer
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
    pub scale: f64, // meters to pixels
    pub trail_length: usize, // screen positions remembered per body
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            scale: 2e-9,
            trail_length: 200,
        }
    }
}

/// Periodic JSON export of the body list
#[derive(Deserialize, Debug, Clone)]
pub struct ExportConfig {
    pub path: String,
    #[serde(default = "default_export_interval")]
    pub interval: f64, // wall-clock seconds between exports
}

fn default_export_interval() -> f64 {
    1.0
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // Label used by the state export
    pub mass: f64, // Mass of the body
    pub x: [f64; 2], // Initial position
    pub v: [f64; 2], // Initial velocity
    #[serde(default = "default_radius")]
    pub radius: f64, // Drawn radius in pixels
    #[serde(default)]
    pub color: Option<[u8; 3]>, // RGB, derived from the body index when absent
    #[serde(default)]
    pub satellite: bool, // Ignores overlaps with non-star bodies
    #[serde(default)]
    pub star: bool, // Absorbs any non-star body it overlaps
}

fn default_radius() -> f64 {
    1.0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Integration scheme and substeps
    #[serde(default)]
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub view: ViewConfig, // Viewer window and scale
    #[serde(default)]
    pub export: Option<ExportConfig>, // Periodic state export, disabled when absent
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg = serde_yaml::from_str(yaml).context("invalid scenario YAML")?;
        Ok(cfg)
    }

    /// Load a scenario from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;

        log::info!("loaded scenario {}", path.display());
        Ok(cfg)
    }
}
