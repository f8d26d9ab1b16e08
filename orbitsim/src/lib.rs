#![allow(non_snake_case)] // `G` keeps its physics spelling

pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod export;

pub use simulation::states::{Body, NVec2};
pub use simulation::vector::Vec2Ext;
pub use simulation::forces::{acceleration, acceleration_at, DEFAULT_G, SOFTENING_EPS2};
pub use simulation::integrator::{step_euler, step_rk4};
pub use simulation::params::{Integrator, SimParams};
pub use simulation::engine::Simulator;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, ViewConfig, ExportConfig, BodyConfig, ScenarioConfig};

pub use export::snapshot::{write_snapshot, StateSnapshot, BodyRecord};

pub use visualization::collision::{CollisionPolicy, PendingCollision};
pub use visualization::{orbit_vis2d::run_2d, orbit_headless::{run_headless, RunSummary}};
