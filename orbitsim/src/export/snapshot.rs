//! JSON export of the current body list
//!
//! Output shape:
//!
//! ```json
//! {
//!   "time": 36000.0,
//!   "bodies": [
//!     {
//!       "name": "Earth",
//!       "mass": 5.972e24,
//!       "radius": 10.0,
//!       "color": 4618495,
//!       "position": { "x": 1.496e11, "y": 1.07e9 },
//!       "velocity": { "x": -213.0, "y": 29782.2 },
//!       "acceleration": { "x": -0.0059, "y": -4.2e-5 }
//!     }
//!   ]
//! }
//! ```
//!
//! Unnamed bodies are exported as `body_<index>`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::simulation::engine::Simulator;
use crate::simulation::states::{Body, NVec2};

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl From<NVec2> for XY {
    fn from(v: NVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BodyRecord {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub color: u32,
    pub position: XY,
    pub velocity: XY,
    pub acceleration: XY,
}

impl BodyRecord {
    pub fn from_body(index: usize, body: &Body) -> Self {
        Self {
            name: body
                .name()
                .map_or_else(|| format!("body_{index}"), str::to_owned),
            mass: body.mass(),
            radius: body.radius(),
            color: body.color(),
            position: body.position.into(),
            velocity: body.velocity.into(),
            acceleration: body.acceleration.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    pub time: f64,
    pub bodies: Vec<BodyRecord>,
}

impl StateSnapshot {
    pub fn capture(sim: &Simulator) -> Self {
        Self {
            time: sim.time(),
            bodies: sim
                .bodies()
                .iter()
                .enumerate()
                .map(|(i, b)| BodyRecord::from_body(i, b))
                .collect(),
        }
    }
}

/// Write the simulator's current state to `path` as pretty JSON
///
/// The document is written to a sibling `.tmp` file first and renamed into
/// place, so a concurrent reader sees either the old or the new state.
pub fn write_snapshot(path: &Path, sim: &Simulator) -> Result<()> {
    let snapshot = StateSnapshot::capture(sim);
    let tmp = path.with_extension("json.tmp");

    {
        let file = File::create(&tmp)
            .with_context(|| format!("failed to create {}", tmp.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &snapshot)
            .with_context(|| format!("failed to serialize state to {}", tmp.display()))?;
        writer.flush()?;
    }

    fs::rename(&tmp, path)
        .with_context(|| format!("failed to move {} to {}", tmp.display(), path.display()))?;

    log::debug!("exported {} bodies at t = {} to {}", snapshot.bodies.len(), snapshot.time, path.display());
    Ok(())
}
