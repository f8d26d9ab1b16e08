//! Newtonian gravity for the 2D simulation
//!
//! Point-mass field evaluation with a fixed absolute softening guard.
//! The guard is expressed in squared SI meters; scenarios in dimensionless
//! units see the same threshold unchanged.

use crate::simulation::states::{Body, NVec2};
use crate::simulation::vector::Vec2Ext;

/// Universal gravitational constant in SI units (m^3 / (kg s^2))
pub const DEFAULT_G: f64 = 6.674e-11;

/// Contributions with squared separation at or below this are skipped
pub const SOFTENING_EPS2: f64 = 1e-9;

/// Total gravitational acceleration on `target` due to every body in `others`
///
/// `others` may contain `target` itself: its self-distance is zero, so the
/// softening guard drops it.
pub fn acceleration<'a, I>(target: &Body, others: I, G: f64) -> NVec2
where
    I: IntoIterator<Item = &'a Body>,
{
    acceleration_at(target.position, others, G)
}

/// Gravitational acceleration at an arbitrary point `position`
pub fn acceleration_at<'a, I>(position: NVec2, others: I, G: f64) -> NVec2
where
    I: IntoIterator<Item = &'a Body>,
{
    let mut acc = NVec2::zeros();

    for other in others {
        // r points from the target point toward the source body
        let r = other.position - position;

        // Squared separation; coincident (or near-coincident) sources are skipped
        let dist2 = r.length_squared();
        if dist2 <= SOFTENING_EPS2 {
            continue;
        }

        // a = G m r / |r|^3
        let inv_r = dist2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;

        acc += (G * other.mass()) * (r * inv_r3);
    }

    acc
}
