//! Conserved-quantity diagnostics over a body collection
//!
//! Used by the headless runner to report drift and by the tests.

use super::forces::SOFTENING_EPS2;
use super::states::{Body, NVec2};
use super::vector::Vec2Ext;

/// Total linear momentum sum(m v)
pub fn total_momentum(bodies: &[Body]) -> NVec2 {
    bodies
        .iter()
        .fold(NVec2::zeros(), |p, b| p + b.mass() * b.velocity)
}

/// Total kinetic energy sum(1/2 m v^2)
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity.length_squared())
        .sum()
}

/// Pairwise potential energy -G m_i m_j / r_ij
///
/// Pairs inside the softening guard contribute nothing, matching the force
/// evaluation.
pub fn potential_energy(bodies: &[Body], G: f64) -> f64 {
    let n = bodies.len();
    let mut pe = 0.0;

    for i in 0..n {
        for j in (i + 1)..n {
            let r2 = (bodies[j].position - bodies[i].position).length_squared();
            if r2 <= SOFTENING_EPS2 {
                continue;
            }
            pe -= G * bodies[i].mass() * bodies[j].mass() / r2.sqrt();
        }
    }

    pe
}

pub fn total_energy(bodies: &[Body], G: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, G)
}

/// Mass-weighted mean position; zero when the total mass is not positive
pub fn center_of_mass(bodies: &[Body]) -> NVec2 {
    let mass: f64 = bodies.iter().map(Body::mass).sum();
    if mass <= 0.0 {
        return NVec2::zeros();
    }

    let weighted = bodies
        .iter()
        .fold(NVec2::zeros(), |acc, b| acc + b.mass() * b.position);
    weighted / mass
}
