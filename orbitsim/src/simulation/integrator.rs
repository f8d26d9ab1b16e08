//! Fixed-step single-body integrators
//!
//! Provides semi-implicit (symplectic) Euler and a fixed-field RK4 step.
//! Both advance one body; ordering across bodies is handled by the
//! `Simulator`, which always integrates against a frozen snapshot.

use super::forces::acceleration_at;
use super::states::{Body, NVec2};

/// Advance `body` by one symplectic Euler step with a precomputed acceleration
///
/// v_n+1 = v_n + a_n dt
/// x_n+1 = x_n + v_n+1 dt
pub fn step_euler(body: &mut Body, acc: NVec2, dt: f64) {
    body.acceleration = acc;

    // Kick first, then drift with the new velocity
    body.velocity += body.acceleration * dt;
    body.position += body.velocity * dt;
}

/// Advance `body` by one classical RK4 step in the field of `others`
///
/// `others` is evaluated at its current positions for all four stages; it is
/// never advanced in between. This is exact RK4 for a test body in a fixed
/// external field and an approximation for coupled bodies. The cached
/// acceleration is recomputed at the final position.
pub fn step_rk4<'a, I>(body: &mut Body, others: I, G: f64, dt: f64)
where
    I: IntoIterator<Item = &'a Body> + Clone,
{
    let acc_at = |x: NVec2| acceleration_at(x, others.clone(), G);
    let half_dt = 0.5 * dt;

    let x0 = body.position;
    let v0 = body.velocity;

    // State derivative is (v, a(x))
    let k1_v = acc_at(x0);
    let k1_x = v0;

    let k2_v = acc_at(x0 + half_dt * k1_x);
    let k2_x = v0 + half_dt * k1_v;

    let k3_v = acc_at(x0 + half_dt * k2_x);
    let k3_x = v0 + half_dt * k2_v;

    let k4_v = acc_at(x0 + dt * k3_x);
    let k4_x = v0 + dt * k3_v;

    // Weights (1, 2, 2, 1) / 6
    body.velocity = v0 + (dt / 6.0) * (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v);
    body.position = x0 + (dt / 6.0) * (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x);
    body.acceleration = acc_at(body.position);
}
