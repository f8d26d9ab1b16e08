//! Collision policy for the front ends
//!
//! Overlap is judged in screen space: bodies carry their drawn radius in
//! pixels, so two bodies overlap when their separation times the view scale
//! is below the sum of their radii. For every overlapping pair, in index
//! order:
//! - a star absorbs any non-star body (the non-star is deleted at once),
//! - a satellite ignores overlaps with non-star bodies,
//! - anything else (star vs star included) is handed back to the caller as a
//!   `PendingCollision`, which pauses stepping until the user decides.

use std::collections::HashSet;

use crate::simulation::states::Body;
use crate::simulation::vector::Vec2Ext;

/// Overlapping pair awaiting a user decision, `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingCollision {
    pub a: usize,
    pub b: usize,
}

/// What the policy says about a single overlapping pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    Delete(usize),
    Ignore,
    Ask,
}

#[derive(Debug, Clone)]
pub struct CollisionPolicy {
    scale: f64, // meters to pixels
    dismissed: HashSet<PendingCollision>,
}

impl CollisionPolicy {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            dismissed: HashSet::new(),
        }
    }

    pub fn overlaps(&self, a: &Body, b: &Body) -> bool {
        overlap(a, b, self.scale)
    }

    /// Apply automatic deletions and return the first pair needing a decision
    pub fn resolve(&mut self, bodies: &mut Vec<Body>) -> Option<PendingCollision> {
        // Forget dismissals for pairs that have separated
        let scale = self.scale;
        self.dismissed
            .retain(|p| p.b < bodies.len() && overlap(&bodies[p.a], &bodies[p.b], scale));

        'scan: loop {
            let n = bodies.len();
            for i in 0..n {
                for j in (i + 1)..n {
                    if !self.overlaps(&bodies[i], &bodies[j]) {
                        continue;
                    }

                    match classify(i, &bodies[i], j, &bodies[j]) {
                        CollisionOutcome::Delete(k) => {
                            log::info!("{} absorbed by a star", label(k, &bodies[k]));
                            bodies.remove(k);
                            // Indices shifted
                            self.dismissed.clear();
                            continue 'scan;
                        }
                        CollisionOutcome::Ignore => {}
                        CollisionOutcome::Ask => {
                            let pair = PendingCollision { a: i, b: j };
                            if !self.dismissed.contains(&pair) {
                                return Some(pair);
                            }
                        }
                    }
                }
            }
            return None;
        }
    }

    /// Keep the pair from prompting again until it separates
    pub fn dismiss(&mut self, pair: PendingCollision) {
        self.dismissed.insert(pair);
    }

    /// Delete the lighter body of `pair` (the later index on a tie) and
    /// return the removed body
    pub fn delete_lighter(&mut self, bodies: &mut Vec<Body>, pair: PendingCollision) -> Option<Body> {
        if pair.a >= bodies.len() || pair.b >= bodies.len() {
            return None;
        }

        let victim = if bodies[pair.a].mass() < bodies[pair.b].mass() {
            pair.a
        } else {
            pair.b
        };

        log::info!("deleting {} after collision", label(victim, &bodies[victim]));
        self.dismissed.clear();
        Some(bodies.remove(victim))
    }

    /// Forget every dismissal, e.g. after the body set was replaced
    pub fn clear_dismissed(&mut self) {
        self.dismissed.clear();
    }
}

fn overlap(a: &Body, b: &Body, scale: f64) -> bool {
    a.position.distance(&b.position) * scale < a.radius() + b.radius()
}

/// Policy decision for an overlapping pair (i, j)
pub fn classify(i: usize, a: &Body, j: usize, b: &Body) -> CollisionOutcome {
    match (a.is_star(), b.is_star()) {
        (true, false) => return CollisionOutcome::Delete(j),
        (false, true) => return CollisionOutcome::Delete(i),
        _ => {}
    }

    let satellite_vs_planet =
        (a.is_satellite() && !b.is_star()) || (b.is_satellite() && !a.is_star());
    if satellite_vs_planet {
        return CollisionOutcome::Ignore;
    }

    CollisionOutcome::Ask
}

fn label(index: usize, body: &Body) -> String {
    body.name()
        .map_or_else(|| format!("body_{index}"), str::to_owned)
}
