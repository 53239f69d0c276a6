//! Toy Newtonian physics
//!
//! Pairwise inverse-square gravity plus circle collision that sticks objects
//! to surfaces instead of bouncing them:
//! 1. Gravity: each body accelerates toward every other body with
//!    `a = G * m_other / r^2`. Overlapping pairs exert no pull.
//! 2. Integration: semi-implicit Euler (`v += a*dt`, then `x += v*dt`).
//!    Static bodies are skipped.
//! 3. Collision: overlapping pairs are pushed apart along the line between
//!    their centres, the lighter body moving further. If they were closing,
//!    the inward normal velocity is removed.
//!
//! All of it is O(n^2); lesson worlds hold a few bodies.

use macroquad::prelude::Vec2;
use super::body::PhysicsBody;

/// Masses are floored at this when splitting overlap.
const MIN_MASS: f32 = 1e-6;
/// Separation used when two centres coincide exactly.
const COINCIDENT_NUDGE: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    /// Gravitational constant `G`
    pub gravity_constant: f32,
}

impl Physics {
    pub fn new(gravity_constant: f32) -> Self {
        Self { gravity_constant }
    }

    /// Advance all bodies by one step.
    pub fn step(&self, bodies: &mut [PhysicsBody], dt: f32) {
        let accelerations = self.accelerations(bodies);
        integrate(bodies, &accelerations, dt);
        resolve_overlaps(bodies);
    }

    /// Gravitational acceleration on each body, in input order.
    pub fn accelerations(&self, bodies: &[PhysicsBody]) -> Vec<Vec2> {
        bodies
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let mut acc = Vec2::ZERO;
                for (j, b) in bodies.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let delta = b.position - a.position;
                    let r2 = delta.length_squared();
                    if r2 == 0.0 {
                        continue;
                    }
                    let r = r2.sqrt();
                    // No pull inside an overlap; forces blow up near r = 0
                    if r < a.radius + b.radius {
                        continue;
                    }
                    let magnitude = self.gravity_constant * b.mass / r2;
                    acc += delta / r * magnitude;
                }
                acc
            })
            .collect()
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::new(0.5)
    }
}

fn integrate(bodies: &mut [PhysicsBody], accelerations: &[Vec2], dt: f32) {
    for (body, acc) in bodies.iter_mut().zip(accelerations) {
        if body.is_static {
            continue;
        }
        body.velocity += *acc * dt;
        body.position += body.velocity * dt;
    }
}

/// Push overlapping pairs apart and kill their inward normal velocity.
pub fn resolve_overlaps(bodies: &mut [PhysicsBody]) {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            resolve_pair(&mut head[i], &mut tail[0]);
        }
    }
}

fn resolve_pair(a: &mut PhysicsBody, b: &mut PhysicsBody) {
    if (a.is_static && b.is_static) || !a.overlaps(b) {
        return;
    }

    let mut delta = b.position - a.position;
    let mut dist = delta.length();
    if dist == 0.0 {
        delta = Vec2::new(COINCIDENT_NUDGE, 0.0);
        dist = COINCIDENT_NUDGE;
    }

    let min_dist = a.radius + b.radius;

    // Collision normal, pointing from a to b
    let normal = delta / dist;
    let overlap = min_dist - dist;

    let (move_a, move_b) = if a.is_static {
        (0.0, overlap)
    } else if b.is_static {
        (overlap, 0.0)
    } else {
        let ma = a.mass.max(MIN_MASS);
        let mb = b.mass.max(MIN_MASS);
        let total = ma + mb;
        (overlap * (mb / total), overlap * (ma / total))
    };

    a.position -= normal * move_a;
    b.position += normal * move_b;

    let vna = a.velocity.dot(normal);
    let vnb = b.velocity.dot(normal);

    // Already separating: leave velocities alone
    if vna - vnb <= 0.0 {
        return;
    }

    // a moves into b along +normal, b moves into a along -normal
    if !a.is_static && vna > 0.0 {
        a.velocity -= normal * vna;
    }
    if !b.is_static && vnb < 0.0 {
        b.velocity -= normal * vnb;
    }
}
