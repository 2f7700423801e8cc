// simulation/collision.rs
// Contains collision detection and resolution functions

use crate::particle::Particle;
use ultraviolet::Vec2;

/// Sweep every unordered pair in ascending (i, j) order and resolve the
/// overlapping ones. Later pairs see the velocities already updated by
/// earlier ones, so the sweep order is part of the model. Bumps the
/// per-particle counters of both members of each resolved pair and returns
/// the number of collisions this step.
pub fn collide(particles: &mut [Particle], counters: &mut [u32]) -> u64 {
    let mut collisions = 0;
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if resolve(particles, i, j) {
                counters[i] += 1;
                counters[j] += 1;
                collisions += 1;
            }
        }
    }
    collisions
}

fn resolve(particles: &mut [Particle], i: usize, j: usize) -> bool {
    let p1 = particles[i].pos;
    let p2 = particles[j].pos;
    let r = particles[i].radius + particles[j].radius;
    let d = p2 - p1;
    let dist = d.mag();
    if dist >= r {
        return false;
    }
    if dist == 0.0 {
        // Coincident centers give no usable normal; leave the pair alone.
        return false;
    }
    let normal = d / dist;
    let tangent = Vec2::new(-normal.y, normal.x);

    let v1 = particles[i].vel;
    let v2 = particles[j].vel;
    let v1n = v1.dot(normal);
    let v1t = v1.dot(tangent);
    let v2n = v2.dot(normal);
    let v2t = v2.dot(tangent);

    // Equal-mass elastic exchange: the normal components swap, the
    // tangential components carry over unchanged.
    particles[i].vel = normal * v2n + tangent * v1t;
    particles[j].vel = normal * v1n + tangent * v2t;

    // Split the overlap evenly so the pair comes out at exact contact.
    let push = normal * (0.5 * (r - dist));
    particles[i].pos -= push;
    particles[j].pos += push;
    true
}
