// particle/spawn.rs
// Randomized, non-overlapping particle placement

use super::Particle;
use crate::config::SimConfig;
use ultraviolet::Vec2;

/// Index of the first particle in `existing` whose disk overlaps a disk of
/// `radius` at `pos`, if any.
pub fn overlaps_any(existing: &[Particle], pos: Vec2, radius: f32) -> Option<usize> {
    existing
        .iter()
        .position(|p| (p.pos - pos).mag() < (p.radius + radius))
}

/// Draw a velocity with magnitude uniform in `range` and direction uniform
/// over [0, 2pi).
pub fn random_velocity(range: (f32, f32), rng: &mut fastrand::Rng) -> Vec2 {
    let (min, max) = range;
    let speed = min + rng.f32() * (max - min);
    let angle = rng.f32() * std::f32::consts::TAU;
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}

/// Place up to `config.particle_count` particles uniformly inside the arena,
/// inset by one radius on every side so a fresh particle never starts inside
/// a wall. A candidate that overlaps an already placed particle is skipped,
/// not retried, so dense configurations come out under-filled; callers report
/// requested vs placed. Ids are contiguous over the particles actually
/// placed, in acceptance order.
pub fn spawn_particles(config: &SimConfig, rng: &mut fastrand::Rng) -> Vec<Particle> {
    let arena = config.arena;
    let r = config.radius;
    let x_span = arena.right() - arena.left() - 2.0 * r;
    let y_span = arena.top() - arena.bottom() - 2.0 * r;
    let mut particles = Vec::with_capacity(config.particle_count);
    for _ in 0..config.particle_count {
        let pos = Vec2::new(
            arena.left() + r + rng.f32() * x_span,
            arena.bottom() + r + rng.f32() * y_span,
        );
        if overlaps_any(&particles, pos, r).is_some() {
            continue;
        }
        let vel = random_velocity(config.speed_range, rng);
        let id = particles.len() as u64;
        particles.push(Particle::new(id, pos, vel, r, config.mass));
    }
    particles
}
