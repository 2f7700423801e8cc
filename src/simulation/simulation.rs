// simulation/simulation.rs
// Contains the Simulation struct and main methods (new, step, tick)

use rayon::prelude::*;

use super::collision;
use super::stats::{CollisionTotals, Histogram, SampleRecord};
use crate::config::{Arena, SimConfig, WALL_TOLERANCE, WARMUP_TIME_SCALE};
use crate::particle::{spawn_particles, Particle};

/// The main simulation state and logic for the confined gas.
pub struct Simulation {
    pub dt: f32,
    pub frame: usize,
    pub time: f32,
    pub particles: Vec<Particle>,
    /// Per-particle collision counters, index-aligned with `particles`.
    /// Bumped on every pair collision, cleared on wall proximity.
    pub counters: Vec<u32>,
    pub histogram: Histogram,
    pub totals: CollisionTotals,
    pub arena: Arena,
    pub config: SimConfig,
}

impl Simulation {
    /// Build a simulation from `config`, spawning the particle set from the
    /// config seed. Dense configurations may realize fewer particles than
    /// requested; all bookkeeping sizes to the realized set.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = fastrand::Rng::with_seed(config.seed);
        let particles = spawn_particles(&config, &mut rng);
        let counters = vec![0; particles.len()];
        let histogram = Histogram::new(particles.len());
        Self {
            dt: config.dt,
            frame: 0,
            time: 0.0,
            particles,
            counters,
            histogram,
            totals: CollisionTotals::default(),
            arena: config.arena,
            config,
        }
    }

    /// Throw away all particles and statistics and rebuild from `config`.
    /// Measurements never mix across configurations.
    pub fn reset(&mut self, config: SimConfig) {
        *self = Simulation::new(config);
    }

    /// True while the run is still inside its warm-up window.
    pub fn in_warmup(&self) -> bool {
        self.frame < self.config.warmup_steps
    }

    /// Number of particles currently "in collision", i.e. holding a nonzero
    /// counter. This is the quantity the histogram is built over.
    pub fn collided_count(&self) -> usize {
        self.counters.iter().filter(|&&c| c > 0).count()
    }

    /// Advance one step at the stored timestep.
    pub fn step(&mut self) {
        self.tick(self.dt);
    }

    /// Advance one step at an explicit timestep.
    ///
    /// Warm-up steps run at an inflated timestep and are excluded from the
    /// histogram so the measured distribution only sees the mixed gas.
    /// Cumulative totals accumulate from the very first step.
    pub fn tick(&mut self, dt: f32) {
        let effective_dt = if self.in_warmup() {
            dt * WARMUP_TIME_SCALE
        } else {
            dt
        };

        self.integrate(effective_dt);
        self.totals.particle += collision::collide(&mut self.particles, &mut self.counters);
        self.totals.wall += self.check_walls();

        self.frame += 1;
        self.time += effective_dt;

        if self.frame > self.config.warmup_steps {
            self.histogram.record(self.collided_count());
        }
    }

    /// Move every particle by `vel * dt`, then clamp any that crossed a wall
    /// back to contact and reflect the offending velocity component.
    fn integrate(&mut self, dt: f32) {
        let arena = self.arena;
        self.particles.par_iter_mut().for_each(|p| {
            p.pos += p.vel * dt;

            if p.pos.x - p.radius < arena.left() {
                p.pos.x = arena.left() + p.radius;
                p.vel.x = -p.vel.x;
            } else if p.pos.x + p.radius > arena.right() {
                p.pos.x = arena.right() - p.radius;
                p.vel.x = -p.vel.x;
            }

            if p.pos.y - p.radius < arena.bottom() {
                p.pos.y = arena.bottom() + p.radius;
                p.vel.y = -p.vel.y;
            } else if p.pos.y + p.radius > arena.top() {
                p.pos.y = arena.top() - p.radius;
                p.vel.y = -p.vel.y;
            }
        });
    }

    /// Count wall contacts for this step and clear the collision counter of
    /// every particle within `WALL_TOLERANCE` of a wall. A particle parked
    /// near a wall contributes one contact per step for as long as it stays
    /// there.
    fn check_walls(&mut self) -> u64 {
        let arena = self.arena;
        let mut contacts = 0;
        for (p, counter) in self.particles.iter().zip(self.counters.iter_mut()) {
            let near_wall = p.pos.x - p.radius < arena.left() + WALL_TOLERANCE
                || p.pos.x + p.radius > arena.right() - WALL_TOLERANCE
                || p.pos.y - p.radius < arena.bottom() + WALL_TOLERANCE
                || p.pos.y + p.radius > arena.top() - WALL_TOLERANCE;
            if near_wall {
                contacts += 1;
                *counter = 0;
            }
        }
        contacts
    }

    /// Snapshot the cumulative totals as one sample row.
    pub fn sample_record(&self) -> SampleRecord {
        SampleRecord {
            time: self.time,
            particle_collisions: self.totals.particle,
            wall_collisions: self.totals.wall,
            total_collisions: self.totals.total(),
            ratio_percent: self.totals.ratio_percent(),
        }
    }
}

#[cfg(test)]
mod wall_and_warmup_tests {
    use super::*;
    use ultraviolet::Vec2;

    fn arena_config() -> SimConfig {
        SimConfig {
            warmup_steps: 0,
            ..SimConfig::default()
        }
    }

    fn sim_with(particles: Vec<Particle>, config: SimConfig) -> Simulation {
        let counters = vec![0; particles.len()];
        let histogram = Histogram::new(particles.len());
        Simulation {
            dt: config.dt,
            frame: 0,
            time: 0.0,
            particles,
            counters,
            histogram,
            totals: CollisionTotals::default(),
            arena: config.arena,
            config,
        }
    }

    #[test]
    fn wall_crossing_clamps_to_contact_and_reflects() {
        let config = arena_config();
        let particle = Particle::new(0, Vec2::new(0.5, 300.0), Vec2::new(-3.0, 0.0), 1.0, 1.0);
        let mut sim = sim_with(vec![particle], config);
        sim.tick(0.01);
        assert_eq!(sim.particles[0].pos.x, 1.0, "clamped back to wall contact");
        assert_eq!(sim.particles[0].vel.x, 3.0, "x velocity reflected");
        assert_eq!(sim.particles[0].vel.y, 0.0, "y velocity untouched");
        assert_eq!(sim.totals.wall, 1);
        assert_eq!(sim.totals.particle, 0);
    }

    #[test]
    fn corner_crossing_reflects_both_axes() {
        let config = arena_config();
        let particle = Particle::new(0, Vec2::new(1.05, 1.05), Vec2::new(-10.0, -10.0), 1.0, 1.0);
        let mut sim = sim_with(vec![particle], config);
        sim.tick(0.01);
        assert_eq!(sim.particles[0].pos, Vec2::new(1.0, 1.0));
        assert_eq!(sim.particles[0].vel, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn wall_contact_resets_collision_counter() {
        let config = arena_config();
        let particle = Particle::new(0, Vec2::new(1.2, 300.0), Vec2::new(-50.0, 0.0), 1.0, 1.0);
        let mut sim = sim_with(vec![particle], config);
        sim.counters[0] = 3;
        sim.tick(0.01);
        assert_eq!(sim.counters[0], 0, "wall contact must clear the counter");
        assert_eq!(sim.totals.wall, 1);
    }

    #[test]
    fn counter_survives_away_from_walls() {
        let config = arena_config();
        let particle = Particle::new(0, Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.0), 1.0, 1.0);
        let mut sim = sim_with(vec![particle], config);
        sim.counters[0] = 2;
        sim.tick(0.01);
        assert_eq!(sim.counters[0], 2);
        assert_eq!(sim.totals.wall, 0);
    }

    #[test]
    fn warmup_runs_at_inflated_timestep() {
        let config = SimConfig {
            warmup_steps: 2,
            ..SimConfig::default()
        };
        let particle = Particle::new(0, Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.0), 1.0, 1.0);
        let mut sim = sim_with(vec![particle], config);
        sim.tick(0.01);
        sim.tick(0.01);
        sim.tick(0.01);
        // Two warm-up steps at 5x dt plus one measured step.
        assert!((sim.time - 0.11).abs() < 1e-6, "time was {}", sim.time);
        assert_eq!(sim.frame, 3);
    }

    #[test]
    fn histogram_only_sees_post_warmup_steps() {
        let config = SimConfig {
            warmup_steps: 2,
            ..SimConfig::default()
        };
        let particle = Particle::new(0, Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.0), 1.0, 1.0);
        let mut sim = sim_with(vec![particle], config);
        for _ in 0..5 {
            sim.tick(0.01);
        }
        assert_eq!(sim.histogram.total_samples(), 3);
    }

    #[test]
    fn totals_accumulate_during_warmup() {
        let config = SimConfig {
            warmup_steps: 5,
            ..SimConfig::default()
        };
        // Heading into the left wall on the first step.
        let particle = Particle::new(0, Vec2::new(1.5, 300.0), Vec2::new(-60.0, 0.0), 1.0, 1.0);
        let mut sim = sim_with(vec![particle], config);
        sim.tick(0.01);
        assert!(sim.totals.wall >= 1, "wall totals count from the first step");
        assert_eq!(sim.histogram.total_samples(), 0);
    }

    #[test]
    fn sample_record_snapshots_cumulative_totals() {
        let config = arena_config();
        let mut sim = sim_with(Vec::new(), config);
        sim.totals = CollisionTotals {
            particle: 3,
            wall: 1,
        };
        sim.time = 12.5;
        let record = sim.sample_record();
        assert_eq!(record.time, 12.5);
        assert_eq!(record.particle_collisions, 3);
        assert_eq!(record.wall_collisions, 1);
        assert_eq!(record.total_collisions, 4);
        assert!((record.ratio_percent - 75.0).abs() < 1e-6);
    }
}
