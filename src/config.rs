// Centralized configuration for simulation parameters

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ====================
// Particle Parameters
// ====================
pub const DEFAULT_PARTICLE_COUNT: usize = 10;
pub const DEFAULT_RADIUS: f32 = 20.0;
pub const DEFAULT_MASS: f32 = 1.0; // Stored on every particle; the collision response is equal-mass
pub const DEFAULT_SPEED_RANGE: (f32, f32) = (50.0, 100.0);

// ====================
// Arena Parameters
// ====================
pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
/// Distance from a wall (in length units) within which a particle counts as touching it
pub const WALL_TOLERANCE: f32 = 1.0;

// ====================
// Simulation Parameters
// ====================
pub const DEFAULT_DT: f32 = 0.01;
pub const DEFAULT_TOTAL_STEPS: usize = 100_000;
pub const DEFAULT_WARMUP_STEPS: usize = 10_000;
pub const DEFAULT_SAMPLING_INTERVAL: usize = 1_000;
pub const DEFAULT_SEED: u64 = 0;
/// Effective-dt multiplier applied during the warm-up phase
pub const WARMUP_TIME_SCALE: f32 = 5.0;

// ====================
// Batch Runner
// ====================
/// Steps between progress lines in batch mode
pub const PROGRESS_INTERVAL: usize = 10_000;

// ====================
// Threading/Parallelism
// ====================
pub const MIN_THREADS: usize = 3; // Minimum number of threads to use
pub const THREADS_LEAVE_FREE: usize = 2; // Number of logical cores to leave free

/// Rectangular reflecting boundary for a run. The `inset` reserves space on
/// the left side (the interactive front-end's control panel lives there), so
/// the walls span x in [inset, width] and y in [0, height].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub inset: f32,
}

impl Arena {
    pub fn left(&self) -> f32 {
        self.inset
    }

    pub fn right(&self) -> f32 {
        self.width
    }

    pub fn bottom(&self) -> f32 {
        0.0
    }

    pub fn top(&self) -> f32 {
        self.height
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
            inset: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub particle_count: usize,
    pub radius: f32,
    #[serde(default = "default_mass")]
    pub mass: f32,
    /// Initial speed magnitudes are drawn uniformly from this range
    pub speed_range: (f32, f32),
    pub arena: Arena,
    /// Timestep per step in batch mode; interactive mode receives dt per tick
    pub dt: f32,
    pub total_steps: usize,
    pub warmup_steps: usize,
    /// Steps between record rows in batch mode
    pub sampling_interval: usize,
    /// RNG seed for particle placement; identical seeds reproduce runs exactly
    #[serde(default)]
    pub seed: u64,
}

fn default_mass() -> f32 {
    DEFAULT_MASS
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            radius: DEFAULT_RADIUS,
            mass: DEFAULT_MASS,
            speed_range: DEFAULT_SPEED_RANGE,
            arena: Arena::default(),
            dt: DEFAULT_DT,
            total_steps: DEFAULT_TOTAL_STEPS,
            warmup_steps: DEFAULT_WARMUP_STEPS,
            sampling_interval: DEFAULT_SAMPLING_INTERVAL,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Reject malformed configurations before a run starts. Callers at the
    /// boundary (console apply, batch CLI) surface the error and keep any
    /// prior running state untouched.
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(Error::InvalidConfig("particle_count must be > 0".into()));
        }
        if self.radius <= 0.0 {
            return Err(Error::InvalidConfig("radius must be > 0".into()));
        }
        if self.mass <= 0.0 {
            return Err(Error::InvalidConfig("mass must be > 0".into()));
        }
        let (min, max) = self.speed_range;
        if min < 0.0 || max < min {
            return Err(Error::InvalidConfig(format!(
                "speed_range must satisfy 0 <= min <= max, got ({}, {})",
                min, max
            )));
        }
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return Err(Error::InvalidConfig("arena dimensions must be > 0".into()));
        }
        if self.arena.inset < 0.0 {
            return Err(Error::InvalidConfig("arena inset must be >= 0".into()));
        }
        if self.arena.right() - self.arena.left() <= 2.0 * self.radius
            || self.arena.top() - self.arena.bottom() <= 2.0 * self.radius
        {
            return Err(Error::InvalidConfig(
                "arena too small for the particle radius".into(),
            ));
        }
        if self.dt <= 0.0 {
            return Err(Error::InvalidConfig("dt must be > 0".into()));
        }
        if self.total_steps == 0 {
            return Err(Error::InvalidConfig("total_steps must be > 0".into()));
        }
        if self.sampling_interval == 0 {
            return Err(Error::InvalidConfig("sampling_interval must be > 0".into()));
        }
        Ok(())
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: SimConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as TOML.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_particles_rejected() {
        let config = SimConfig {
            particle_count: 0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_speed_range_rejected() {
        let config = SimConfig {
            speed_range: (100.0, 50.0),
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_dt_rejected() {
        let config = SimConfig {
            dt: -0.01,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn arena_smaller_than_particle_rejected() {
        let config = SimConfig {
            radius: 400.0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inset_shrinks_usable_arena() {
        let arena = Arena {
            width: 800.0,
            height: 600.0,
            inset: 200.0,
        };
        assert_eq!(arena.left(), 200.0);
        assert_eq!(arena.right(), 800.0);
        assert_eq!(arena.bottom(), 0.0);
        assert_eq!(arena.top(), 600.0);
    }

    #[test]
    fn toml_round_trip_preserves_config() {
        let config = SimConfig {
            particle_count: 25,
            radius: 5.0,
            speed_range: (300.0, 350.0),
            seed: 42,
            ..SimConfig::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: SimConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn inset_defaults_to_zero_when_omitted() {
        let text = r#"
            particle_count = 10
            radius = 20.0
            speed_range = [50.0, 100.0]
            dt = 0.01
            total_steps = 100000
            warmup_steps = 10000
            sampling_interval = 1000

            [arena]
            width = 800.0
            height = 600.0
        "#;
        let parsed: SimConfig = toml::from_str(text).unwrap();
        assert_eq!(parsed.arena.inset, 0.0);
        assert_eq!(parsed.seed, 0);
        assert_eq!(parsed.mass, DEFAULT_MASS);
    }
}
