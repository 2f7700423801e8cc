// particle/types.rs
// Contains the Particle struct and related methods

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

/// A rigid disk. Ids are assigned in acceptance order at creation, so a
/// particle's id always equals its index in the owning set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Stored for each particle but not consulted by the collision response,
    /// which performs an equal-mass normal-component swap.
    pub mass: f32,
}

impl Particle {
    pub fn new(id: u64, pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            mass,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.mag()
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.mag_sq()
    }
}
