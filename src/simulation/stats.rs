// simulation/stats.rs
// Collision bookkeeping: the simultaneity histogram, cumulative totals,
// and the sampled record rows the batch runner writes out.

/// Distribution of the per-step count of particles simultaneously "in
/// collision".
///
/// Bucket `k` counts the measured steps that ended with exactly `k`
/// particles holding a nonzero collision counter. A simulation over `n`
/// particles owns `n + 1` buckets, one per possible count, so the
/// distribution is complete even when a bucket never fires.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    buckets: Vec<u64>,
}

impl Histogram {
    pub fn new(particle_count: usize) -> Self {
        Self {
            buckets: vec![0; particle_count + 1],
        }
    }

    /// Record one step that ended with `collided` particles in collision.
    pub fn record(&mut self, collided: usize) {
        self.buckets[collided] += 1;
    }

    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    /// Number of steps recorded so far.
    pub fn total_samples(&self) -> u64 {
        self.buckets.iter().sum()
    }
}

/// Cumulative collision counts since the start of the run, warm-up included.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionTotals {
    pub particle: u64,
    pub wall: u64,
}

impl CollisionTotals {
    pub fn total(&self) -> u64 {
        self.particle + self.wall
    }

    /// Particle-particle share of all collisions, in percent. Zero while
    /// nothing has collided.
    pub fn ratio_percent(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.particle as f32 / total as f32 * 100.0
        }
    }
}

/// One sampled row of cumulative statistics, taken every sampling interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRecord {
    pub time: f32,
    pub particle_collisions: u64,
    pub wall_collisions: u64,
    pub total_collisions: u64,
    pub ratio_percent: f32,
}
