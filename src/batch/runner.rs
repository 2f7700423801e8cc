/// Batch runner for executing measurement runs headlessly
use std::time::Instant;

use super::export::{export_histogram, RecordWriter};
use crate::config::{SimConfig, PROGRESS_INTERVAL};
use crate::error::Result;
use crate::simulation::Simulation;

pub struct BatchRunner {
    config: SimConfig,
    output_dir: String,
}

/// What a finished run reported.
pub struct RunSummary {
    pub realized_particles: usize,
    pub total_steps: usize,
    pub measured_steps: u64,
    pub particle_collisions: u64,
    pub wall_collisions: u64,
    pub ratio_percent: f32,
}

impl BatchRunner {
    pub fn new(config: SimConfig, output_dir: String) -> Self {
        Self { config, output_dir }
    }

    /// Run the configured number of steps headlessly and export both CSVs.
    pub fn run(&self) -> Result<RunSummary> {
        println!("\n╔══════════════════════════════════════════╗");
        println!("║  Running collision count measurement  ");
        println!("╚══════════════════════════════════════════╝\n");

        let mut sim = Simulation::new(self.config.clone());

        println!(
            "⚙️  Particles: {} placed of {} requested",
            sim.particles.len(),
            self.config.particle_count
        );
        println!(
            "⚙️  Arena: {} x {}",
            self.config.arena.width, self.config.arena.height
        );
        println!(
            "⚙️  Steps: {} total, {} warm-up",
            self.config.total_steps, self.config.warmup_steps
        );
        println!(
            "⚙️  Sampling interval: {} steps",
            self.config.sampling_interval
        );
        println!("⚙️  Seed: {}\n", self.config.seed);

        let mut writer = RecordWriter::create(&self.output_dir)?;

        let start_time = Instant::now();
        for step in 1..=self.config.total_steps {
            sim.step();

            if step % self.config.sampling_interval == 0 {
                writer.append(&sim.sample_record())?;
            }

            if step % PROGRESS_INTERVAL == 0 {
                let progress = (step as f32 / self.config.total_steps as f32 * 100.0) as u32;
                println!("  Progress: {}% ({} steps)", progress, step);
            }
        }

        let elapsed = start_time.elapsed();
        println!("✓ Simulation completed in {:.2}s", elapsed.as_secs_f32());
        println!("✓ Exported records to {}", writer.filename);

        export_histogram(&sim.histogram, &self.output_dir)?;

        let summary = RunSummary {
            realized_particles: sim.particles.len(),
            total_steps: sim.frame,
            measured_steps: sim.histogram.total_samples(),
            particle_collisions: sim.totals.particle,
            wall_collisions: sim.totals.wall,
            ratio_percent: sim.totals.ratio_percent(),
        };
        print_summary(&summary);
        Ok(summary)
    }
}

fn print_summary(summary: &RunSummary) {
    println!("\n📊 Summary");
    println!("   Measured steps: {}", summary.measured_steps);
    println!("   Particle collisions: {}", summary.particle_collisions);
    println!("   Wall collisions: {}", summary.wall_collisions);
    println!("   Collision ratio: {:.2}%", summary.ratio_percent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Arena;

    #[test]
    fn short_run_exports_both_files_and_counts_measured_steps() {
        let dir = std::env::temp_dir().join(format!("gas_sim_batch_{}", std::process::id()));
        let dir = dir.to_str().unwrap().to_string();

        let config = SimConfig {
            particle_count: 3,
            radius: 5.0,
            speed_range: (50.0, 100.0),
            arena: Arena {
                width: 400.0,
                height: 300.0,
                inset: 0.0,
            },
            dt: 0.01,
            total_steps: 50,
            warmup_steps: 10,
            sampling_interval: 10,
            seed: 1,
            ..SimConfig::default()
        };
        let runner = BatchRunner::new(config.clone(), dir.clone());
        let summary = runner.run().unwrap();

        assert_eq!(summary.total_steps, 50);
        assert_eq!(summary.measured_steps, 40, "one sample per post-warm-up step");

        let records = std::fs::read_to_string(format!("{}/collision_records.csv", dir)).unwrap();
        // Header plus one row per sampling interval.
        assert_eq!(records.lines().count(), 1 + 50 / 10);

        let histogram =
            std::fs::read_to_string(format!("{}/collision_histogram.csv", dir)).unwrap();
        assert_eq!(
            histogram.lines().count(),
            1 + summary.realized_particles + 1
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
