use crate::app::state::{SimCommand, PAUSED, TIMESTEP};
use crate::simulation::Simulation;
use std::sync::atomic::Ordering;

pub fn handle_command(cmd: SimCommand, simulation: &mut Simulation) {
    match cmd {
        SimCommand::ApplyConfig { config } => {
            simulation.reset(config);
            println!(
                "Applied configuration: {} of {} particles placed",
                simulation.particles.len(),
                simulation.config.particle_count
            );
        }
        SimCommand::Reset => {
            let config = simulation.config.clone();
            simulation.reset(config);
            println!("Run restarted: {} particles", simulation.particles.len());
        }
        SimCommand::StepOnce => {
            let dt = *TIMESTEP.lock();
            simulation.tick(dt);
            super::simulation_loop::publish(simulation);
            PAUSED.store(true, Ordering::Relaxed);
        }
        SimCommand::PrintStats => {
            print_stats(simulation);
        }
    }
}

fn print_stats(simulation: &Simulation) {
    let record = simulation.sample_record();
    println!(
        "\n📊 Frame {} (t = {:.2} s)",
        simulation.frame, simulation.time
    );
    if simulation.in_warmup() {
        println!(
            "   Warm-up: step {} of {}",
            simulation.frame, simulation.config.warmup_steps
        );
    }
    println!("   Particles: {}", simulation.particles.len());
    println!("   In collision now: {}", simulation.collided_count());
    println!("   Particle collisions: {}", record.particle_collisions);
    println!("   Wall collisions: {}", record.wall_collisions);
    println!("   Collision ratio: {:.2}%", record.ratio_percent);
    println!("   Histogram (simultaneous collisions -> steps):");
    for (k, count) in simulation.histogram.buckets().iter().enumerate() {
        if *count > 0 {
            println!("     {:>3}: {}", k, count);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    #[test]
    fn apply_config_rebuilds_the_simulation() {
        let mut sim = Simulation::new(SimConfig::default());
        for _ in 0..50 {
            sim.step();
        }
        let next = SimConfig {
            particle_count: 5,
            seed: 9,
            ..SimConfig::default()
        };
        handle_command(
            SimCommand::ApplyConfig {
                config: next.clone(),
            },
            &mut sim,
        );
        assert_eq!(sim.frame, 0, "applying a config starts a fresh run");
        assert_eq!(sim.config, next);
        assert!(sim.particles.len() <= 5);
    }

    #[test]
    fn reset_restarts_with_the_active_config() {
        let config = SimConfig {
            seed: 4,
            warmup_steps: 0,
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(config.clone());
        for _ in 0..30 {
            sim.step();
        }
        handle_command(SimCommand::Reset, &mut sim);
        assert_eq!(sim.frame, 0);
        assert_eq!(sim.config, config);
        assert_eq!(sim.particles, Simulation::new(config).particles);
    }

    // PAUSED and TIMESTEP are process globals, so every assertion about them
    // lives in this one test.
    #[test]
    fn step_once_advances_one_frame_and_pauses() {
        let mut sim = Simulation::new(SimConfig::default());
        let before = sim.frame;
        handle_command(SimCommand::StepOnce, &mut sim);
        assert_eq!(sim.frame, before + 1);
        assert!(PAUSED.load(Ordering::Relaxed));
        PAUSED.store(false, Ordering::Relaxed);
    }
}
