use crate::app::state::{SimCommand, LATEST_SAMPLE, PARTICLES, PAUSED, TIMESTEP};
use crate::simulation::Simulation;
use std::sync::atomic::Ordering;

use super::command_loop;

/// Copy the particle set and the latest cumulative sample into the shared
/// statics so the console thread can look at them between steps.
pub fn publish(simulation: &Simulation) {
    {
        let mut lock = PARTICLES.lock();
        lock.clear();
        lock.extend_from_slice(&simulation.particles);
    }
    *LATEST_SAMPLE.lock() = Some(simulation.sample_record());
}

pub fn run_simulation_loop(rx: std::sync::mpsc::Receiver<SimCommand>, mut simulation: Simulation) {
    loop {
        // Handle commands
        while let Ok(cmd) = rx.try_recv() {
            command_loop::handle_command(cmd, &mut simulation);
        }

        if PAUSED.load(Ordering::Relaxed) {
            std::thread::yield_now();
        } else {
            // The console can retune the timestep while the gas is running.
            let dt = *TIMESTEP.lock();
            simulation.tick(dt);
        }

        publish(&simulation);

        // Allow the console thread to grab the state locks between steps
        std::thread::yield_now();
    }
}
