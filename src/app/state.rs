use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Sender;

use crate::config;
use crate::particle::Particle;
use crate::simulation::SampleRecord;

pub static TIMESTEP: Lazy<Mutex<f32>> = Lazy::new(|| Mutex::new(config::DEFAULT_DT));
pub static PAUSED: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(false));
pub static PARTICLES: Lazy<Mutex<Vec<Particle>>> = Lazy::new(|| Mutex::new(Vec::new()));
pub static LATEST_SAMPLE: Lazy<Mutex<Option<SampleRecord>>> = Lazy::new(|| Mutex::new(None));

// Simulation commands
// These are used to send commands to the simulation thread from the console thread
pub enum SimCommand {
    ApplyConfig { config: config::SimConfig },
    Reset,
    StepOnce,
    PrintStats,
}

pub static SIM_COMMAND_SENDER: Lazy<Mutex<Option<Sender<SimCommand>>>> =
    Lazy::new(|| Mutex::new(None));
