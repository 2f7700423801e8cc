use crate::app::state::SIM_COMMAND_SENDER;
use crate::config::SimConfig;
use crate::simulation::Simulation;
use std::sync::mpsc::channel;

pub mod command_loop;
pub mod console;
pub mod simulation_loop;
pub mod state;

/// Startup configuration, read from the working directory when present.
pub const CONFIG_FILE: &str = "gas_config.toml";

pub fn run() {
    // Creates a global thread pool (using rayon) with threads = max(3, total cores - 2)
    let threads = std::thread::available_parallelism()
        .unwrap()
        .get()
        .max(crate::config::MIN_THREADS)
        - crate::config::THREADS_LEAVE_FREE;
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .unwrap();

    let config = load_startup_config();

    let (tx, rx) = channel();
    *SIM_COMMAND_SENDER.lock() = Some(tx);
    *state::TIMESTEP.lock() = config.dt;

    let simulation = Simulation::new(config.clone());
    println!(
        "Spawned {} of {} particles in a {}x{} arena",
        simulation.particles.len(),
        config.particle_count,
        config.arena.width,
        config.arena.height
    );

    std::thread::spawn(move || {
        simulation_loop::run_simulation_loop(rx, simulation);
    });

    console::run_console(config);
}

/// Load and validate the startup config, falling back to defaults on any
/// problem. A broken file never keeps the console from coming up.
fn load_startup_config() -> SimConfig {
    if std::path::Path::new(CONFIG_FILE).exists() {
        match SimConfig::from_file(CONFIG_FILE) {
            Ok(config) => match config.validate() {
                Ok(()) => {
                    println!("Loaded configuration from {}", CONFIG_FILE);
                    return config;
                }
                Err(e) => eprintln!("{}: {} (using defaults)", CONFIG_FILE, e),
            },
            Err(e) => eprintln!("failed to load {}: {} (using defaults)", CONFIG_FILE, e),
        }
    }
    SimConfig::default()
}
