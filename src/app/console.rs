// app/console.rs
// Line-oriented console driving the simulation thread. Config edits are
// staged in a pending copy and only reach the gas on an explicit apply.

use std::io::{self, BufRead, Write};
use std::sync::atomic::Ordering;

use crate::app::state::{
    SimCommand, LATEST_SAMPLE, PARTICLES, PAUSED, SIM_COMMAND_SENDER, TIMESTEP,
};
use crate::config::SimConfig;

/// What one console line asks for, before any of it touches shared state.
#[derive(Debug, PartialEq)]
pub enum Action {
    Help,
    Show,
    Set { field: String, value: String },
    Apply,
    Reset,
    Pause,
    Resume,
    StepOnce,
    SetDt(f32),
    Stats,
    Quit,
    Empty,
}

pub fn parse_line(line: &str) -> Result<Action, String> {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some(token) => token,
        None => return Ok(Action::Empty),
    };
    match command {
        "help" => Ok(Action::Help),
        "show" => Ok(Action::Show),
        "set" => {
            let field = tokens
                .next()
                .ok_or_else(|| "usage: set <field> <value>".to_string())?;
            let value = tokens
                .next()
                .ok_or_else(|| "usage: set <field> <value>".to_string())?;
            Ok(Action::Set {
                field: field.to_string(),
                value: value.to_string(),
            })
        }
        "apply" => Ok(Action::Apply),
        "reset" => Ok(Action::Reset),
        "pause" => Ok(Action::Pause),
        "resume" => Ok(Action::Resume),
        "step" => Ok(Action::StepOnce),
        "dt" => {
            let value = tokens.next().ok_or_else(|| "usage: dt <seconds>".to_string())?;
            let dt: f32 = value
                .parse()
                .map_err(|_| format!("not a number: {}", value))?;
            if dt <= 0.0 {
                return Err("dt must be positive".to_string());
            }
            Ok(Action::SetDt(dt))
        }
        "stats" => Ok(Action::Stats),
        "quit" | "exit" => Ok(Action::Quit),
        other => Err(format!("unknown command: {} (try 'help')", other)),
    }
}

/// Apply one `set` edit to the pending config. A bad field or value leaves
/// the pending config exactly as it was.
pub fn set_field(pending: &mut SimConfig, field: &str, value: &str) -> Result<(), String> {
    match field {
        "particles" => pending.particle_count = parse(value)?,
        "radius" => pending.radius = parse(value)?,
        "mass" => pending.mass = parse(value)?,
        "speed_min" => pending.speed_range.0 = parse(value)?,
        "speed_max" => pending.speed_range.1 = parse(value)?,
        "width" => pending.arena.width = parse(value)?,
        "height" => pending.arena.height = parse(value)?,
        "inset" => pending.arena.inset = parse(value)?,
        "dt" => pending.dt = parse(value)?,
        "total_steps" => pending.total_steps = parse(value)?,
        "warmup_steps" => pending.warmup_steps = parse(value)?,
        "sampling_interval" => pending.sampling_interval = parse(value)?,
        "seed" => pending.seed = parse(value)?,
        other => return Err(format!("unknown field: {}", other)),
    }
    Ok(())
}

fn parse<T: std::str::FromStr>(value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value: {}", value))
}

/// Read console lines until quit or EOF. `initial` seeds the pending config.
pub fn run_console(initial: SimConfig) {
    let mut pending = initial;
    print_help();
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("console read failed: {}", e);
                break;
            }
        }
        match parse_line(&line) {
            Ok(action) => {
                if run_action(action, &mut pending) {
                    break;
                }
            }
            Err(msg) => eprintln!("{}", msg),
        }
    }
}

/// Execute one parsed action. Returns true when the console should exit.
fn run_action(action: Action, pending: &mut SimConfig) -> bool {
    match action {
        Action::Empty => {}
        Action::Help => print_help(),
        Action::Show => show(pending),
        Action::Set { field, value } => match set_field(pending, &field, &value) {
            Ok(()) => println!("{} = {} (pending, 'apply' to take effect)", field, value),
            Err(msg) => eprintln!("{}", msg),
        },
        Action::Apply => {
            // A config that fails validation never reaches the gas.
            match pending.validate() {
                Ok(()) => send(SimCommand::ApplyConfig {
                    config: pending.clone(),
                }),
                Err(e) => eprintln!("cannot apply: {}", e),
            }
        }
        Action::Reset => send(SimCommand::Reset),
        Action::Pause => {
            PAUSED.store(true, Ordering::Relaxed);
            println!("Paused");
        }
        Action::Resume => {
            PAUSED.store(false, Ordering::Relaxed);
            println!("Running");
        }
        Action::StepOnce => send(SimCommand::StepOnce),
        Action::SetDt(dt) => {
            *TIMESTEP.lock() = dt;
            println!("dt = {}", dt);
        }
        Action::Stats => send(SimCommand::PrintStats),
        Action::Quit => return true,
    }
    false
}

fn send(cmd: SimCommand) {
    if let Some(tx) = SIM_COMMAND_SENDER.lock().as_ref() {
        if tx.send(cmd).is_err() {
            eprintln!("simulation thread is gone");
        }
    }
}

fn show(pending: &SimConfig) {
    println!("Pending configuration:");
    println!("  particles         = {}", pending.particle_count);
    println!("  radius            = {}", pending.radius);
    println!("  mass              = {}", pending.mass);
    println!("  speed_min         = {}", pending.speed_range.0);
    println!("  speed_max         = {}", pending.speed_range.1);
    println!("  width             = {}", pending.arena.width);
    println!("  height            = {}", pending.arena.height);
    println!("  inset             = {}", pending.arena.inset);
    println!("  dt                = {}", pending.dt);
    println!("  total_steps       = {}", pending.total_steps);
    println!("  warmup_steps      = {}", pending.warmup_steps);
    println!("  sampling_interval = {}", pending.sampling_interval);
    println!("  seed              = {}", pending.seed);
    println!(
        "Live: {} particles, timestep {}",
        PARTICLES.lock().len(),
        *TIMESTEP.lock()
    );
    if let Some(sample) = *LATEST_SAMPLE.lock() {
        println!(
            "      t = {:.2} s, {} collisions so far ({:.2}% particle)",
            sample.time, sample.total_collisions, sample.ratio_percent
        );
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  show                 print the pending configuration and live state");
    println!("  set <field> <value>  stage a config change ('apply' to take effect)");
    println!("  apply                validate and apply the pending configuration");
    println!("  reset                restart the run with the active configuration");
    println!("  pause / resume       stop or continue stepping");
    println!("  step                 advance one step while paused");
    println!("  dt <seconds>         change the live timestep");
    println!("  stats                print collision statistics");
    println!("  help                 this text");
    println!("  quit                 exit\n");
}
