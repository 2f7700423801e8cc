/// CLI tool for running headless collision count measurements
use gas_sim::batch::BatchRunner;
use gas_sim::config::SimConfig;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "init-config" => init_config(&args[2..]),
        "run" => run(&args[2..]),
        _ => {
            println!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║  Gas Sim Batch Runner - Collision Count Measurement  ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");
    println!("Usage: cargo run --release --bin batch_runner <command> [options]\n");
    println!("Commands:");
    println!("  init-config    Write a default configuration file");
    println!("  run            Run a measurement from a configuration file\n");
    println!("Examples:");
    println!("  # Write a starting configuration");
    println!("  cargo run --release --bin batch_runner init-config gas_config.toml\n");
    println!("  # Run with it (results land in batch_results/)");
    println!("  cargo run --release --bin batch_runner run gas_config.toml\n");
    println!("  # Run with an explicit output directory");
    println!("  cargo run --release --bin batch_runner run gas_config.toml results\n");
}

fn init_config(args: &[String]) {
    if args.is_empty() {
        println!("❌ Error: Please specify output file name");
        println!("Usage: cargo run --bin batch_runner init-config <output_file.toml>");
        std::process::exit(1);
    }

    let output_file = &args[0];

    match SimConfig::default().to_file(output_file) {
        Ok(()) => {
            println!("✅ Default configuration written to {}", output_file);
            println!("   Edit it, then start a run with:");
            println!(
                "   cargo run --release --bin batch_runner run {}",
                output_file
            );
        }
        Err(e) => {
            println!("❌ Error writing config: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &[String]) {
    if args.is_empty() {
        println!("❌ Error: Please specify configuration file");
        println!("Usage: cargo run --bin batch_runner run <config_file.toml> [output_dir]");
        std::process::exit(1);
    }

    let config_file = &args[0];
    let output_dir = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "batch_results".to_string());

    let config = match SimConfig::from_file(config_file) {
        Ok(config) => config,
        Err(e) => {
            println!("❌ Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        println!("❌ Invalid config: {}", e);
        std::process::exit(1);
    }

    let runner = BatchRunner::new(config, output_dir);
    match runner.run() {
        Ok(_) => println!("\n✅ Batch run completed successfully!\n"),
        Err(e) => {
            println!("❌ Error during run: {}", e);
            std::process::exit(1);
        }
    }
}
