//! Gish CLI Binary
//!
//! Command-line interface for browsing GitHub as a virtual filesystem.

use clap::Parser;
use gish::cli::{command_name, map_error, Cli, RunContext};
use gish::config::ConfigLoader;
use gish::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Gish CLI starting");

    let mut context = match RunContext::new(cli.config.as_deref(), cli.no_color) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing gish: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let command = cli.command();
    match context.execute(command) {
        Ok(output) => {
            info!(command = command_name(command), "Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!(command = command_name(command), "Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults. Logging stays
/// off unless the config file enables it, `--verbose` is given or a level is
/// set explicitly.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let loaded = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(),
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_default();

    if cli.verbose {
        config.enabled = true;
        config.level = "debug".to_string();
        config.output = "stderr".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.enabled = true;
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    if cli.no_color {
        config.color = false;
    }

    config
}
