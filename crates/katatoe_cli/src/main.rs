//! Katatoe - unified CLI
//!
//! Dispatches scripted tic-tac-toe sessions and prints the result.

#![warn(missing_docs)]

use anyhow::{Result, bail};
use clap::Parser;
use katatoe::Store;
use katatoe_cli::{
    Cli, Command, DriverConfig, ScriptArgs, parse_script, render, run_script, startup_log_level,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let loaded = DriverConfig::load(cli.config.as_deref()).and_then(DriverConfig::apply_env);
    init_tracing(startup_log_level(&loaded));
    let config = loaded.inspect_err(|e| error!(error = %e, "Failed to load configuration"))?;

    match cli.command {
        Command::Play {
            script,
            format,
            trace,
            stop_on_error,
        } => {
            let config = config
                .clone()
                .with_trace(trace || *config.trace())
                .with_stop_on_error(stop_on_error || *config.stop_on_error());
            let config = match format {
                Some(format) => config.with_format(format),
                None => config,
            };
            run_play(script, &config)
        }
        Command::Status { script } => run_status(script, &config),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Builds a store from the CLI seed, falling back to config, then entropy.
fn build_store(seed: Option<u64>, config: &DriverConfig) -> Store {
    match seed.or(*config.seed()) {
        Some(seed) => {
            debug!(seed, "Seeded store");
            Store::seeded(seed)
        }
        None => Store::from_entropy(),
    }
}

/// Run the play command
fn run_play(script: ScriptArgs, config: &DriverConfig) -> Result<()> {
    let actions = parse_script(&script.actions)?;
    let mut store = build_store(script.seed, config);
    info!(actions = actions.len(), first = %store.state().turn(), "Starting session");

    let report = run_script(&mut store, &actions, *config.stop_on_error());
    println!("{}", render(&report, *config.format(), *config.trace())?);

    if *report.aborted() {
        bail!("Stopped at first rejected action");
    }
    Ok(())
}

/// Run the status command
fn run_status(script: ScriptArgs, config: &DriverConfig) -> Result<()> {
    let actions = parse_script(&script.actions)?;
    let mut store = build_store(script.seed, config);
    let report = run_script(&mut store, &actions, false);
    println!("{}", report.final_state().status());
    Ok(())
}
