//! Command-line interface for katatoe.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Katatoe - scripted tic-tac-toe sessions
#[derive(Parser, Debug)]
#[command(name = "katatoe")]
#[command(about = "Dispatch tic-tac-toe actions and print the resulting state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dispatch a script of actions and print the resulting state
    Play {
        /// Script to dispatch
        #[command(flatten)]
        script: ScriptArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Print every intermediate state, not just the last
        #[arg(long)]
        trace: bool,

        /// Abort on the first rejected action
        #[arg(long)]
        stop_on_error: bool,
    },

    /// Dispatch a script and print only the game status
    Status {
        /// Script to dispatch
        #[command(flatten)]
        script: ScriptArgs,
    },
}

/// Seed and action tokens shared by every command.
#[derive(Args, Debug)]
pub struct ScriptArgs {
    /// Seed for the starting-player draw (overrides config and KATATOE_SEED)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Actions: cell index 0-8, cell label (e.g. top-left), or `new`
    #[arg(value_name = "ACTION")]
    pub actions: Vec<String>,
}
