//! Katatoe driver - scripted sessions from the command line
//!
//! Stands in for a presentation layer: it owns a `Store`, dispatches a
//! script of actions against it, and prints what came back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod output;
mod script;

pub use cli::{Cli, Command, ScriptArgs};
pub use config::{
    ConfigError, DEFAULT_LOG_LEVEL, DriverConfig, OutputFormat, SEED_ENV, startup_log_level,
};
pub use driver::{Rejection, Report, Step, run_script};
pub use output::render;
pub use script::{ScriptError, parse_action, parse_script};
