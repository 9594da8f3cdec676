//! tapcalc CLI library
//!
//! Command-line host for the tapcalc engine: evaluate key sequences,
//! run an interactive line loop, and print the keypad.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod repl;
mod runner;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, EvalFormat, KeypadArgs, ReplArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::DisplayPrinter;
pub use runner::{build_config, run_eval, run_keypad};
