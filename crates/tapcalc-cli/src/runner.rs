//! Command execution

use std::io::Write;

use tapcalc::config::EngineConfig;
use tapcalc::core::CalcError;
use tapcalc::keypad::Keypad;
use tapcalc::session::CalculatorSession;

use crate::commands::{Cli, EvalArgs, EvalFormat, KeypadArgs};
use crate::config::{CliConfig, Verbosity};
use crate::error::{CliError, CliResult};
use crate::output::DisplayPrinter;

/// Builds the CLI configuration from flags and the optional config file
pub fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);

    let mut engine = match &cli.config {
        Some(path) => EngineConfig::load(path).map_err(config_error)?,
        None => EngineConfig::default(),
    };
    if let Some(max) = cli.max_digits {
        engine = engine.with_max_input_digits(Some(max));
    }
    engine.validate().map_err(config_error)?;

    Ok(CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.into())
        .with_engine(engine))
}

fn config_error(err: CalcError) -> CliError {
    match err {
        CalcError::Config(message) => CliError::config(message),
        other => other.into(),
    }
}

/// Runs a key sequence from the initial state and writes the result
pub fn run_eval<W: Write>(config: &CliConfig, args: &EvalArgs, out: &mut W) -> CliResult<()> {
    let mut session = CalculatorSession::new(config.engine.clone()).map_err(config_error)?;
    let sequence = args.sequence();
    session.enter(&sequence)?;
    tracing::info!(sequence = %sequence, display = session.display(), "evaluated");

    match args.format {
        EvalFormat::Text => {
            let printer = DisplayPrinter::new(config.color.should_color());
            writeln!(out, "{}", printer.display(session.display()))?;
        }
        EvalFormat::Json => {
            let json = serde_json::to_string_pretty(session.state())?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

/// Writes the keypad grid or its button table
pub fn run_keypad<W: Write>(args: &KeypadArgs, out: &mut W) -> CliResult<()> {
    let keypad = Keypad::new();
    if args.json {
        let json = serde_json::to_string_pretty(keypad.buttons())?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{}", keypad.render_grid())?;
    }
    Ok(())
}
