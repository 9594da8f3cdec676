//! tapcalc: keypad calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! tapcalc eval 2 + 3 × 4 =      # prints 20
//! tapcalc eval --format json 6 ×
//! tapcalc repl --prompt         # one key sequence per line
//! tapcalc keypad
//! ```

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tapcalc::session::CalculatorSession;
use tapcalc_cli::{
    build_config, logging, repl, run_eval, run_keypad, Cli, CliResult, Commands, DisplayPrinter,
    Verbosity,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.quiet, cli.verbose))?;
    let config = build_config(&cli)?;
    tracing::debug!(?config, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Eval(args) => run_eval(&config, &args, &mut out),
        Commands::Repl(args) => {
            let mut session = CalculatorSession::new(config.engine.clone())?;
            let printer = DisplayPrinter::new(config.color.should_color());
            let stdin = io::stdin();
            repl::run_repl(&mut session, stdin.lock(), &mut out, printer, args.prompt)
        }
        Commands::Keypad(args) => run_keypad(&args, &mut out),
    };
    result?;

    out.flush()?;
    Ok(())
}
