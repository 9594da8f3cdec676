//! Line-oriented interactive loop
//!
//! Each input line is a key sequence applied to one persistent session.
//! A bad line is reported and the state is kept.

use std::io::{BufRead, Write};

use tapcalc::session::CalculatorSession;

use crate::error::CliResult;
use crate::output::DisplayPrinter;

/// Commands that end the loop
const EXIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Runs the loop until EOF or an exit word
pub fn run_repl<R, W>(
    session: &mut CalculatorSession,
    input: R,
    output: &mut W,
    printer: DisplayPrinter,
    prompt: bool,
) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    if prompt {
        write!(output, "{}", printer.prompt())?;
        output.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        if EXIT_WORDS.contains(&trimmed) {
            break;
        }

        if !trimmed.is_empty() {
            match session.enter(trimmed) {
                Ok(display) => writeln!(output, "{}", printer.display(display))?,
                Err(e) => {
                    tracing::info!(line = trimmed, error = %e, "rejected input line");
                    writeln!(output, "{}", printer.error(&e.to_string()))?;
                }
            }
        }

        if prompt {
            write!(output, "{}", printer.prompt())?;
            output.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn run(input: &str) -> (CalculatorSession, String) {
        let mut session = CalculatorSession::default();
        let mut output = Vec::new();
        run_repl(
            &mut session,
            input.as_bytes(),
            &mut output,
            DisplayPrinter::new(false),
            false,
        )
        .unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_repl_prints_display_per_line() {
        let (_, out) = run("2 +\n3 ×\n4 =\n");
        assert_eq!(out, "2\n5\n20\n");
    }

    #[test]
    fn test_repl_keeps_state_after_error() {
        let (session, out) = run("12\n1 ? 2\n+ 1 =\n");
        assert_eq!(out.lines().nth(1).unwrap(), "Error: Unknown key \"?\" at offset 2");
        assert_eq!(session.display(), "13");
    }

    #[test]
    fn test_repl_stops_on_exit_word() {
        let (session, out) = run("5\nquit\n6\n");
        assert_eq!(out, "5\n");
        assert_eq!(session.display(), "5");
    }

    #[test]
    fn test_repl_skips_blank_lines() {
        let (_, out) = run("\n   \n7\n");
        assert_eq!(out, "7\n");
    }

    #[test]
    fn test_repl_prompt() {
        let mut session = CalculatorSession::default();
        let mut output = Vec::new();
        run_repl(
            &mut session,
            "1\n".as_bytes(),
            &mut output,
            DisplayPrinter::new(false),
            true,
        )
        .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "> 1\n> ");
    }
}
