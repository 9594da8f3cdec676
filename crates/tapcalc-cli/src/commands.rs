//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// tapcalc: keypad calculator with strict left-to-right chaining
#[derive(Parser, Debug)]
#[command(name = "tapcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Engine config file (YAML)
    #[arg(long, global = true, env = "TAPCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum digits per typed number (overrides the config file)
    #[arg(long, global = true)]
    pub max_digits: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a key sequence and print the display
    Eval(EvalArgs),

    /// Read key sequences line by line from stdin
    Repl(ReplArgs),

    /// Show the keypad layout
    Keypad(KeypadArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Keys to press, e.g. `2 + 3 × 4 =` (ASCII `* / -` also accepted)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: EvalFormat,
}

impl EvalArgs {
    /// Joins the key arguments into one sequence
    #[must_use]
    pub fn sequence(&self) -> String {
        self.keys.join(" ")
    }
}

/// Output format for eval
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvalFormat {
    /// Display text only
    #[default]
    Text,
    /// Full state as JSON
    Json,
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Print a prompt before each line
    #[arg(long)]
    pub prompt: bool,
}

/// Arguments for the keypad command
#[derive(Parser, Debug)]
pub struct KeypadArgs {
    /// Print the button table as JSON
    #[arg(long)]
    pub json: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    #[test]
    fn test_parse_eval_command() {
        let cli = Cli::parse_from(["tapcalc", "eval", "2", "+", "3", "="]);
        if let Commands::Eval(args) = cli.command {
            assert_eq!(args.sequence(), "2 + 3 =");
            assert_eq!(args.format, EvalFormat::Text);
        } else {
            panic!("expected Eval command");
        }
    }

    #[test]
    fn test_parse_eval_with_minus_key() {
        let cli = Cli::parse_from(["tapcalc", "eval", "9", "-", "4", "="]);
        if let Commands::Eval(args) = cli.command {
            assert_eq!(args.sequence(), "9 - 4 =");
        } else {
            panic!("expected Eval command");
        }
    }

    #[test]
    fn test_parse_eval_json() {
        let cli = Cli::parse_from(["tapcalc", "eval", "--format", "json", "7"]);
        if let Commands::Eval(args) = cli.command {
            assert_eq!(args.format, EvalFormat::Json);
        } else {
            panic!("expected Eval command");
        }
    }

    #[test]
    fn test_eval_requires_keys() {
        assert!(Cli::try_parse_from(["tapcalc", "eval"]).is_err());
    }

    #[test]
    fn test_parse_repl_command() {
        let cli = Cli::parse_from(["tapcalc", "repl", "--prompt"]);
        if let Commands::Repl(args) = cli.command {
            assert!(args.prompt);
        } else {
            panic!("expected Repl command");
        }
    }

    #[test]
    fn test_parse_keypad_command() {
        let cli = Cli::parse_from(["tapcalc", "keypad", "--json"]);
        assert!(matches!(cli.command, Commands::Keypad(KeypadArgs { json: true })));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "tapcalc",
            "-vv",
            "--color",
            "never",
            "--max-digits",
            "8",
            "keypad",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorArg::Never);
        assert_eq!(cli.max_digits, Some(8));
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }
}
