//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// noodle: evaluate arithmetic expressions with live tokens and history
#[derive(Parser, Debug)]
#[command(name = "noodle")]
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

    /// Session config file (YAML)
    #[arg(long, global = true, env = "NOODLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Drop unrecognized characters instead of rejecting them
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Treat division by zero as an error instead of Infinity/NaN
    #[arg(long, global = true)]
    pub reject_division_by_zero: bool,

    /// Maximum number of history entries
    #[arg(long, global = true, value_name = "N")]
    pub history_size: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an expression
    Eval(EvalArgs),

    /// Show the tokens of an expression
    Tokens(TokensArgs),

    /// Check parenthesis balance without evaluating
    Check(CheckArgs),

    /// Read expressions line by line from stdin
    Repl,

    /// Start the full-screen terminal interface
    Tui,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Expression to evaluate
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Print only the value
    #[arg(long, conflicts_with = "format")]
    pub raw: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Also print the token table
    #[arg(short, long)]
    pub tokens: bool,
}

/// Arguments for the tokens command
#[derive(Parser, Debug)]
pub struct TokensArgs {
    /// Expression to tokenize
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Expression to check
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
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
    use crate::output::OutputFormat;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    mod cli_tests {
        use super::*;

        #[test]
        fn test_verify_cli() {
            use clap::CommandFactory;
            Cli::command().debug_assert();
        }

        #[test]
        fn test_parse_eval() {
            let cli = parse(&["noodle", "eval", "1 + 2"]);
            match cli.command {
                Commands::Eval(args) => {
                    assert_eq!(args.expression, "1 + 2");
                    assert!(!args.raw);
                    assert!(!args.tokens);
                    assert_eq!(args.format, FormatArg::Text);
                }
                _ => panic!("expected eval"),
            }
        }

        #[test]
        fn test_parse_eval_leading_minus() {
            let cli = parse(&["noodle", "eval", "-5 + 10"]);
            match cli.command {
                Commands::Eval(args) => assert_eq!(args.expression, "-5 + 10"),
                _ => panic!("expected eval"),
            }
        }

        #[test]
        fn test_parse_global_flags() {
            let cli = parse(&[
                "noodle",
                "-vv",
                "--lenient",
                "--reject-division-by-zero",
                "--history-size",
                "5",
                "repl",
            ]);
            assert_eq!(cli.verbose, 2);
            assert!(cli.lenient);
            assert!(cli.reject_division_by_zero);
            assert_eq!(cli.history_size, Some(5));
            assert!(matches!(cli.command, Commands::Repl));
        }

        #[test]
        fn test_global_flags_after_subcommand() {
            let cli = parse(&["noodle", "tokens", "1+x", "--format", "json", "-q"]);
            assert!(cli.quiet);
            match cli.command {
                Commands::Tokens(args) => assert_eq!(args.format, FormatArg::Json),
                _ => panic!("expected tokens"),
            }
        }

        #[test]
        fn test_raw_conflicts_with_format() {
            assert!(
                Cli::try_parse_from(["noodle", "eval", "1", "--raw", "--format", "json"]).is_err()
            );
        }

        #[test]
        fn test_subcommand_required() {
            assert!(Cli::try_parse_from(["noodle"]).is_err());
        }
    }

    mod arg_conversion_tests {
        use super::*;

        #[test]
        fn test_color_arg_conversion() {
            assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
            assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
            assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        }

        #[test]
        fn test_format_arg_conversion() {
            assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
            assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        }
    }
}
