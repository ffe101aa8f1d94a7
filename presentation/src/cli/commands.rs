//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for chatlens_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => chatlens_domain::OutputFormat::Text,
            OutputFormat::Json => chatlens_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for chatlens
#[derive(Parser, Debug)]
#[command(name = "chatlens")]
#[command(author, version, about = "Heuristics for pasted text-message conversations")]
#[command(long_about = r#"
chatlens runs the deterministic pre- and post-processing around an external
conversation analysis:

1. Speakers: find who is talking and which one is you
2. Format: tell a pasted dialogue from a free-form story
3. Interpret: turn raw analysis scores into tiers and badge the quoted evidence

Configuration files are loaded from (in priority order):
1. CHATLENS_* environment variables (e.g. CHATLENS_EVIDENCE__VISIBLE_LIMIT=5)
2. --config <path>          Explicit config file
3. ./chatlens.toml          Project-level config
4. ~/.config/chatlens/config.toml   Global config

Example:
  chatlens speakers chat.txt
  pbpaste | chatlens prepare - --me Alex
  chatlens read chat.txt --payload analysis.json -o json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Detect speaker candidates and assign roles
    Speakers {
        /// Conversation file, or `-` for stdin
        input: PathBuf,

        /// Which speaker you are
        #[arg(long, value_name = "NAME")]
        me: Option<String>,
    },

    /// Classify text as conversation or narrative
    Format {
        /// Conversation file, or `-` for stdin
        input: PathBuf,
    },

    /// Build the analysis request context
    Prepare {
        /// Conversation file, or `-` for stdin
        input: PathBuf,

        /// Which speaker you are
        #[arg(long, value_name = "NAME")]
        me: Option<String>,
    },

    /// Derive metrics and rank evidence from an analysis payload
    Interpret {
        /// Analysis payload (JSON), or `-` for stdin
        payload: PathBuf,

        /// Evidence items to show (overrides config)
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Run the full pipeline, replaying a recorded analysis payload
    Read {
        /// Conversation file, or `-` for stdin
        input: PathBuf,

        /// Recorded analysis payload (JSON)
        #[arg(long, value_name = "PATH")]
        payload: PathBuf,

        /// Which speaker you are
        #[arg(long, value_name = "NAME")]
        me: Option<String>,

        /// Evidence items to show (overrides config)
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_read() {
        let cli = Cli::try_parse_from([
            "chatlens", "read", "chat.txt", "--payload", "a.json", "--me", "Alex", "-o", "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command.unwrap(),
            Command::Read {
                input: PathBuf::from("chat.txt"),
                payload: PathBuf::from("a.json"),
                me: Some("Alex".to_string()),
                limit: None,
            }
        );
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["chatlens", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_read_requires_payload() {
        assert!(Cli::try_parse_from(["chatlens", "read", "chat.txt"]).is_err());
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["chatlens", "--no-config", "-q", "format", "-"]).unwrap();
        assert!(cli.no_config);
        assert!(cli.quiet);
        assert!(cli.output.is_none());
    }
}
