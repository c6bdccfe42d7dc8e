//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

/// Veracity CLI - Fact-check claims against Wikipedia with a Gemini agent.
#[derive(Debug, Parser)]
#[command(name = "veracity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Gemini model to use instead of the configured one
    #[arg(short, long, global = true, env = "VERACITY_MODEL")]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fact-check a claim (prompts for one when omitted)
    Check(CheckArgs),

    /// Show the ranked topic phrases extracted from a text
    Topics(TextArgs),

    /// Show the Wikipedia document retrieved for a text
    Evidence(TextArgs),

    /// Enter interactive REPL mode
    Repl,

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Claim to verify
    pub claim: Vec<String>,
}

impl CheckArgs {
    /// The claim words joined back together, if any were given
    pub fn claim(&self) -> Option<String> {
        if self.claim.is_empty() {
            None
        } else {
            Some(self.claim.join(" "))
        }
    }
}

/// Arguments for commands taking free text.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Text to analyse
    #[arg(required = true)]
    pub text: Vec<String>,
}

impl TextArgs {
    /// The text words joined back together
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
