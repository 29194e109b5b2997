// src/cli/mod.rs
use clap::{Args as ClapArgs, Parser};

use crate::core::config::Config;
use crate::generators::Policy;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Command to execute (defaults to generate)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Policy overrides shared by every command that needs a policy.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Minimum password length
    #[arg(long)]
    pub min: Option<usize>,

    /// Maximum password length
    #[arg(long)]
    pub max: Option<usize>,

    /// Exact password length (sets both min and max)
    #[arg(long, short, conflicts_with_all = ["min", "max"])]
    pub length: Option<usize>,

    /// Require every character class regardless of configuration
    #[arg(long)]
    pub strong: bool,

    /// Don't require a lowercase letter
    #[arg(long, conflicts_with = "strong")]
    pub no_lowercase: bool,

    /// Don't require an uppercase letter
    #[arg(long, conflicts_with = "strong")]
    pub no_uppercase: bool,

    /// Don't require a digit
    #[arg(long, conflicts_with = "strong")]
    pub no_digits: bool,

    /// Don't require a symbol
    #[arg(long, conflicts_with = "strong")]
    pub no_symbols: bool,
}

impl PolicyArgs {
    /// Layers the command line over the configured defaults.
    pub fn resolve(&self, config: &Config) -> Policy {
        let (min, max) = match self.length {
            Some(length) => (length, length),
            None => {
                let min = self.min.unwrap_or(config.min_length);
                // a lone --min above the configured max drags max along
                let max = self.max.unwrap_or(config.max_length.max(min));
                (min, max)
            }
        };

        if self.strong {
            return Policy::strong(min, max);
        }

        Policy::new(
            min,
            max,
            config.require_lowercase && !self.no_lowercase,
            config.require_uppercase && !self.no_uppercase,
            config.require_digit && !self.no_digits,
            config.require_symbol && !self.no_symbols,
        )
    }
}
