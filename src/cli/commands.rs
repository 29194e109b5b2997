// src/cli/commands.rs
use clap::Subcommand;

use crate::cli::PolicyArgs;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        #[command(flatten)]
        policy: PolicyArgs,

        /// Number of passwords to generate
        #[arg(long, short)]
        count: Option<usize>,

        /// Seed for a reproducible (NOT secure) password stream
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check a password against the policy
    Check {
        /// Password to check
        #[arg(required = true)]
        password: String,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Show the effective policy
    Policy {
        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Generate passwords interactively
    Interactive,
}
