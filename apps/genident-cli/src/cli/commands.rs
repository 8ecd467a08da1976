//! # CLI Commands
//! A module for all the commands that can be run from the CLI

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Turn arbitrary strings into legal, non-reserved identifiers
    Sanitize {
        /// Strings to sanitize
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Suggest short variable names, e.g. for type names
    Suggest {
        /// Strings to abbreviate
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Claim every suggestion in one scope so that no two results are equal
        #[arg(long)]
        claim: bool,
    },
    /// Claim names in order in a single scope and print what was allocated
    Claim {
        /// Names to claim
        #[arg(required = true)]
        names: Vec<String>,

        /// Reserve the names in every enclosing scope
        #[arg(long)]
        global: bool,

        /// Number of scopes to nest below the root before claiming
        #[arg(long, default_value_t = 0)]
        depth: usize,
    },
    /// Print the public (exported) form of an identifier
    Public {
        /// A valid identifier
        name: String,
    },
    /// Print the private (unexported) form of an identifier
    Private {
        /// A valid identifier
        name: String,
    },
    /// Print the resolved language profile
    Profile,
}
