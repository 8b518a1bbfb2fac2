use clap::{Parser, Subcommand};

use crate::application::dto::OutputFormat;

/// Query the dependency graph of a component scope
#[derive(Parser, Debug)]
#[command(name = "scope-graph")]
#[command(version)]
#[command(about = "Query the dependency graph of a component scope", long_about = None)]
pub struct Args {
    /// Path to the scope directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub path: Option<String>,

    /// Output format: json or markdown
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Path to a config file (defaults to scope-graph.config.yml in the scope directory)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Maximum number of version objects loaded concurrently
    #[arg(long, global = true, value_name = "N", value_parser = parse_max_concurrency)]
    pub max_concurrency: Option<usize>,

    /// Add dev-require edges for flattened dev dependencies
    #[arg(long, global = true)]
    pub include_dev: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the component versions that still depend on the given identifiers
    Dependents {
        /// Identifiers such as scope/name (any version) or scope/name@1.0.0
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,

        /// Exit with code 1 when any identifier still has dependents
        #[arg(long)]
        fail_on_dependents: bool,
    },
    /// Show a component and its latest (or a specific) version
    Show {
        /// Identifier such as scope/name, scope/name@latest or scope/name@1.0.0
        #[arg(value_name = "ID")]
        id: String,

        /// List every loaded version of the component
        #[arg(long)]
        all_versions: bool,
    },
}

fn parse_max_concurrency(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", s))?;
    if value == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(value)
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
