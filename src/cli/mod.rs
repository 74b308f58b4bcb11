//! CLI argument parsing for prunify.
//!
//! Uses clap derive macros for declarative argument definitions. The actual
//! implementation lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Prunify: prune extraneous packages from an installed node_modules tree.
///
/// Computes the transitive closure of the packages named with `--externals`
/// and deletes every installed package the closure does not justify. Intended
/// as a post-install step before packaging (e.g. building a container image).
#[derive(Parser, Debug)]
#[command(name = "prunify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List the packages that would be pruned without deleting anything.
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Comma-separated package names to keep, together with their transitive
    /// dependencies (also works with mono-repo dependencies).
    #[arg(short = 'e', long, value_delimiter = ',')]
    pub externals: Vec<String>,

    /// Comma-separated regex patterns for directories to force prune, even
    /// when they would otherwise be kept.
    #[arg(short = 'p', long, value_delimiter = ',')]
    pub prune: Vec<String>,

    /// The dependency directory to prune.
    #[arg(short = 'm', long, default_value = "node_modules")]
    pub modules_dir: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
