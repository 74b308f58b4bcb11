//! Command implementation for prunify.
//!
//! The orchestrator: measures the modules directory, resolves the retention
//! closure, runs the pruning walk, and reports the before/after size. The
//! resolver runs to completion before the walk starts; the walk never
//! re-enters the resolver.

use crate::cli::Cli;
use crate::error::{PrunifyError, Result};
use crate::resolver::compute_retention;
use crate::size::{format_size, get_directory_size};
use crate::walker::{PruneReport, prune_directories_of};
use colored::Colorize;
use std::path::Path;

/// Execute the prune run described by the parsed CLI arguments.
///
/// Fails only for fatal conditions: a missing modules directory (user error,
/// exit 1) or a force-prune pattern that does not compile (configuration
/// error, exit 2). Individual deletion failures are warnings and never affect
/// the exit status.
pub fn cmd_prune(args: Cli) -> Result<()> {
    let modules_dir = args.modules_dir.as_path();
    if !modules_dir.is_dir() {
        return Err(PrunifyError::UserError(format!(
            "modules directory '{}' does not exist or is not a directory",
            modules_dir.display()
        )));
    }

    log_prune_start(modules_dir);

    let (keep, force_prune) = compute_retention(modules_dir, &args.externals, &args.prune)?;

    let mut report = PruneReport::default();
    prune_directories_of(modules_dir, &keep, &force_prune, args.dry_run, &mut report);

    log_prune_end(modules_dir, &report, args.dry_run);
    Ok(())
}

fn log_prune_start(modules_dir: &Path) {
    let size_before = format_size(get_directory_size(modules_dir));
    println!(
        "node_modules size un-optimized being: {}",
        size_before.red().bold()
    );
    println!("{}", "Pruning node_modules".bold());
}

fn log_prune_end(modules_dir: &Path, report: &PruneReport, dry_run: bool) {
    if dry_run {
        println!(
            "{}",
            format!(
                "Dry-run complete: {} package(s) would be pruned.",
                report.would_prune.len()
            )
            .bold()
        );
        return;
    }

    println!("{}", "Pruning complete".bold());
    if !report.failed.is_empty() {
        println!("  Skipped: {} item(s)", report.failed.len());
    }

    let size_after = format_size(get_directory_size(modules_dir));
    println!(
        "node_modules size optimized being: {}",
        size_after.blue().bold()
    );
}
