//! The pruning walker.
//!
//! Walks a dependency directory depth-first and deletes every directory entry
//! that is not justified by the retention set. Per entry the walk decides one
//! of: keep, force-prune, prune as unreferenced package, prune because empty,
//! or prune because it is the reserved binaries folder.
//!
//! Directory entries without a parseable descriptor are grouping directories
//! (scope directories like `@babel`, monorepo/workspace folders, stray
//! directories); the walk recurses into them *before* deciding their fate, so
//! a grouping directory emptied by pruning its members is itself pruned in the
//! same pass. Entries with a descriptor are unit decisions: kept wholesale
//! when retained, deleted wholesale otherwise.
//!
//! The walk is best-effort. A single deletion or listing that fails is logged
//! as a warning, recorded in the report, and never aborts the run.

use crate::package_json::read_package_json;
use crate::patterns::ForcePrunePatterns;
use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Reserved folder holding installed binary shims; always pruned.
pub const BINARIES_FOLDER: &str = ".bin";

/// Outcome of a pruning walk.
///
/// Paths are recorded as they are settled, so the orchestrator can print a
/// summary and tests can observe the walk without scraping stdout.
#[derive(Debug, Default)]
pub struct PruneReport {
    /// Directories that were deleted.
    pub pruned: Vec<PathBuf>,
    /// Directories that would have been deleted (dry-run only).
    pub would_prune: Vec<PathBuf>,
    /// Directories whose deletion or listing failed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl PruneReport {
    /// Total number of directories pruned (or reported under dry-run).
    pub fn pruned_count(&self) -> usize {
        self.pruned.len() + self.would_prune.len()
    }
}

/// Prune the contents of a dependency directory.
///
/// For each directory entry of `modules_dir`:
/// 1. Non-directory entries are skipped (files at this level are not packages).
/// 2. The entry's descriptor is read; entries without one are grouping
///    directories and are recursed into first.
/// 3. Force-prune is checked against the *directory name*; it overrides
///    retention unconditionally.
/// 4. A retained package (descriptor name in `keep`, not force-pruned) is kept
///    and its subtree is never touched.
/// 5. Everything else is deleted when it is an unreferenced package, is empty
///    (evaluated after recursion), is force-pruned, or is the `.bin` folder.
///
/// Under `dry_run` deletions are replaced by a reported path; the filesystem
/// is never mutated.
pub fn prune_directories_of(
    modules_dir: &Path,
    keep: &HashSet<String>,
    force_prune: &ForcePrunePatterns,
    dry_run: bool,
    report: &mut PruneReport,
) {
    let entries = match fs::read_dir(modules_dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn_failure(modules_dir, "list", &e);
            report
                .failed
                .push((modules_dir.to_path_buf(), e.to_string()));
            return;
        }
    };

    for entry in entries.flatten() {
        let is_directory = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_directory {
            continue;
        }

        let directory_name = entry.file_name().to_string_lossy().into_owned();
        let current_path = entry.path();
        let package = read_package_json(&current_path);

        if package.is_none() {
            // A grouping directory: its members may themselves be packages.
            // Settle them before deciding this entry's own fate.
            prune_directories_of(&current_path, keep, force_prune, dry_run, report);
        }

        let force_pruned = force_prune.matches(&directory_name);

        if !force_pruned
            && let Some(pkg) = &package
            && keep.contains(&pkg.name)
        {
            continue;
        }

        // Evaluated after recursion: a grouping directory emptied by pruning
        // its members is eligible on this same pass.
        let is_empty = is_directory_empty(&current_path);

        if package.is_some() || is_empty || force_pruned || directory_name == BINARIES_FOLDER {
            prune_directory(&current_path, &directory_name, dry_run, report);
        }
    }
}

/// Whether a directory currently has zero entries. Unreadable directories
/// count as non-empty so they are never deleted on a guess.
fn is_directory_empty(path: &Path) -> bool {
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

/// Delete one directory tree, or report it under dry-run.
fn prune_directory(path: &Path, directory_name: &str, dry_run: bool, report: &mut PruneReport) {
    if dry_run {
        println!(
            "{} Package that would be pruned: {}",
            "[Dry-run]".bright_black().bold(),
            path.display()
        );
        report.would_prune.push(path.to_path_buf());
        return;
    }

    match fs::remove_dir_all(path) {
        Ok(()) => report.pruned.push(path.to_path_buf()),
        Err(e) => {
            warn_failure(path, &format!("delete '{}'", directory_name), &e);
            report.failed.push((path.to_path_buf(), e.to_string()));
        }
    }
}

fn warn_failure(path: &Path, action: &str, error: &std::io::Error) {
    eprintln!(
        "{} {}: {}",
        format!("Failed to {}", action).yellow().bold(),
        path.display(),
        error
    );
}
