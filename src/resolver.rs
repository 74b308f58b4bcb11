//! Transitive dependency resolution.
//!
//! Given the root packages the user wants to keep, the resolver computes the
//! full transitive closure of package names that must survive pruning: every
//! name reachable from a root via declared `dependencies` or
//! `peerDependencies` edges.
//!
//! The closure is computed with an iterative worklist rather than recursion,
//! so very deep dependency chains cannot exhaust the call stack. Each name is
//! resolved at most once (guarded by set insertion before scheduling), which
//! also makes cyclic graphs terminate. The traversal order does not affect
//! the result: membership is monotonic and idempotent, so any order reaches
//! the same fixed point.

use crate::error::Result;
use crate::package_json::read_package_json;
use crate::patterns::ForcePrunePatterns;
use std::collections::{HashSet, VecDeque};
use std::path::Path;

/// Compute the retention closure and compile the force-prune patterns.
///
/// * `modules_dir` - the dependency directory holding installed packages
/// * `keep` - root package names to keep (deduplicated here)
/// * `prune` - force-prune pattern strings; a pattern that fails to compile
///   aborts the run before any pruning is attempted
///
/// A kept or transitive name with no corresponding on-disk package is skipped
/// silently: workspace-only and optional references are common and expected.
pub fn compute_retention(
    modules_dir: &Path,
    keep: &[String],
    prune: &[String],
) -> Result<(HashSet<String>, ForcePrunePatterns)> {
    let force_prune = ForcePrunePatterns::compile(prune)?;
    let retained = resolve_transitive_dependencies(modules_dir, keep);
    Ok((retained, force_prune))
}

/// Expand root package names into their full transitive closure.
fn resolve_transitive_dependencies(modules_dir: &Path, keep: &[String]) -> HashSet<String> {
    let mut retained: HashSet<String> = HashSet::new();
    let mut worklist: VecDeque<String> = VecDeque::new();

    for name in keep {
        if retained.insert(name.clone()) {
            worklist.push_back(name.clone());
        }
    }

    while let Some(name) = worklist.pop_front() {
        // Scoped names like "@scope/pkg" resolve to nested paths via join.
        let Some(pkg) = read_package_json(&modules_dir.join(&name)) else {
            continue;
        };

        for dep in pkg.dependency_names() {
            if retained.insert(dep.to_string()) {
                worklist.push_back(dep.to_string());
            }
        }
    }

    retained
}
