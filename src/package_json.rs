//! Package metadata reading.
//!
//! A package directory is identified by a parseable `package.json` at its
//! root. Absence of that file (or a file that fails to parse) is an expected,
//! frequent outcome (workspace-only references, `.bin` folders, stray
//! directories), so the reader returns `Option` rather than an error.
//!
//! The reader is a pure function of the filesystem at call time. Both the
//! dependency resolver and the pruning walker call it independently, with no
//! shared cache, so there is no stale-data risk if the tree changes between
//! calls.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name of the metadata file identifying a package directory.
pub const PACKAGE_JSON: &str = "package.json";

/// Parsed `package.json` descriptor.
///
/// Only the fields prunify cares about are modeled; unknown fields are
/// ignored. Missing dependency maps are treated as empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    /// Package name as declared in the metadata.
    pub name: String,

    /// Declared runtime dependencies (name -> version spec).
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    /// Declared peer dependencies (name -> version spec).
    #[serde(default)]
    pub peer_dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    /// Iterate over the names of all declared runtime and peer dependencies.
    ///
    /// A name appearing in both maps is yielded twice; consumers dedup via
    /// set insertion.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .chain(self.peer_dependencies.keys())
            .map(String::as_str)
    }
}

/// Read and parse the `package.json` inside `dir`.
///
/// Returns `None` when the file does not exist or does not parse; the
/// directory is then not package-like.
pub fn read_package_json(dir: &Path) -> Option<PackageJson> {
    let contents = fs::read_to_string(dir.join(PACKAGE_JSON)).ok()?;
    serde_json::from_str(&contents).ok()
}
