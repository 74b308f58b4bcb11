//! Compiled force-prune pattern matching.
//!
//! Directory names matching any of these patterns are always pruned,
//! regardless of retention status. Patterns are user-supplied regular
//! expressions, compiled once per run; a pattern that fails to compile is a
//! fatal configuration error.

use crate::error::{PrunifyError, Result};
use regex::Regex;

/// Compiled force-prune patterns for efficient matching.
///
/// Create once per run. Immutable after construction.
pub struct ForcePrunePatterns {
    /// The compiled regex patterns paired with their original string
    /// representations.
    patterns: Vec<(Regex, String)>,
}

impl std::fmt::Debug for ForcePrunePatterns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForcePrunePatterns")
            .field(
                "patterns",
                &self.patterns.iter().map(|(_, s)| s).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ForcePrunePatterns {
    /// Compile force-prune patterns from their string forms.
    ///
    /// # Returns
    ///
    /// * `Ok(ForcePrunePatterns)` - Successfully compiled patterns
    /// * `Err(PrunifyError::InvalidPattern)` - If any pattern fails to compile
    ///   (configuration error, exit 2)
    pub fn compile(pattern_strs: &[String]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(pattern_strs.len());

        for pattern_str in pattern_strs {
            let regex = Regex::new(pattern_str).map_err(|e| PrunifyError::InvalidPattern {
                pattern: pattern_str.clone(),
                source: e,
            })?;
            patterns.push((regex, pattern_str.clone()));
        }

        Ok(Self { patterns })
    }

    /// Check whether a directory name matches any force-prune pattern.
    pub fn matches(&self, directory_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|(regex, _)| regex.is_match(directory_name))
    }

    /// Whether no patterns were configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(patterns: &[&str]) -> ForcePrunePatterns {
        let strings: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        ForcePrunePatterns::compile(&strings).unwrap()
    }

    #[test]
    fn empty_pattern_list_matches_nothing() {
        let patterns = compile(&[]);
        assert!(patterns.is_empty());
        assert!(!patterns.matches("anything"));
    }

    #[test]
    fn substring_patterns_match_anywhere_in_name() {
        // The original force-prune lists use bare substrings like "typescript".
        let patterns = compile(&["typescript", "babel"]);
        assert!(patterns.matches("typescript"));
        assert!(patterns.matches("babel-core"));
        assert!(patterns.matches("@babel"));
        assert!(!patterns.matches("react"));
    }

    #[test]
    fn anchored_patterns_are_respected() {
        let patterns = compile(&["^eslint"]);
        assert!(patterns.matches("eslint"));
        assert!(patterns.matches("eslint-plugin-import"));
        assert!(!patterns.matches("config-eslint"));
    }

    #[test]
    fn invalid_pattern_is_a_fatal_config_error() {
        let err = ForcePrunePatterns::compile(&["(unclosed".to_string()]).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn compilation_stops_at_the_first_bad_pattern() {
        let patterns = vec!["good".to_string(), "[".to_string(), "also-good".to_string()];
        assert!(ForcePrunePatterns::compile(&patterns).is_err());
    }

    #[test]
    fn debug_shows_original_strings() {
        let patterns = compile(&["^eslint", "@types"]);
        let debug = format!("{:?}", patterns);
        assert!(debug.contains("^eslint"));
        assert!(debug.contains("@types"));
    }
}
