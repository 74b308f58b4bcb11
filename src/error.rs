//! Error types for the prunify CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! Only fatal conditions are errors: a modules directory that cannot be used at
//! all, or a force-prune pattern that fails to compile. Everything else the
//! tool encounters while resolving or walking (an absent package, a directory
//! without metadata, a single deletion that fails) is an expected outcome and
//! is handled in place, never through this type.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for prunify operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum PrunifyError {
    /// User provided invalid arguments or the modules directory is unusable.
    #[error("{0}")]
    UserError(String),

    /// A force-prune pattern failed to compile. Fatal: surfaced before any
    /// pruning is attempted.
    #[error("invalid force-prune pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl PrunifyError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrunifyError::UserError(_) => exit_codes::USER_ERROR,
            PrunifyError::InvalidPattern { .. } => exit_codes::CONFIG_ERROR,
        }
    }
}

/// Result type alias for prunify operations.
pub type Result<T> = std::result::Result<T, PrunifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PrunifyError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn invalid_pattern_has_correct_exit_code() {
        let source = regex::Regex::new("[").unwrap_err();
        let err = PrunifyError::InvalidPattern {
            pattern: "[".to_string(),
            source,
        };
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn invalid_pattern_names_the_pattern() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = PrunifyError::InvalidPattern {
            pattern: "(unclosed".to_string(),
            source,
        };
        assert!(err.to_string().contains("(unclosed"));
    }
}
