//! Exit code constants for the prunify CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unusable modules directory)
//! - 2: Configuration error (malformed force-prune pattern)

/// Successful execution. Individual deletion failures do not change this.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unreadable modules directory.
pub const USER_ERROR: i32 = 1;

/// Configuration error: a force-prune pattern failed to compile.
pub const CONFIG_ERROR: i32 = 2;
