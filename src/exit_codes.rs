//! Exit code constants for the config loader.
//!
//! - 0: Success, or a missing/malformed config tolerated by policy
//! - 1: Failure: missing/malformed config with fail-on-missing set, or any
//!   unexpected error

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// The step failed and the CI job should stop.
pub const FAILURE: i32 = 1;
