//! Stable exit codes for `valuekit` CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, arguments, or other errors.
pub const INVALID: i32 = 1;
/// `valuekit priority` stored at least one value different from the request.
pub const CLAMPED: i32 = 2;
