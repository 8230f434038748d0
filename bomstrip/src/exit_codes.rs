//! Stable exit codes for the `bomstrip` command.

/// Scan finished. Per-file failures do not change this.
pub const OK: i32 = 0;
/// Invalid root, invalid config or another fatal error.
pub const INVALID: i32 = 1;
/// `--check` found at least one file starting with a BOM.
pub const FOUND: i32 = 2;
