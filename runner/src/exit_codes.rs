//! Stable exit codes for the orchestrator binary.

/// Every step completed. The downloader's own exit code does not affect this.
pub const OK: i32 = 0;
/// Root or interpreter missing, spawn failure, or a filesystem write failed.
pub const FAILED: i32 = 1;
