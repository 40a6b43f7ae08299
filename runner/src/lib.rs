//! Orchestrator for the DIBBS downloader.
//!
//! One invocation launches the external downloader, tees its merged
//! stdout/stderr to the console and a timestamped run log under `logs/`, and
//! mirrors that log onto `logs/latest.log`.
//!
//! - **[`core`]**: Pure logic (run-log naming). No I/O.
//! - **[`io`]**: Side-effecting operations (config, filesystem layout,
//!   interpreter lookup, process execution).
//!
//! [`run`] coordinates the two to implement the binary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
