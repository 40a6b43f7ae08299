//! I/O helpers for the orchestrator.

pub mod config;
pub mod interpreter;
pub mod layout;
pub mod process;
pub mod run_log;
