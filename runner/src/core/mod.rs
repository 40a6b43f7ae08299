//! Deterministic, pure logic shared by the orchestrator.
//!
//! Core modules must be free of I/O side effects.

pub mod timestamp;
