//! Orchestration of a single downloader run.
//!
//! A run: checks the repository root, resolves the interpreter, ensures the
//! output directories, launches the downloader with its merged output tee'd to
//! the console and `logs/run_<yyMMdd_HHmm>.log`, then mirrors that log onto
//! `logs/latest.log`. The process working directory is never changed; every
//! path is derived from the root.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::core::timestamp::run_timestamp;
use crate::io::config::RunConfig;
use crate::io::interpreter::resolve_interpreter;
use crate::io::layout::RepoLayout;
use crate::io::process::run_command_tee;
use crate::io::run_log::{create_run_log, update_latest};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub timestamp: String,
    pub run_log: PathBuf,
    pub latest_log: PathBuf,
    /// Downloader exit code; `None` if it was killed by a signal.
    /// Recorded only, never turned into an error.
    pub exit_code: Option<i32>,
    pub bytes: u64,
}

/// Run the downloader once, stamped with the current local time.
pub fn run<C: Write>(config: &RunConfig, cwd: &Path, console: &mut C) -> Result<RunOutcome> {
    run_at(config, cwd, Local::now().naive_local(), console)
}

/// Run the downloader once, stamped with `now`.
///
/// Steps stop at the first failure and leave whatever was already written.
pub fn run_at<C: Write>(
    config: &RunConfig,
    cwd: &Path,
    now: NaiveDateTime,
    console: &mut C,
) -> Result<RunOutcome> {
    let layout = RepoLayout::open(config.root_or(cwd))?;
    info!(root = %layout.root.display(), "starting downloader run");

    // Resolve before touching the filesystem so a missing interpreter leaves no trace.
    let interpreter = resolve_interpreter(&config.interpreter, cwd)?;
    layout.ensure_dirs()?;

    let timestamp = run_timestamp(&now);
    let run_log = layout.run_log_path(&timestamp);
    let entry_point = layout.resolve(&config.entry_point);
    debug!(run_log = %run_log.display(), entry_point = %entry_point.display(), "run log ready");

    let mut log = create_run_log(&run_log)?;
    let mut cmd = Command::new(&interpreter);
    cmd.arg(&entry_point).current_dir(&layout.root);

    let output = run_command_tee(cmd, console, &mut log)
        .with_context(|| format!("run downloader {}", entry_point.display()))?;
    drop(log);

    if output.console_lost {
        warn!("console closed during the run; run log holds the full output");
    }
    let exit_code = output.status.code();
    if output.status.success() {
        info!(bytes = output.bytes, "downloader finished");
    } else {
        warn!(exit_code = ?exit_code, bytes = output.bytes, "downloader exited unsuccessfully");
    }

    update_latest(&run_log, &layout.latest_log_path)?;

    Ok(RunOutcome {
        timestamp,
        run_log,
        latest_log: layout.latest_log_path,
        exit_code,
        bytes: output.bytes,
    })
}
