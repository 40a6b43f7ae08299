//! Test-only helpers: a throwaway repository root with a stub downloader.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use crate::io::config::{InterpreterConfig, RunConfig};
use crate::io::layout::LOGS_DIR;

/// Stub downloader file name, relative to the root.
pub const STUB_ENTRY_POINT: &str = "download.py";

/// A temporary repository root whose downloader is a `sh` script.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a root whose `download.py` contains `script` (run by `sh`).
    pub fn with_downloader(script: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp repo")?;
        let repo = Self { dir };
        repo.write_downloader(script)?;
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn entry_point(&self) -> PathBuf {
        self.path().join(STUB_ENTRY_POINT)
    }

    /// Replace the stub downloader's script.
    pub fn write_downloader(&self, script: &str) -> Result<()> {
        let path = self.entry_point();
        fs::write(&path, script).with_context(|| format!("write {}", path.display()))
    }

    /// Config pointing at this root, resolving `sh` from the search path.
    pub fn config(&self) -> RunConfig {
        RunConfig {
            root: Some(self.path().to_path_buf()),
            entry_point: PathBuf::from(STUB_ENTRY_POINT),
            interpreter: InterpreterConfig {
                name: "sh".to_string(),
                path: None,
            },
        }
    }

    /// Sorted `run_*.log` file names under `logs/`.
    pub fn run_logs(&self) -> Result<Vec<String>> {
        let logs_dir = self.path().join(LOGS_DIR);
        if !logs_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in
            fs::read_dir(&logs_dir).with_context(|| format!("read {}", logs_dir.display()))?
        {
            let entry = entry.context("read entry")?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with("run_") && name.ends_with(".log") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Naive local time at minute precision. Panics on an invalid date.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid datetime")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "valid datetime")]
    fn at_rejects_invalid_dates() {
        at(2025, 2, 30, 6, 30);
    }
}
