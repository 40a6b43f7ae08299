//! Repository layout: the root and the directories the orchestrator owns.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::timestamp::run_log_file_name;

pub const LOGS_DIR: &str = "logs";
pub const STAGING_DIR: &str = "staging";
pub const OUTPUT_DIR: &str = "output";
pub const LATEST_LOG: &str = "latest.log";

/// All canonical paths under a repository root.
#[derive(Debug, Clone)]
pub struct RepoLayout {
    pub root: PathBuf,
    pub logs_dir: PathBuf,
    pub staging_dir: PathBuf,
    pub output_dir: PathBuf,
    pub latest_log_path: PathBuf,
}

impl RepoLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let logs_dir = root.join(LOGS_DIR);
        Self {
            staging_dir: root.join(STAGING_DIR),
            output_dir: root.join(OUTPUT_DIR),
            latest_log_path: logs_dir.join(LATEST_LOG),
            logs_dir,
            root,
        }
    }

    /// Open the layout at `root`, which must already exist as a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let layout = Self::new(root);
        if !layout.root.exists() {
            return Err(anyhow!(
                "repository root {} does not exist",
                layout.root.display()
            ));
        }
        if !layout.root.is_dir() {
            return Err(anyhow!(
                "repository root {} is not a directory",
                layout.root.display()
            ));
        }
        Ok(layout)
    }

    /// `logs/run_<timestamp>.log`.
    pub fn run_log_path(&self, timestamp: &str) -> PathBuf {
        self.logs_dir.join(run_log_file_name(timestamp))
    }

    /// Resolve a root-relative path; absolute paths are returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Create `logs/`, `staging/` and `output/` if missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.logs_dir, &self.staging_dir, &self.output_dir] {
            fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
        }
        debug!(root = %self.root.display(), "output directories ready");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths_are_stable() {
        let layout = RepoLayout::new("/tmp/repo");
        assert_eq!(layout.logs_dir, PathBuf::from("/tmp/repo/logs"));
        assert_eq!(layout.staging_dir, PathBuf::from("/tmp/repo/staging"));
        assert_eq!(layout.output_dir, PathBuf::from("/tmp/repo/output"));
        assert_eq!(
            layout.latest_log_path,
            PathBuf::from("/tmp/repo/logs/latest.log")
        );
        assert_eq!(
            layout.run_log_path("250903_0630"),
            PathBuf::from("/tmp/repo/logs/run_250903_0630.log")
        );
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let layout = RepoLayout::new("/tmp/repo");
        assert_eq!(
            layout.resolve(Path::new("download.py")),
            PathBuf::from("/tmp/repo/download.py")
        );
        assert_eq!(
            layout.resolve(Path::new("/opt/dl/download.py")),
            PathBuf::from("/opt/dl/download.py")
        );
    }

    #[test]
    fn open_rejects_missing_root() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = RepoLayout::open(temp.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn open_rejects_file_root() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("file");
        fs::write(&file, "").expect("write");
        let err = RepoLayout::open(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn ensure_dirs_is_idempotent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let layout = RepoLayout::open(temp.path()).expect("open");
        fs::create_dir_all(&layout.output_dir).expect("pre-create output");
        fs::write(layout.output_dir.join("keep.txt"), "x").expect("write");

        layout.ensure_dirs().expect("first");
        layout.ensure_dirs().expect("second");

        assert!(layout.logs_dir.is_dir());
        assert!(layout.staging_dir.is_dir());
        assert!(layout.output_dir.join("keep.txt").is_file());
    }
}
