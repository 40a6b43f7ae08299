//! Run logs under `logs/` and the `latest.log` mirror.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Create (or truncate) the run log at `path`.
pub fn create_run_log(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("create run log {}", path.display()))
}

/// Overwrite `latest` with the full contents of `run_log`.
pub fn update_latest(run_log: &Path, latest: &Path) -> Result<u64> {
    let copied = fs::copy(run_log, latest).with_context(|| {
        format!(
            "copy run log {} to {}",
            run_log.display(),
            latest.display()
        )
    })?;
    debug!(latest = %latest.display(), bytes = copied, "latest log updated");
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn create_truncates_existing_log() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("run_250903_0630.log");
        fs::write(&path, "previous run output\n").expect("seed");

        let mut file = create_run_log(&path).expect("create");
        file.write_all(b"new\n").expect("write");
        drop(file);

        assert_eq!(fs::read(&path).expect("read"), b"new\n");
    }

    #[test]
    fn latest_is_overwritten_not_appended() {
        let temp = tempfile::tempdir().expect("tempdir");
        let run_log = temp.path().join("run_250903_0630.log");
        let latest = temp.path().join("latest.log");
        fs::write(&latest, "a much longer stale latest log\n").expect("seed");
        fs::write(&run_log, "fresh\n").expect("write");

        let copied = update_latest(&run_log, &latest).expect("copy");

        assert_eq!(copied, 6);
        assert_eq!(fs::read(&latest).expect("read"), b"fresh\n");
    }

    #[test]
    fn missing_run_log_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = update_latest(
            &temp.path().join("run_missing.log"),
            &temp.path().join("latest.log"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("copy run log"));
    }
}
