//! Locating the interpreter that runs the downloader.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::io::config::InterpreterConfig;

/// Resolve the interpreter executable to an absolute path.
///
/// An explicit `path` wins; a relative one is taken against `cwd`, not the
/// repository root the child later runs in. It must be an executable file.
/// Otherwise `name` is looked up on the search path.
pub fn resolve_interpreter(config: &InterpreterConfig, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = &config.path {
        let absolute = cwd.join(path);
        let resolved = which::which_in(&absolute, None::<&str>, cwd).with_context(|| {
            format!(
                "interpreter {} not found or not executable",
                absolute.display()
            )
        })?;
        debug!(interpreter = %resolved.display(), "using configured interpreter");
        return Ok(resolved);
    }
    let resolved = which::which(&config.name)
        .with_context(|| format!("interpreter `{}` not found on PATH", config.name))?;
    debug!(interpreter = %resolved.display(), "resolved interpreter from PATH");
    Ok(resolved)
}
