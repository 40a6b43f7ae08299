//! Orchestrator configuration, optionally loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Orchestrator configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults that
/// reproduce the bare wrapper behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    /// Repository root. `None` means the invoking shell's current directory.
    pub root: Option<PathBuf>,

    /// Downloader entry point, relative to the root.
    pub entry_point: PathBuf,

    pub interpreter: InterpreterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Executable name looked up on the search path.
    pub name: String,

    /// Explicit interpreter path. Bypasses the search path when set.
    pub path: Option<PathBuf>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            name: "python".to_string(),
            path: None,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: None,
            entry_point: PathBuf::from("download.py"),
            interpreter: InterpreterConfig::default(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub interpreter: Option<PathBuf>,
    pub entry_point: Option<PathBuf>,
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.entry_point.as_os_str().is_empty() {
            return Err(anyhow!("entry_point must be non-empty"));
        }
        if self.interpreter.path.is_none() && self.interpreter.name.trim().is_empty() {
            return Err(anyhow!(
                "interpreter.name must be non-empty when interpreter.path is unset"
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides, then re-validate.
    pub fn apply_overrides(mut self, overrides: &Overrides) -> Result<Self> {
        if let Some(root) = &overrides.root {
            self.root = Some(root.clone());
        }
        if let Some(path) = &overrides.interpreter {
            self.interpreter.path = Some(path.clone());
        }
        if let Some(entry_point) = &overrides.entry_point {
            self.entry_point = entry_point.clone();
        }
        self.validate()?;
        Ok(self)
    }

    /// The configured root, or `cwd` when none is configured.
    pub fn root_or(&self, cwd: &Path) -> PathBuf {
        match &self.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RunConfig::default()`.
pub fn load_config(path: &Path) -> Result<RunConfig> {
    if !path.exists() {
        let cfg = RunConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RunConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
