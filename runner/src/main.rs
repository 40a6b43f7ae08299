//! Run the DIBBS downloader once with a timestamped, tee'd log.
//!
//! Creates `logs/`, `staging/` and `output/` under the repository root, writes
//! the downloader's merged output to `logs/run_<yyMMdd_HHmm>.log` while echoing
//! it to stdout, then copies that log to `logs/latest.log`.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dibbs_runner::exit_codes;
use dibbs_runner::io::config::{Overrides, load_config};
use dibbs_runner::logging;
use dibbs_runner::run::run;

/// Config file picked up from the current directory when `--config` is not given.
const DEFAULT_CONFIG: &str = "dibbs-runner.toml";

#[derive(Parser)]
#[command(
    name = "dibbs-runner",
    version,
    about = "Run the DIBBS downloader with a timestamped, tee'd log"
)]
struct Cli {
    /// Orchestrator config (TOML). Defaults to `dibbs-runner.toml` if present.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Repository root. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Interpreter executable. Skips the PATH lookup.
    #[arg(long, value_name = "PATH")]
    interpreter: Option<PathBuf>,

    /// Downloader entry point, relative to the root.
    #[arg(long, value_name = "FILE")]
    entry_point: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run_cli(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILED);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("read current directory")?;
    let config_path = match cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} not found", path.display());
            }
            path
        }
        None => cwd.join(DEFAULT_CONFIG),
    };
    let config = load_config(&config_path)?.apply_overrides(&Overrides {
        root: cli.root,
        interpreter: cli.interpreter,
        entry_point: cli.entry_point,
    })?;

    let mut stdout = std::io::stdout().lock();
    run(&config, &cwd, &mut stdout)?;
    Ok(())
}
