//! Running a child process with stdout and stderr merged and tee'd.

use std::io::{ErrorKind, Read, Write};
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, error, instrument, warn};

/// Outcome of a tee'd child process.
#[derive(Debug)]
pub struct TeeOutput {
    pub status: ExitStatus,
    /// Bytes copied from the merged stream to the log.
    pub bytes: u64,
    /// The console stopped accepting writes part-way; the log kept everything.
    pub console_lost: bool,
}

/// Run `cmd` to completion, copying its merged stdout/stderr to `log` and `console`.
///
/// Both streams share one pipe, so the merged output keeps the order the child
/// wrote it in. Every chunk is written and flushed to the log, then to the
/// console, before the next read. A console that fails (e.g. a closed stdout
/// pipe) is dropped and the pipe keeps draining into the log. Blocks until the
/// pipe closes and the child exits; there is no timeout. The child's exit
/// status is returned, not interpreted.
#[instrument(skip_all)]
pub fn run_command_tee<C, L>(mut cmd: Command, console: &mut C, log: &mut L) -> Result<TeeOutput>
where
    C: Write,
    L: Write,
{
    let (mut reader, writer) = std::io::pipe().context("create output pipe")?;
    let writer_err = writer.try_clone().context("clone output pipe")?;
    cmd.stdin(Stdio::null())
        .stdout(Stdio::from(writer))
        .stderr(Stdio::from(writer_err));

    debug!("spawning child process");
    let spawned = cmd.spawn();
    // The command still owns the parent's copies of the write end; the reader
    // only sees EOF once they are closed.
    drop(cmd);
    let mut child = match spawned {
        Ok(c) => c,
        Err(e) => {
            error!(err = %e, "failed to spawn command");
            return Err(e).context("spawn command");
        }
    };

    let copied = match tee(&mut reader, console, log) {
        Ok(copied) => copied,
        Err(e) => {
            error!(err = %e, "output copy failed, killing child");
            drop(reader);
            if let Err(kill_err) = child.kill() {
                warn!(err = %kill_err, "failed to kill child");
            }
            child.wait().context("wait command after kill")?;
            return Err(e);
        }
    };
    let status = child.wait().context("wait for command")?;

    debug!(exit_code = ?status.code(), bytes = copied.bytes, "command finished");
    Ok(TeeOutput {
        status,
        bytes: copied.bytes,
        console_lost: copied.console_lost,
    })
}

struct Copied {
    bytes: u64,
    console_lost: bool,
}

fn tee<R, C, L>(reader: &mut R, console: &mut C, log: &mut L) -> Result<Copied>
where
    R: Read,
    C: Write,
    L: Write,
{
    let mut chunk = [0u8; 8192];
    let mut copied = Copied {
        bytes: 0,
        console_lost: false,
    };

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("read output"),
        };
        let data = &chunk[..n];

        log.write_all(data).context("write run log")?;
        log.flush().context("flush run log")?;
        copied.bytes += n as u64;

        if !copied.console_lost
            && let Err(e) = console.write_all(data).and_then(|()| console.flush())
        {
            warn!(err = %e, "console write failed, continuing with run log only");
            copied.console_lost = true;
        }
    }

    Ok(copied)
}
