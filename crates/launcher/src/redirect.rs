// crates/launcher/src/redirect.rs
#![allow(unsafe_code)]

use std::convert::Infallible;
use std::ffi::CStr;
use std::fs::{File, OpenOptions};
use std::os::fd::AsRawFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use nix::errno::Errno;
use nix::unistd::execvp;
use tracing::debug;

use crate::error::{LaunchError, Result};

/// Mode bits requested for the log file, narrowed by the umask in effect.
const LOG_MODE: u32 = 0o666;

/// Open `path` for writing, creating it if absent and leaving existing
/// content in place. Writes land from offset zero.
fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .mode(LOG_MODE)
        .open(path)
        .map_err(|source| LaunchError::FileOpen {
            path: path.to_path_buf(),
            source,
        })
}

/// Open `path` and install it as standard output.
///
/// The duplicated descriptor slot survives a later `execvp`, so everything
/// the replacement image writes to stdout ends up in the file.
pub(crate) fn redirect_stdout(path: &Path) -> Result<()> {
    let log = open_log(path)?;
    // SAFETY: `log` holds an open descriptor and `STDOUT_FILENO` is a valid
    // duplication target.
    if unsafe { libc::dup2(log.as_raw_fd(), libc::STDOUT_FILENO) } == -1 {
        return Err(LaunchError::Redirection(Errno::last()));
    }
    debug!("stdout redirected to {}", path.display());
    // dropping `log` closes the original descriptor; the stdout slot keeps
    // the file open
    Ok(())
}

/// Replace the current image with `argv`, resolved through `PATH`.
///
/// Returns only if the replacement could not occur.
pub(crate) fn exec_command(argv: &[&CStr]) -> Result<Infallible> {
    match execvp(argv[0], argv) {
        Ok(never) => match never {},
        Err(source) => Err(LaunchError::Exec {
            command: argv[0].to_string_lossy().into_owned(),
            source,
        }),
    }
}
