// crates/launcher/src/lib.rs
//! One-shot process launcher: fork a child, point its standard output at
//! [`LOG_FILE`], replace its image with [`COMMAND`], and report how the
//! child ended.
//!
//! The whole cycle is a single fork/wait pair. The child establishes the
//! redirection before the image replacement, so every stdout write of the
//! replacement program lands in the log file; the parent blocks in
//! `waitpid` until that child is gone and classifies the result. Failures
//! are terminal for the branch they occur in; nothing is retried.

use std::ffi::CStr;
use std::fmt;
use std::path::Path;
use std::process;

use nix::sys::wait::{WaitStatus, waitpid};
use nix::unistd::ForkResult;
use tracing::{debug, error};

mod error;
mod os;
mod redirect;

pub use error::{LaunchError, Result};

/// Log file receiving the child's standard output, relative to the working
/// directory. Created with mode 0o666 (before umask) and never truncated.
pub const LOG_FILE: &str = "out.log";

/// Fixed argv of the replacement image: a process listing for all users.
pub const COMMAND: [&CStr; 2] = [c"ps", c"aux"];

/// How the child ended, as far as the report cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Normal termination with the given exit code.
    Exited(i32),
    /// Termination by signal or other abnormal means.
    Abnormal,
}

impl From<WaitStatus> for Outcome {
    fn from(status: WaitStatus) -> Self {
        match status {
            WaitStatus::Exited(_, code) => Outcome::Exited(code),
            _ => Outcome::Abnormal,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Exited(code) => write!(f, "Child exited with status {code}"),
            Outcome::Abnormal => f.write_str("Child did not exit cleanly"),
        }
    }
}

/// Run one launch cycle: fork, redirect the child's stdout, replace the
/// child's image, wait for it.
///
/// Returns the parent-side classification of the child's termination. The
/// child branch never returns from this call: it either becomes [`COMMAND`]
/// or reports its failure on stderr and exits with status 1.
pub fn run() -> Result<Outcome> {
    match os::fork_child().map_err(LaunchError::ProcessCreation)? {
        ForkResult::Child => {
            let err = match redirect::redirect_stdout(Path::new(LOG_FILE))
                .and_then(|()| redirect::exec_command(&COMMAND))
            {
                Ok(never) => match never {},
                Err(err) => err,
            };
            error!("{err}");
            process::exit(1);
        }
        ForkResult::Parent { child } => {
            debug!("forked child {child}");
            let status = waitpid(child, None).map_err(LaunchError::Wait)?;
            Ok(Outcome::from(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::sys::signal::Signal;
    use nix::unistd::{Pid, fork};

    #[test]
    fn classifies_normal_exit() {
        let status = WaitStatus::Exited(Pid::from_raw(1), 3);
        assert_eq!(Outcome::from(status), Outcome::Exited(3));
    }

    #[test]
    fn classifies_signal_as_abnormal() {
        let status = WaitStatus::Signaled(Pid::from_raw(1), Signal::SIGKILL, false);
        assert_eq!(Outcome::from(status), Outcome::Abnormal);
    }

    #[test]
    fn report_lines() {
        assert_eq!(Outcome::Exited(0).to_string(), "Child exited with status 0");
        assert_eq!(Outcome::Exited(1).to_string(), "Child exited with status 1");
        assert_eq!(Outcome::Abnormal.to_string(), "Child did not exit cleanly");
    }

    #[test]
    fn wait_sees_the_child_exit_code() {
        // SAFETY: the child exits immediately without touching shared state.
        match unsafe { fork() }.expect("fork failed") {
            ForkResult::Child => std::process::exit(7),
            ForkResult::Parent { child } => {
                let status = waitpid(child, None).expect("waitpid failed");
                assert_eq!(Outcome::from(status), Outcome::Exited(7));
            }
        }
    }
}
