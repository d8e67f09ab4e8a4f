// crates/launcher/src/error.rs
use std::io;
use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

/// Error type for launcher operations.
///
/// One variant per fatal condition in the launch cycle. Each message names
/// the operation that failed and carries the OS-reported cause, so a bare
/// `Display` of the error reads like `perror(3)` output.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The process could not be duplicated.
    #[error("fork: {0}")]
    ProcessCreation(#[source] Errno),
    /// The log file could not be opened or created.
    #[error("open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The log descriptor could not be installed as standard output.
    #[error("dup2: {0}")]
    Redirection(#[source] Errno),
    /// The image replacement did not occur at all.
    #[error("execvp {command}: {source}")]
    Exec {
        command: String,
        #[source]
        source: Errno,
    },
    /// The wait for the child could not complete.
    #[error("waitpid: {0}")]
    Wait(#[source] Errno),
}

/// Result type for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_operation() {
        let cases: [(LaunchError, &str); 3] = [
            (LaunchError::ProcessCreation(Errno::EAGAIN), "fork"),
            (LaunchError::Redirection(Errno::EBADF), "dup2"),
            (LaunchError::Wait(Errno::ECHILD), "waitpid"),
        ];
        for (err, op) in cases {
            assert!(err.to_string().starts_with(op), "{err}");
        }
    }

    #[test]
    fn exec_message_includes_command_and_cause() {
        let err = LaunchError::Exec {
            command: "ps".into(),
            source: Errno::ENOENT,
        };
        let msg = err.to_string();
        assert!(msg.contains("execvp ps"), "{msg}");
        assert!(msg.contains("ENOENT"), "{msg}");
    }

    #[test]
    fn file_open_message_includes_path() {
        let err = LaunchError::FileOpen {
            path: PathBuf::from("out.log"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("out.log"));
    }
}
