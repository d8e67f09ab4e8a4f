// crates/launcher/src/os.rs
#![allow(unsafe_code)]

use nix::unistd::{ForkResult, fork};

/// Duplicate the current process, returning `Parent { child }` in the
/// original process and `Child` in the copy.
///
/// # Safety
/// Safe to wrap: the raw `fork(2)` returns straight to the caller without
/// touching shared state in the child. The child branch must restrict itself
/// to async-signal-safe work until it replaces its image or exits.
pub(crate) fn fork_child() -> nix::Result<ForkResult> {
    // SAFETY: nothing runs between fork() and the return; the caller owns
    // what happens in the child from here.
    unsafe { fork() }
}
