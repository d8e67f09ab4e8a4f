// src/lib.rs
//! Library façade for the `oc-pslog` binary.
//!
//! The actual launch cycle lives in the `launcher` crate; this re-export
//! exists so tests and downstream code address one crate.

pub use launcher::{COMMAND, LOG_FILE, LaunchError, Outcome, Result, run};
