//! External process execution.
//!
//! Every tool call is described by an [`Invocation`] that carries its own
//! working directory and environment overrides, and is executed through a
//! [`CommandRunner`]. The process-wide current directory is never changed.

pub mod invocation;
pub mod system;

pub use invocation::Invocation;
pub use system::SystemRunner;

use std::process::ExitStatus;

use crate::error::{Error, Result};
use crate::tools::Tool;

/// Captured result of a query-style invocation.
#[derive(Debug, Clone)]
pub struct Captured {
    pub status: ExitStatus,
    pub stdout: String,
}

/// Abstraction over spawning external tools.
pub trait CommandRunner {
    /// Returns whether `tool` can be executed, reporting the installation hint when not.
    fn is_available(&self, tool: &Tool) -> bool;

    /// Runs an invocation with inherited standard streams and waits for it.
    fn run(&self, invocation: &Invocation) -> Result<ExitStatus>;

    /// Runs an invocation, capturing stdout. Stderr stays inherited.
    fn capture(&self, invocation: &Invocation) -> Result<Captured>;
}

/// Runs `invocation` and turns a non-zero exit into [`Error::ExternalToolFailure`].
pub fn run_checked(
    runner: &dyn CommandRunner,
    invocation: &Invocation,
    action: &str,
) -> Result<()> {
    log::debug!("Running {invocation}");
    let status = runner.run(invocation)?;
    if status.success() {
        Ok(())
    } else {
        log::error!("{invocation} exited with {status}");
        Err(Error::ExternalToolFailure { action: action.to_string(), status })
    }
}

/// Captures the stdout of `invocation`, failing on a non-zero exit.
pub fn capture_checked(
    runner: &dyn CommandRunner,
    invocation: &Invocation,
    action: &str,
) -> Result<String> {
    log::debug!("Capturing {invocation}");
    let captured = runner.capture(invocation)?;
    if captured.status.success() {
        Ok(captured.stdout)
    } else {
        log::error!("{invocation} exited with {}", captured.status);
        Err(Error::ExternalToolFailure { action: action.to_string(), status: captured.status })
    }
}
