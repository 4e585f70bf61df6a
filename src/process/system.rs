use std::process::{Command, ExitStatus, Stdio};

use super::{Captured, CommandRunner, Invocation};
use crate::error::Result;
use crate::tools::{check_command, Tool};

/// Runs invocations as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(invocation.program());
        command.args(invocation.get_args());
        if let Some(dir) = invocation.get_current_dir() {
            command.current_dir(dir);
        }
        // Overrides apply to this child only; the parent environment is untouched.
        for (key, value) in invocation.get_envs() {
            command.env(key, value);
        }
        command
    }
}

impl CommandRunner for SystemRunner {
    fn is_available(&self, tool: &Tool) -> bool {
        check_command(tool.command, tool.label, tool.url)
    }

    fn run(&self, invocation: &Invocation) -> Result<ExitStatus> {
        Ok(Self::command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?)
    }

    fn capture(&self, invocation: &Invocation) -> Result<Captured> {
        let output = Self::command(invocation)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if matches!(stdout, std::borrow::Cow::Owned(_)) {
            log::warn!("{invocation} emitted non-UTF8 stdout; performing lossy conversion");
        }
        Ok(Captured { status: output.status, stdout: stdout.into_owned() })
    }
}
