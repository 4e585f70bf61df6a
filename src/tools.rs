//! Detection of the external command-line tools both pipelines depend on.

use std::io::Write;

use crate::error::{Error, Result};

/// An external executable together with the hint shown when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    /// Name resolved on `PATH`.
    pub command: &'static str,
    /// Human readable name used in messages.
    pub label: &'static str,
    /// Where to find installation instructions.
    pub url: &'static str,
}

impl Tool {
    pub const SWIFT: Tool = Tool {
        command: "swift",
        label: "Swift",
        url: "https://swift.org/getting-started/#installing-swift",
    };
    pub const CARGO: Tool = Tool {
        command: "cargo",
        label: "Cargo",
        url: "https://doc.rust-lang.org/cargo/getting-started/installation.html",
    };
    pub const RUSTUP: Tool = Tool {
        command: "rustup",
        label: "rustup",
        url: "https://rustup.rs",
    };
    pub const XCRUN: Tool = Tool {
        command: "xcrun",
        label: "Xcode",
        url: "https://developer.apple.com/xcode/",
    };
    pub const LIPO: Tool = Tool {
        command: "lipo",
        label: "lipo",
        url: "https://developer.apple.com/xcode/",
    };
}

/// Reports whether `command` resolves on `PATH`, printing a two-line
/// installation hint to stdout when it does not.
pub fn check_command(command: &str, label: &str, installation_url: &str) -> bool {
    let stdout = std::io::stdout();
    check_command_to(&mut stdout.lock(), command, label, installation_url)
}

/// Same as [`check_command`], writing the hint to `out`.
pub fn check_command_to<W: Write>(
    out: &mut W,
    command: &str,
    label: &str,
    installation_url: &str,
) -> bool {
    if let Ok(path) = which::which(command) {
        log::debug!("Found {label} at {}", path.display());
        return true;
    }

    let hint = format!(
        "{label} is not installed. Please install {label} before continuing.\n\
         Instructions for installing {label} can be found here: {installation_url}\n"
    );
    if let Err(e) = out.write_all(hint.as_bytes()) {
        log::warn!("Failed to print installation hint for {label}: {e}");
    }
    false
}

/// Checks every tool in order and fails on the first one that is missing.
///
/// `locate` decides whether a command is available; see
/// [`crate::process::CommandRunner::is_available`].
pub fn require_all<F>(tools: &[Tool], mut locate: F) -> Result<()>
where
    F: FnMut(&Tool) -> bool,
{
    for tool in tools {
        if !locate(tool) {
            return Err(Error::ToolMissing {
                name: tool.label.to_string(),
                url: tool.url.to_string(),
            });
        }
    }
    Ok(())
}
