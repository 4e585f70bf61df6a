use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to parse ignore patterns. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to initialize git repository. Original error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to walk directory. Original error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("Failed to read input. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Invalid version string. Original error: {0}")]
    SemverError(#[from] semver::Error),

    /// A required command is not on `PATH`. The remediation hint has already
    /// been printed by the tool checker.
    #[error("{name} is not installed ({url}).")]
    ToolMissing { name: String, url: String },

    #[error("Rust target '{target}' is not installed. Install it with `rustup target add {target}`.")]
    MissingTarget { target: String },

    #[error("This project has already been set up (package name is '{name}').")]
    AlreadySetUp { name: String },

    /// A subprocess finished with a non-zero exit status.
    #[error("{action} ({status}).")]
    ExternalToolFailure { action: String, status: ExitStatus },

    #[error("Failed to read the package manifest: {0}")]
    ManifestParse(String),

    #[error("No SDK found for platform '{platform}'.")]
    SdkNotFound { platform: String },

    /// A tool exited successfully but did not produce a file it is expected to produce.
    #[error("Expected output '{path}' was not produced.")]
    MissingOutput { path: String },

    #[error("'{path}' still references '{token}' after rewriting.")]
    UnrewrittenToken { path: String, token: String },

    #[error("No Package.swift found in '{start}' or any of its parents.")]
    RepositoryNotFound { start: String },

    #[error("Invalid configuration: {0}.")]
    ConfigValidation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

/// Convenience type alias for Results with this crate's error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// Tool-missing errors only exit: the checker already printed the
/// installation hint.
pub fn default_error_handler(err: Error) -> ! {
    if !matches!(err, Error::ToolMissing { .. }) {
        eprintln!("{err}");
    }
    std::process::exit(err.exit_code());
}
