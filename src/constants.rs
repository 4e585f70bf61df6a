//! Constants used throughout the setup and build tooling

/// Name of the checked-in placeholder package.
pub const PLACEHOLDER_NAME: &str = "UniFFITemplate";

/// Snake-case identifier of the placeholder package.
pub const PLACEHOLDER_SNAKE_NAME: &str = "uniffi_template";

/// Host package manifest that marks the repository root.
pub const PACKAGE_MANIFEST: &str = "Package.swift";

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] =
    &["uniffi-template.json", "uniffi-template.yaml", "uniffi-template.yml"];

/// Cargo binary target that hosts the binding generator.
pub const DEFAULT_BINDGEN_BIN: &str = "uniffi-bindgen";

/// Targets merged into a universal static library.
pub const DEFAULT_UNIVERSAL_TARGETS: &[&str] = &["aarch64-apple-darwin", "x86_64-apple-darwin"];

/// Directory name used for the merged universal library, mirroring cargo's triple layout.
pub const UNIVERSAL_TARGET_DIR: &str = "universal-apple-darwin";

/// SDK platform queried for `SDKROOT` when cross-compiling.
pub const DEFAULT_SDK_PLATFORM: &str = "macosx";

/// Paths skipped when rewriting the cargo package.
pub const DEFAULT_REWRITE_IGNORE: &[&str] = &["**/target/**"];

/// Environment variables set for per-target compilation.
pub mod env {
    pub const SDKROOT: &str = "SDKROOT";
    pub const DEPLOYMENT_TARGET: &str = "MACOSX_DEPLOYMENT_TARGET";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
    pub const USAGE: i32 = 2;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
