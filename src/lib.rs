/// Native build pipeline: bindings, compilation and xcframework packaging.
pub mod build;

/// Handles argument parsing and the binaries' entry points.
pub mod cli;

/// Optional repository-level configuration.
pub mod config;

pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Paths derived from the repository root and the project name.
pub mod layout;

/// Package manifest discovery.
pub mod manifest;

pub mod naming;

/// External process execution behind a mockable seam.
pub mod process;

/// User input and interaction handling.
pub mod prompt;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Turns the placeholder package into a named project.
pub mod scaffold;

pub mod sdk;

/// Embedded templates and placeholder token substitution.
pub mod template;

/// Detection of required command-line tools.
pub mod tools;
