//! Multi-architecture support: installed target checks and the `lipo` merge.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::ioutils::{create_dir_all, ensure_exists};
use crate::layout::{Profile, ProjectLayout};
use crate::process::{capture_checked, run_checked, CommandRunner, Invocation};

/// Parses `rustup target list --installed`.
pub fn parse_installed_targets(listing: &str) -> HashSet<&str> {
    listing.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
}

/// Fails with [`Error::MissingTarget`] for the first target rustup does not have.
pub fn require_targets(runner: &dyn CommandRunner, targets: &[String]) -> Result<()> {
    let invocation = Invocation::new("rustup").args(["target", "list", "--installed"]);
    let listing = capture_checked(runner, &invocation, "Failed to list installed Rust targets")?;
    let installed = parse_installed_targets(&listing);

    match targets.iter().find(|target| !installed.contains(target.as_str())) {
        Some(target) => Err(Error::MissingTarget { target: target.clone() }),
        None => Ok(()),
    }
}

/// Merges per-target static libraries into one universal library.
///
/// A single library is returned unchanged.
pub fn merge(
    runner: &dyn CommandRunner,
    layout: &ProjectLayout,
    profile: Profile,
    libraries: &[PathBuf],
) -> Result<PathBuf> {
    if let [library] = libraries {
        return Ok(library.clone());
    }

    let output = layout.universal_lib_path(profile);
    if let Some(parent) = output.parent() {
        create_dir_all(parent)?;
    }

    println!("Creating universal library...");
    let invocation = Invocation::new("lipo")
        .arg("-create")
        .args(libraries)
        .arg("-output")
        .arg(&output)
        .current_dir(&layout.cargo_dir);
    run_checked(runner, &invocation, "Failed to create universal library")?;
    ensure_exists(&output)?;

    Ok(output)
}
