//! Reading the host package manifest through `swift package dump-package`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{PACKAGE_MANIFEST, PLACEHOLDER_NAME};
use crate::error::{Error, Result};
use crate::process::{capture_checked, CommandRunner, Invocation};

/// The subset of the dumped manifest this tooling relies on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    pub name: String,
}

impl PackageManifest {
    /// Parses the JSON printed by `swift package dump-package`.
    pub fn parse(dump: &str) -> Result<Self> {
        serde_json::from_str(dump).map_err(|e| Error::ManifestParse(e.to_string()))
    }

    /// Dumps and parses the manifest of the package rooted at `repo_root`.
    pub fn dump(runner: &dyn CommandRunner, repo_root: &Path) -> Result<Self> {
        let invocation =
            Invocation::new("swift").args(["package", "dump-package"]).current_dir(repo_root);
        let dump = capture_checked(runner, &invocation, "Failed to read the package manifest")?;
        Self::parse(&dump)
    }

    /// Whether the package still carries the placeholder identity.
    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_NAME
    }
}

/// Finds the nearest ancestor of `start` (inclusive) containing `Package.swift`.
pub fn find_repo_root<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    let start = start.as_ref();
    start
        .ancestors()
        .find(|dir| dir.join(PACKAGE_MANIFEST).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::RepositoryNotFound { start: start.display().to_string() })
}
