use std::path::Path;

use crate::ioutils::{ensure_exists, remove_dir_all_if_exists};
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::process::{run_checked, CommandRunner, Invocation};

/// Replaces the package's xcframework with one wrapping `library`.
pub fn create_xcframework(
    runner: &dyn CommandRunner,
    layout: &ProjectLayout,
    library: &Path,
) -> Result<()> {
    if remove_dir_all_if_exists(&layout.xcframework_path)? {
        log::info!("Removed previous {}", layout.xcframework_path.display());
    }

    let invocation = Invocation::new("xcrun")
        .args(["xcodebuild", "-create-xcframework", "-library"])
        .arg(library)
        .arg("-output")
        .arg(&layout.xcframework_path)
        .current_dir(&layout.repo_root);
    run_checked(runner, &invocation, "Failed to create xcframework")?;

    ensure_exists(&layout.xcframework_path)
}
