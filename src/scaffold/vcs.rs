use git2::Repository;
use std::path::Path;

use crate::error::Result;
use crate::ioutils::remove_dir_all_if_exists;

/// Drops the existing history and initialises an empty repository at `repo_root`.
pub fn reinitialize(repo_root: &Path) -> Result<Repository> {
    if remove_dir_all_if_exists(repo_root.join(".git"))? {
        log::info!("Removed existing git history in {}", repo_root.display());
    }
    let repository = Repository::init(repo_root)?;
    log::info!("Initialized git repository in {}", repo_root.display());
    Ok(repository)
}
