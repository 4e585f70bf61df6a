use std::path::Path;

use crate::error::{Error, Result};

/// Fails with [`Error::MissingOutput`] unless `path` exists.
pub fn ensure_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        Ok(())
    } else {
        log::error!("Expected {} to exist", path.display());
        Err(Error::MissingOutput { path: path.display().to_string() })
    }
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Renames `from` to `to`, creating the destination's parent directory.
pub fn rename<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<()> {
    let (from, to) = (from.as_ref(), to.as_ref());
    if let Some(parent) = to.parent() {
        create_dir_all(parent)?;
    }
    log::debug!("Renaming {} to {}", from.display(), to.display());
    std::fs::rename(from, to).map_err(Error::IoError)
}

/// Writes `content`, creating parent directories if needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    log::debug!("Writing {}", dest_path.display());
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Creates a new file, failing if it already exists.
pub fn write_new_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    use std::io::Write;

    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    log::debug!("Creating {}", dest_path.display());
    let mut file = std::fs::OpenOptions::new().write(true).create_new(true).open(dest_path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Removes a directory tree, doing nothing when it does not exist.
pub fn remove_dir_all_if_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }
    log::debug!("Removing {}", path.display());
    std::fs::remove_dir_all(path)?;
    Ok(true)
}
