//! File system operations
//!
//! The only code in the crate that mutates the filesystem.

use log::{error, info};
use std::fs;
use std::path::Path;

use crate::error::StorageError;

/// Creates every missing directory leading to and including `path`.
///
/// An empty path names the current directory and is a no-op. A directory that
/// already exists, including one created by a concurrent caller, counts as
/// success. Failures are not retried.
pub fn ensure_directory(path: &str) -> Result<(), StorageError> {
    if path.is_empty() || directory_exists(Path::new(path)) {
        return Ok(());
    }

    if path_exists(Path::new(path)) {
        error!("Cannot create directory {}: a file is in the way", path);
        return Err(StorageError::NotADirectory(path.to_string()));
    }

    match fs::create_dir_all(path) {
        Ok(()) => {
            info!("Created directory {}", path);
            Ok(())
        }
        Err(_) if directory_exists(Path::new(path)) => Ok(()),
        Err(e) => {
            error!("Couldn't create directory {}: {}", path, e);
            Err(StorageError::CreateDirectory {
                path: path.to_string(),
                source: e,
            })
        }
    }
}

/// Check if something exists at `path`
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}
