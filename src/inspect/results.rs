//! Inspection result types
//!
//! Defines the report produced for every inspected path.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Classification of a single path string.
///
/// A report is a plain value: it is built fresh by [`inspect`](super::inspect)
/// and never refers back to the filesystem unless one of the query methods
/// is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    /// Input with separators normalized, nothing else changed
    pub raw_path: String,
    pub directory: String,
    pub filename_stem: String,
    /// Extension including its leading dot, or empty
    pub extension: String,
    /// Character count of `raw_path`
    pub full_length: usize,
    pub illegal_characters: BTreeSet<char>,
    /// Length limit the report was classified against
    pub max_length: usize,
}

/// Size and modification time of an existing filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl PathReport {
    /// Final path component, stem followed by extension.
    pub fn filename(&self) -> String {
        format!("{}{}", self.filename_stem, self.extension)
    }

    /// True when the filename holds no illegal characters and the path fits `max_length`.
    ///
    /// Recomputed from the current field values on every call.
    pub fn is_valid(&self) -> bool {
        self.illegal_characters.is_empty() && self.full_length <= self.max_length
    }

    /// Whether something currently occupies `raw_path` on disk.
    pub fn exists(&self) -> bool {
        !self.raw_path.is_empty() && Path::new(&self.raw_path).exists()
    }

    /// Path anchored at the current working directory when it is relative.
    pub fn absolute_path(&self) -> io::Result<PathBuf> {
        let path = Path::new(&self.raw_path);
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(std::env::current_dir()?.join(path))
        }
    }

    /// Size and modification time of the entry at `raw_path`, if any.
    pub fn file_info(&self) -> Option<FileInfo> {
        if self.raw_path.is_empty() {
            return None;
        }
        let metadata = std::fs::metadata(&self.raw_path).ok()?;
        Some(FileInfo {
            size: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }
}
