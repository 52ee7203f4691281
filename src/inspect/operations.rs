//! Path inspection implementation

use std::path::{MAIN_SEPARATOR, Path, is_separator};

use super::charset::illegal_characters;
use super::results::PathReport;

/// Conventional ceiling for the length of a full path.
pub const DEFAULT_MAX_LENGTH: usize = 260;

/// Decomposes and classifies `raw_path` against the accepted character set and `max_length`.
///
/// Never fails and never touches the filesystem. Degenerate input such as an
/// empty string yields a report with empty components.
pub fn inspect(raw_path: &str, max_length: usize) -> PathReport {
    let normalized = normalize_separators(raw_path);
    let (directory, filename) = split_directory(&normalized);
    let (filename_stem, extension) = split_extension(filename);

    PathReport {
        full_length: normalized.chars().count(),
        illegal_characters: illegal_characters(filename),
        directory: directory.to_string(),
        filename_stem: filename_stem.to_string(),
        extension: extension.to_string(),
        raw_path: normalized,
        max_length,
    }
}

/// Rewrites every separator to the platform one and collapses repeats.
///
/// A trailing separator is dropped unless the path is a root. `.` and `..`
/// components are kept as they are.
pub fn normalize_separators(raw_path: &str) -> String {
    let mut normalized = String::with_capacity(raw_path.len());
    for c in raw_path.chars() {
        if is_separator(c) {
            if !normalized.ends_with(MAIN_SEPARATOR) {
                normalized.push(MAIN_SEPARATOR);
            }
        } else {
            normalized.push(c);
        }
    }

    while normalized.len() > 1
        && normalized.ends_with(MAIN_SEPARATOR)
        && Path::new(&normalized).parent().is_some()
    {
        normalized.pop();
    }

    normalized
}

/// Joins a directory and a filename the way `inspect` splits them.
pub fn join_path(directory: &str, filename: &str) -> String {
    if directory.is_empty() {
        filename.to_string()
    } else if directory.ends_with(MAIN_SEPARATOR) {
        format!("{directory}{filename}")
    } else {
        format!("{directory}{MAIN_SEPARATOR}{filename}")
    }
}

/// Splits a normalized path at its last separator.
///
/// A root directory keeps its trailing separator so that joining the parts
/// back gives the same string.
fn split_directory(normalized: &str) -> (&str, &str) {
    match normalized.rfind(MAIN_SEPARATOR) {
        Some(idx) => {
            let filename = &normalized[idx + MAIN_SEPARATOR.len_utf8()..];
            let with_separator = &normalized[..idx + MAIN_SEPARATOR.len_utf8()];
            if idx == 0 || Path::new(with_separator).parent().is_none() {
                (with_separator, filename)
            } else {
                (&normalized[..idx], filename)
            }
        }
        None => ("", normalized),
    }
}

/// Splits a filename at its last dot. Leading dots never start an extension.
fn split_extension(filename: &str) -> (&str, &str) {
    let leading_dots = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading_dots..].rfind('.') {
        Some(idx) => filename.split_at(leading_dots + idx),
        None => (filename, ""),
    }
}
