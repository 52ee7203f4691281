//! Path repair implementation

use log::{debug, error, info};
use std::path::is_separator;

use super::policy::RepairPolicy;
use super::results::RepairOutcome;
use crate::error::RepairError;
use crate::inspect::{PathReport, inspect, join_path};
use crate::storage::ensure_directory;

/// Appended to a clipped filename stem.
pub const CLIP_MARKER: char = '~';

/// Inspects `raw_path` against the policy's length limit and repairs it.
pub fn check_path(raw_path: &str, policy: &RepairPolicy) -> Result<RepairOutcome, RepairError> {
    let report = inspect(raw_path, policy.max_length());
    repair(&report, policy)
}

/// Produces a usable path from an inspection report.
///
/// Illegal filename characters are substituted, then an overlong filename
/// stem is clipped, then the directory chain is created. Each step either
/// succeeds or yields a rejection outcome, depending on the policy. An
/// already valid report comes back unchanged, so the output of a repair is a
/// fixed point for the same policy.
///
/// Errors only when the report's filename contains a path separator, which
/// `inspect` never produces.
pub fn repair(report: &PathReport, policy: &RepairPolicy) -> Result<RepairOutcome, RepairError> {
    let filename = report.filename();
    if filename.chars().any(is_separator) {
        error!(
            "Refusing to repair {}: separator inside filename {:?}",
            report.raw_path, filename
        );
        return Err(RepairError::SeparatorInFilename(filename));
    }

    let mut stem = report.filename_stem.clone();
    let mut extension = report.extension.clone();

    if !report.illegal_characters.is_empty() {
        if !policy.replace_illegal_chars() {
            error!(
                "Rejected {}: illegal characters {:?} (policy: {:?})",
                report.raw_path, report.illegal_characters, policy
            );
            return Ok(RepairOutcome::RejectedIllegalChars);
        }
        let replacement = policy.replacement_char().to_string();
        for c in &report.illegal_characters {
            stem = stem.replace(*c, &replacement);
            extension = extension.replace(*c, &replacement);
        }

        let substituted = format!("{stem}{extension}");
        if substituted.chars().any(is_separator) {
            error!(
                "Refusing to repair {}: substitution produced separator in {:?}",
                report.raw_path, substituted
            );
            return Err(RepairError::SeparatorInFilename(substituted));
        }
    }

    let mut final_path = join_path(&report.directory, &format!("{stem}{extension}"));

    if final_path.chars().count() > policy.max_length() {
        if !policy.clip_overlength() {
            error!(
                "Rejected {}: {} characters exceeds {} (policy: {:?})",
                report.raw_path,
                final_path.chars().count(),
                policy.max_length(),
                policy
            );
            return Ok(RepairOutcome::RejectedTooLong);
        }

        let Some(budget) = stem_budget(&report.directory, &extension, policy.max_length()) else {
            error!(
                "Rejected {}: directory and extension {:?} leave no room for a filename (policy: {:?})",
                report.raw_path, extension, policy
            );
            return Ok(RepairOutcome::RejectedTooLong);
        };

        debug!("Clipping stem of {} to {} characters", report.raw_path, budget);
        stem = stem.chars().take(budget).collect();
        stem.push(CLIP_MARKER);
        final_path = join_path(&report.directory, &format!("{stem}{extension}"));
    }

    if policy.create_missing_directory() {
        if let Err(e) = ensure_directory(&report.directory) {
            error!(
                "Couldn't prepare {} because {} (policy: {:?})",
                report.raw_path, e, policy
            );
            return Ok(RepairOutcome::DirectoryCreationFailed(e));
        }
    }

    if final_path != report.raw_path {
        info!("Repaired {} -> {}", report.raw_path, final_path);
    } else {
        debug!("Accepted {} unchanged", final_path);
    }

    Ok(RepairOutcome::Repaired(final_path))
}

/// Characters left for the stem once the directory prefix, the extension
/// and the clip marker are accounted for.
fn stem_budget(directory: &str, extension: &str, max_length: usize) -> Option<usize> {
    let reserved = join_path(directory, "").chars().count() + extension.chars().count() + 1;
    max_length.checked_sub(reserved)
}
