//! Repair result types

use std::fmt;

use crate::error::StorageError;

/// Outcome of repairing one path.
///
/// Every variant is an ordinary return value; none of them aborts the caller.
#[derive(Debug)]
pub enum RepairOutcome {
    Repaired(String),
    RejectedIllegalChars,
    RejectedTooLong,
    DirectoryCreationFailed(StorageError),
}

impl RepairOutcome {
    /// The usable path, if the repair succeeded.
    pub fn final_path(&self) -> Option<&str> {
        match self {
            RepairOutcome::Repaired(path) => Some(path.as_str()),
            _ => None,
        }
    }

    pub fn is_repaired(&self) -> bool {
        matches!(self, RepairOutcome::Repaired(_))
    }
}

impl fmt::Display for RepairOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepairOutcome::Repaired(path) => write!(f, "{}", path),
            RepairOutcome::RejectedIllegalChars => write!(f, "rejected: illegal characters"),
            RepairOutcome::RejectedTooLong => write!(f, "rejected: path too long"),
            RepairOutcome::DirectoryCreationFailed(e) => write!(f, "failed: {}", e),
        }
    }
}
