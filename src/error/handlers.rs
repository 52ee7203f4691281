//! Error handlers
//!
//! Central logging of errors and mapping of outcomes to process exit codes.

use crate::error::types::SanitizerError;
use crate::repair::RepairOutcome;
use log::error;

/// Handle a sanitizer error
pub fn handle_error(err: &SanitizerError) {
    error!("Path sanitizer error: {}", err);
}

/// Convert an error to a process exit code
pub fn error_exit_code(err: &SanitizerError) -> i32 {
    match err {
        SanitizerError::Config(_) => 78,
        SanitizerError::Policy(_) => 78,
        SanitizerError::Repair(_) => 65,
        SanitizerError::Storage(_) => 73,
        SanitizerError::IoError(_) => 74,
    }
}

/// Convert a repair outcome to a process exit code
pub fn exit_code(outcome: &RepairOutcome) -> i32 {
    match outcome {
        RepairOutcome::Repaired(_) => 0,
        RepairOutcome::RejectedIllegalChars => 2,
        RepairOutcome::RejectedTooLong => 3,
        RepairOutcome::DirectoryCreationFailed(_) => 73,
    }
}
