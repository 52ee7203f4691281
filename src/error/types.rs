//! Error types
//!
//! Defines domain-specific error types for each module of the sanitizer.

use std::fmt;
use std::io;

/// Repair policy construction errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    ReplacementNotAccepted(char),
    ReplacementIsSeparator(char),
    ZeroMaxLength,
    InvalidReplacement(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::ReplacementNotAccepted(c) => {
                write!(f, "Replacement character {:?} is not an accepted filename character", c)
            }
            PolicyError::ReplacementIsSeparator(c) => {
                write!(f, "Replacement character {:?} is a path separator", c)
            }
            PolicyError::ZeroMaxLength => write!(f, "max_length must be greater than 0"),
            PolicyError::InvalidReplacement(s) => {
                write!(f, "Replacement must be exactly one character, got {:?}", s)
            }
        }
    }
}

impl std::error::Error for PolicyError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    CreateDirectory { path: String, source: io::Error },
    NotADirectory(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::CreateDirectory { path, source } => {
                write!(f, "Failed to create directory {}: {}", path, source)
            }
            StorageError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::CreateDirectory { source, .. } => Some(source),
            StorageError::NotADirectory(_) => None,
        }
    }
}

/// Repair input errors
///
/// These signal a report that could not have come from `inspect`, not a path
/// that merely failed the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairError {
    SeparatorInFilename(String),
}

impl fmt::Display for RepairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepairError::SeparatorInFilename(name) => {
                write!(f, "Path separator found inside filename: {}", name)
            }
        }
    }
}

impl std::error::Error for RepairError {}

/// General sanitizer error that encompasses all error types
#[derive(Debug)]
pub enum SanitizerError {
    Policy(PolicyError),
    Repair(RepairError),
    Storage(StorageError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for SanitizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanitizerError::Policy(e) => write!(f, "Policy error: {}", e),
            SanitizerError::Repair(e) => write!(f, "Repair error: {}", e),
            SanitizerError::Storage(e) => write!(f, "Storage error: {}", e),
            SanitizerError::Config(e) => write!(f, "Configuration error: {}", e),
            SanitizerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SanitizerError {}

// Implement conversions from specific errors to SanitizerError
impl From<PolicyError> for SanitizerError {
    fn from(error: PolicyError) -> Self {
        SanitizerError::Policy(error)
    }
}

impl From<RepairError> for SanitizerError {
    fn from(error: RepairError) -> Self {
        SanitizerError::Repair(error)
    }
}

impl From<StorageError> for SanitizerError {
    fn from(error: StorageError) -> Self {
        SanitizerError::Storage(error)
    }
}

impl From<config::ConfigError> for SanitizerError {
    fn from(error: config::ConfigError) -> Self {
        SanitizerError::Config(error)
    }
}

impl From<io::Error> for SanitizerError {
    fn from(error: io::Error) -> Self {
        SanitizerError::IoError(error)
    }
}
