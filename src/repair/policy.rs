//! Repair policy
//!
//! Owned configuration value passed to every repair call.

use std::path::is_separator;

use crate::error::PolicyError;
use crate::inspect::{DEFAULT_MAX_LENGTH, is_accepted};

pub const DEFAULT_REPLACEMENT_CHAR: char = '~';

/// How `repair` treats illegal characters, overlong paths and missing directories.
///
/// Outside the `repair` module a policy can only be obtained through
/// [`RepairPolicyBuilder::build`], which checks the preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairPolicy {
    pub(super) replace_illegal_chars: bool,
    pub(super) replacement_char: char,
    pub(super) clip_overlength: bool,
    pub(super) max_length: usize,
    pub(super) create_missing_directory: bool,
}

impl Default for RepairPolicy {
    fn default() -> Self {
        Self {
            replace_illegal_chars: true,
            replacement_char: DEFAULT_REPLACEMENT_CHAR,
            clip_overlength: true,
            max_length: DEFAULT_MAX_LENGTH,
            create_missing_directory: true,
        }
    }
}

impl RepairPolicy {
    /// Starts from the default policy.
    pub fn builder() -> RepairPolicyBuilder {
        RepairPolicyBuilder {
            policy: Self::default(),
        }
    }

    pub fn replace_illegal_chars(&self) -> bool {
        self.replace_illegal_chars
    }

    pub fn replacement_char(&self) -> char {
        self.replacement_char
    }

    pub fn clip_overlength(&self) -> bool {
        self.clip_overlength
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn create_missing_directory(&self) -> bool {
        self.create_missing_directory
    }
}

/// Builder for [`RepairPolicy`]
#[derive(Debug, Clone)]
pub struct RepairPolicyBuilder {
    policy: RepairPolicy,
}

impl RepairPolicyBuilder {
    pub fn replace_illegal_chars(mut self, enabled: bool) -> Self {
        self.policy.replace_illegal_chars = enabled;
        self
    }

    pub fn replacement_char(mut self, c: char) -> Self {
        self.policy.replacement_char = c;
        self
    }

    pub fn clip_overlength(mut self, enabled: bool) -> Self {
        self.policy.clip_overlength = enabled;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.policy.max_length = max_length;
        self
    }

    pub fn create_missing_directory(mut self, enabled: bool) -> Self {
        self.policy.create_missing_directory = enabled;
        self
    }

    /// Validates and returns the policy.
    ///
    /// The replacement character must be accepted and must not be a path
    /// separator, so a substituted filename stays a single component.
    pub fn build(self) -> Result<RepairPolicy, PolicyError> {
        if !is_accepted(self.policy.replacement_char) {
            return Err(PolicyError::ReplacementNotAccepted(
                self.policy.replacement_char,
            ));
        }
        if is_separator(self.policy.replacement_char) {
            return Err(PolicyError::ReplacementIsSeparator(
                self.policy.replacement_char,
            ));
        }
        if self.policy.max_length == 0 {
            return Err(PolicyError::ZeroMaxLength);
        }
        Ok(self.policy)
    }
}
