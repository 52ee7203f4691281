//! Filesystem path sanitization and provisioning.
//!
//! [`inspect`] classifies a raw path, [`repair`] makes it usable according to
//! a [`RepairPolicy`] and creates the directories it needs.

pub mod config;
pub mod error;
pub mod inspect;
pub mod repair;
pub mod storage;
pub mod utils;

pub use crate::config::SanitizerSettings;
pub use error::{PolicyError, RepairError, SanitizerError, StorageError};
pub use inspect::{PathReport, inspect};
pub use repair::{RepairOutcome, RepairPolicy, check_path, repair};
pub use storage::ensure_directory;
