//! File system storage management
//!
//! Directory provisioning and existence checks.

pub mod filesystem;

pub use filesystem::{directory_exists, ensure_directory, path_exists};
