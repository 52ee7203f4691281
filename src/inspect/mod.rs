//! Path inspection
//!
//! Decomposes a raw path into directory, stem and extension and classifies it
//! against the accepted character set and a maximum length.

pub mod charset;
mod operations;
mod results;

pub use charset::{ACCEPTED_SYMBOLS, illegal_characters, is_accepted};
pub use operations::{DEFAULT_MAX_LENGTH, inspect, join_path, normalize_separators};
pub use results::{FileInfo, PathReport};
