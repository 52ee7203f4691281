//! Path repair
//!
//! Turns an inspection report into a usable path according to a
//! [`RepairPolicy`], creating the missing directory chain when asked to.

mod operations;
mod policy;
mod results;

pub use operations::{CLIP_MARKER, check_path, repair};
pub use policy::{DEFAULT_REPLACEMENT_CHAR, RepairPolicy, RepairPolicyBuilder};
pub use results::RepairOutcome;
