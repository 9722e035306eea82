mod list;
mod status;

pub use list::*;
pub use status::*;

/// Shown wherever a value is not configured.
pub const UNSET: &str = "unset";
