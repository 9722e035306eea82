mod config;
mod env;
mod error;
mod model;
mod profile;
mod redact;
mod settings;

pub use config::*;
pub use env::*;
pub use error::*;
pub use model::*;
pub use profile::*;
pub use redact::*;
pub use settings::*;
