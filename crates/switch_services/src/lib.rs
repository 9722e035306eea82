mod confirm;
mod document;
mod profile;
mod settings;
mod switch;

pub use confirm::*;
pub use profile::*;
pub use settings::*;
pub use switch::*;
