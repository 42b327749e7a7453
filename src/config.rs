//! Settings schema and loader.
//!
//! The defaults reproduce the fixed template and destination paths; a config
//! file or environment variables can point them elsewhere.

mod load;
mod schema;

pub use load::expand_home;
pub use schema::*;
