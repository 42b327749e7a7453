//! Process setup: logging and settings.

mod startup;

pub use startup::{init_tracing, load_settings};
