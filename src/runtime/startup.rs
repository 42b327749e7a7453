use std::error::Error;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config;

/// Log to stderr so stdout carries only the summary line.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load and validate settings.
///
/// A missing config file just means defaults. A file or env var that is
/// present but unreadable or invalid is an error: the run writes into the
/// destination, so it must never silently fall back to the default paths.
pub fn load_settings() -> Result<config::Settings, Box<dyn Error>> {
    let settings = config::Settings::load()?;
    settings.validate()?;
    debug!(
        source = %settings.paths.source.display(),
        destination = %settings.paths.destination.display(),
        "loaded settings"
    );
    Ok(settings)
}
