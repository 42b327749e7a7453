use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/sample-music/config.toml` or `~/.config/sample-music/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SAMPLE_MUSIC__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
    pub verify: VerifySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Template audio file copied once per track. A leading `~` is expanded.
    pub source: PathBuf,
    /// Root of the generated `<artist>/<album>/<NN> <title>.mp3` tree.
    pub destination: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            source: PathBuf::from("~/Temp/file_example_MP3_1MG.mp3"),
            destination: PathBuf::from("~/Source/rockbox/build-sim/simdisk/Music"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VerifySettings {
    /// Re-scan the generated tree and compare its tags with the catalog.
    pub enabled: bool,
}
