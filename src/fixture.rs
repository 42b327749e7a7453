//! Directory and file materialization for the generated library.

use std::{
    fs::{self, FileTimes, OpenOptions},
    path::{Path, PathBuf},
};

use tracing::{Level, instrument};

use crate::error::GenerateError;

/// `NN Title.mp3`, with the track number zero-padded to two digits.
pub fn track_file_name(number: u32, title: &str) -> String {
    format!("{number:02} {title}.mp3")
}

/// Create `dest_root/artist/album` (and any missing parents).
///
/// Succeeds when the directory already exists.
#[instrument(level = Level::TRACE, err)]
pub fn ensure_album_directory(
    dest_root: &Path,
    artist: &str,
    album: &str,
) -> Result<PathBuf, GenerateError> {
    let dir = dest_root.join(artist).join(album);
    fs::create_dir_all(&dir).map_err(GenerateError::io(&dir))?;
    Ok(dir)
}

/// Copy the template to `dest`, replacing whatever is there, and carry over
/// the template's access/modification times.
#[instrument(level = Level::TRACE, err)]
pub fn copy_track(source: &Path, dest: &Path) -> Result<u64, GenerateError> {
    let bytes = fs::copy(source, dest).map_err(GenerateError::io(dest))?;

    let meta = fs::metadata(source).map_err(GenerateError::io(source))?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }

    let file = OpenOptions::new()
        .write(true)
        .open(dest)
        .map_err(GenerateError::io(dest))?;
    file.set_times(times).map_err(GenerateError::io(dest))?;

    Ok(bytes)
}
