use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::AlbumRecord;
use crate::error::GenerateError;
use crate::fixture::track_file_name;
use crate::tags::TrackTags;

use super::model::ScannedTrack;
use super::scan::scan;

fn check(
    path: &Path,
    field: &'static str,
    expected: &str,
    found: Option<String>,
) -> Result<(), GenerateError> {
    if found.as_deref() == Some(expected) {
        return Ok(());
    }
    Err(GenerateError::VerifyMismatch {
        path: path.to_path_buf(),
        field,
        expected: expected.to_string(),
        found,
    })
}

fn check_track(found: ScannedTrack, expected: &TrackTags) -> Result<(), GenerateError> {
    let path = found.path.as_path();
    check(path, "track", &expected.track_field(), found.track_field())?;
    check(path, "disc", &expected.disc_field(), found.disc_field())?;
    check(path, "title", &expected.title, found.title.clone())?;
    check(path, "artist", &expected.artist, found.artist.clone())?;
    check(path, "album artist", &expected.album_artist, found.album_artist.clone())?;
    check(path, "album", &expected.album, found.album.clone())?;
    check(path, "year", &expected.year, found.year.clone())?;
    check(path, "genre", &expected.genre, found.genre)
}

/// Confirm that every track in `catalog` exists under `dest` carrying the
/// tags it was generated with. Returns the number of tracks checked.
pub fn verify(dest: &Path, catalog: &[AlbumRecord]) -> Result<usize, GenerateError> {
    let mut by_path: HashMap<PathBuf, ScannedTrack> = scan(dest)
        .into_iter()
        .map(|t| (t.path.clone(), t))
        .collect();

    let mut checked = 0;
    for album in catalog {
        let dir = dest.join(album.artist).join(album.album);
        for (number, title) in album.numbered_tracks() {
            let path = dir.join(track_file_name(number, title));
            let Some(found) = by_path.remove(&path) else {
                return Err(GenerateError::VerifyMismatch {
                    path,
                    field: "file",
                    expected: "present".to_string(),
                    found: None,
                });
            };
            check_track(found, &TrackTags::for_track(album, number, title))?;
            checked += 1;
        }
    }

    debug!(checked, extra = by_path.len(), "verified generated library");
    Ok(checked)
}
