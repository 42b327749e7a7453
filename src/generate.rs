//! The generation run: catalog in, tagged file tree out.

use std::{fmt, fs, path::PathBuf};

use tracing::{debug, info};

use crate::catalog::{AlbumRecord, total_tracks};
use crate::config::PathSettings;
use crate::error::GenerateError;
use crate::fixture::{copy_track, ensure_album_directory, track_file_name};
use crate::tags::{TagWriter, TrackTags};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub tracks: usize,
    pub albums: usize,
    pub destination: PathBuf,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created {} tracks across {} albums in {}",
            self.tracks,
            self.albums,
            self.destination.display()
        )
    }
}

/// Materialize every album of `catalog` under `paths.destination`.
///
/// The template is checked before anything is created on disk. Existing
/// files at the destination are overwritten. The first failure aborts the
/// run and leaves already-written albums in place.
pub fn generate(
    paths: &PathSettings,
    catalog: &[AlbumRecord],
    writer: &impl TagWriter,
) -> Result<Summary, GenerateError> {
    let template = paths.source.as_path();
    if !template.is_file() {
        return Err(GenerateError::MissingTemplate {
            path: template.to_path_buf(),
        });
    }

    let dest = paths.destination.as_path();
    fs::create_dir_all(dest).map_err(GenerateError::io(dest))?;
    info!(
        albums = catalog.len(),
        tracks = total_tracks(catalog),
        template = %template.display(),
        "generating sample library"
    );

    let mut count = 0;
    for album in catalog {
        let album_dir = ensure_album_directory(dest, album.artist, album.album)?;
        info!(
            artist = album.artist,
            album = album.album,
            tracks = album.tracks.len(),
            "writing album"
        );

        for (number, title) in album.numbered_tracks() {
            let track_path = album_dir.join(track_file_name(number, title));
            copy_track(template, &track_path)?;
            writer.write_tags(&track_path, &TrackTags::for_track(album, number, title))?;
            debug!(path = %track_path.display(), "tagged");
            count += 1;
        }
    }

    Ok(Summary {
        tracks: count,
        albums: catalog.len(),
        destination: dest.to_path_buf(),
    })
}
