//! Tag writing, kept behind [`TagWriter`] so the driver never touches the
//! tag library directly.

use std::path::Path;

use lofty::config::{ParseOptions, WriteOptions};
use lofty::file::FileType;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{ItemKey, Tag, TagType};
use tracing::{Level, instrument};

use crate::catalog::AlbumRecord;
use crate::error::GenerateError;

/// The metadata written into one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTags {
    pub title: String,
    pub artist: String,
    pub album_artist: String,
    pub album: String,
    pub track: u32,
    pub track_total: u32,
    pub disc: u32,
    pub disc_total: u32,
    pub year: String,
    pub genre: String,
}

impl TrackTags {
    /// Tags for track `number` of `album`. Disc is always 1/1 and the album
    /// artist is the track artist.
    pub fn for_track(album: &AlbumRecord, number: u32, title: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: album.artist.to_string(),
            album_artist: album.artist.to_string(),
            album: album.album.to_string(),
            track: number,
            track_total: album.track_total(),
            disc: 1,
            disc_total: 1,
            year: album.year.to_string(),
            genre: album.genre.to_string(),
        }
    }

    /// `"n/total"` as stored in the track frame.
    pub fn track_field(&self) -> String {
        format!("{}/{}", self.track, self.track_total)
    }

    /// `"n/total"` as stored in the disc frame.
    pub fn disc_field(&self) -> String {
        format!("{}/{}", self.disc, self.disc_total)
    }
}

pub trait TagWriter {
    /// Replace all tags in the file at `path` with exactly `tags`.
    fn write_tags(&self, path: &Path, tags: &TrackTags) -> Result<(), GenerateError>;
}

/// Writes a fresh ID3v2 tag through `lofty`.
///
/// Whatever tags the file already carried (ID3v2 from the template, ID3v1,
/// APE) are dropped first, so a reader only ever sees the fields written here.
#[derive(Debug, Default, Clone, Copy)]
pub struct Id3v2Writer;

impl Id3v2Writer {
    fn ensure_id3v2_capable(path: &Path, file_type: FileType) -> Result<(), GenerateError> {
        if file_type.supports_tag_type(TagType::Id3v2) {
            return Ok(());
        }
        Err(GenerateError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }

    fn build_tag(tags: &TrackTags) -> Tag {
        let mut tag = Tag::new(TagType::Id3v2);

        tag.set_title(tags.title.clone());
        tag.set_artist(tags.artist.clone());
        tag.insert_text(ItemKey::AlbumArtist, tags.album_artist.clone());
        tag.set_album(tags.album.clone());
        // lofty folds number + total into a single "n/total" TRCK/TPOS frame.
        tag.set_track(tags.track);
        tag.set_track_total(tags.track_total);
        tag.set_disk(tags.disc);
        tag.set_disk_total(tags.disc_total);
        tag.insert_text(ItemKey::RecordingDate, tags.year.clone());
        tag.set_genre(tags.genre.clone());

        tag
    }
}

impl TagWriter for Id3v2Writer {
    #[instrument(level = Level::TRACE, skip(self, tags), err)]
    fn write_tags(&self, path: &Path, tags: &TrackTags) -> Result<(), GenerateError> {
        let tagged = Probe::open(path)
            .map_err(GenerateError::tag(path))?
            .options(ParseOptions::new().read_properties(false))
            .read()
            .map_err(GenerateError::tag(path))?;

        Self::ensure_id3v2_capable(path, tagged.file_type())?;

        for existing in tagged.tags() {
            if existing.tag_type() != TagType::Id3v2 {
                existing
                    .remove_from_path(path)
                    .map_err(GenerateError::tag(path))?;
            }
        }

        // Saving an ID3v2 tag replaces any ID3v2 block already in the file.
        Self::build_tag(tags)
            .save_to_path(path, WriteOptions::default())
            .map_err(GenerateError::tag(path))
    }
}
