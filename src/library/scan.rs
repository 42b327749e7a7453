use std::path::Path;

use lofty::prelude::*;
use lofty::tag::ItemKey;
use walkdir::WalkDir;

use super::model::ScannedTrack;

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

fn non_empty(v: Option<impl AsRef<str>>) -> Option<String> {
    v.map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Collect every `.mp3` under `dir`, sorted by path.
///
/// Files whose tags cannot be read are still listed, with empty fields.
pub fn scan(dir: &Path) -> Vec<ScannedTrack> {
    let mut tracks: Vec<ScannedTrack> = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_mp3(path) {
            continue;
        }

        let mut track = ScannedTrack {
            path: path.to_path_buf(),
            ..ScannedTrack::default()
        };

        if let Ok(tagged) = lofty::read_from_path(path) {
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                track.title = non_empty(tag.title());
                track.artist = non_empty(tag.artist());
                track.album_artist = non_empty(tag.get_string(&ItemKey::AlbumArtist));
                track.album = non_empty(tag.album());
                track.track = tag.track();
                track.track_total = tag.track_total();
                track.disc = tag.disk();
                track.disc_total = tag.disk_total();
                track.year = non_empty(tag.get_string(&ItemKey::RecordingDate));
                track.genre = non_empty(tag.genre());
            }
        }

        tracks.push(track);
    }

    tracks.sort_by(|a, b| a.path.cmp(&b.path));
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_mp3_is_case_insensitive() {
        assert!(is_mp3(Path::new("/tmp/a.mp3")));
        assert!(is_mp3(Path::new("/tmp/a.MP3")));
        assert!(!is_mp3(Path::new("/tmp/a.flac")));
        assert!(!is_mp3(Path::new("/tmp/a")));
    }

    #[test]
    fn scan_lists_untagged_mp3s_and_skips_other_files() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("Artist").join("Album");
        fs::create_dir_all(&sub).unwrap();

        fs::write(sub.join("02 b.mp3"), b"not a real mp3").unwrap();
        fs::write(sub.join("01 a.MP3"), b"not a real mp3").unwrap();
        fs::write(sub.join("cover.jpg"), b"ignore me").unwrap();

        let tracks = scan(dir.path());
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].path, sub.join("01 a.MP3"));
        assert_eq!(tracks[1].path, sub.join("02 b.mp3"));
        assert!(tracks[0].title.is_none());
        assert!(tracks[0].track_field().is_none());
    }
}
