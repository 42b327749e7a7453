use std::path::PathBuf;

/// A file found under the library root, with whatever tags could be read.
#[derive(Debug, Clone, Default)]
pub struct ScannedTrack {
    pub path: PathBuf,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub album: Option<String>,
    pub track: Option<u32>,
    pub track_total: Option<u32>,
    pub disc: Option<u32>,
    pub disc_total: Option<u32>,
    pub year: Option<String>,
    pub genre: Option<String>,
}

impl ScannedTrack {
    pub fn track_field(&self) -> Option<String> {
        slash_pair(self.track, self.track_total)
    }

    pub fn disc_field(&self) -> Option<String> {
        slash_pair(self.disc, self.disc_total)
    }
}

fn slash_pair(n: Option<u32>, total: Option<u32>) -> Option<String> {
    match (n, total) {
        (Some(n), Some(t)) => Some(format!("{n}/{t}")),
        (Some(n), None) => Some(n.to_string()),
        _ => None,
    }
}
