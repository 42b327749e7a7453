//! The fixed album table that drives fixture generation.

/// One album of the sample library.
///
/// Track numbers are implied by position in `tracks` (1-based).
#[derive(Debug, Clone, Copy)]
pub struct AlbumRecord {
    pub artist: &'static str,
    pub album: &'static str,
    /// Four-digit release year, written verbatim into the tag.
    pub year: &'static str,
    pub genre: &'static str,
    pub tracks: &'static [&'static str],
}

impl AlbumRecord {
    /// Number of tracks on the album, used as the "total" half of `n/total`.
    pub fn track_total(&self) -> u32 {
        self.tracks.len() as u32
    }

    /// Tracks paired with their 1-based track number.
    pub fn numbered_tracks(&self) -> impl Iterator<Item = (u32, &'static str)> + '_ {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, title)| (i as u32 + 1, *title))
    }
}

pub fn total_tracks(catalog: &[AlbumRecord]) -> usize {
    catalog.iter().map(|a| a.tracks.len()).sum()
}

pub static CATALOG: &[AlbumRecord] = &[
    AlbumRecord {
        artist: "Sonic Youth",
        album: "A Thousand Leaves",
        year: "1998",
        genre: "Alternative",
        tracks: &[
            "Contre le Sexisme",
            "Sunday",
            "Female Mechanic Now on Duty",
            "Wildflower Soul",
            "Hoarfrost",
            "French Tickler",
            "Hits of Sunshine",
            "Karen Koltrane",
            "The Ineffable Me",
            "Snare Girl",
            "Heather Angel",
            "Karen Revisited",
        ],
    },
    AlbumRecord {
        artist: "Radiohead",
        album: "OK Computer",
        year: "1997",
        genre: "Alternative",
        tracks: &[
            "Airbag",
            "Paranoid Android",
            "Subterranean Homesick Alien",
            "Exit Music (For a Film)",
            "Let Down",
            "Karma Police",
            "Fitter Happier",
            "Electioneering",
            "Climbing Up the Walls",
            "No Surprises",
            "Lucky",
            "The Tourist",
        ],
    },
    AlbumRecord {
        artist: "Portishead",
        album: "Dummy",
        year: "1994",
        genre: "Trip Hop",
        tracks: &[
            "Mysterons",
            "Sour Times",
            "Strangers",
            "It Could Be Sweet",
            "Wandering Star",
            "It's a Fire",
            "Numb",
            "Roads",
            "Pedestal",
            "Biscuit",
            "Glory Box",
        ],
    },
    AlbumRecord {
        artist: "Boards of Canada",
        album: "Music Has the Right to Children",
        year: "1998",
        genre: "Electronic",
        tracks: &[
            "Wildlife Analysis",
            "An Eagle in Your Mind",
            "The Color of the Fire",
            "Telephasic Workshop",
            "Triangles & Rhombuses",
            "Sixtyten",
            "Turquoise Hexagon Sun",
            "Kaini Industries",
            "Bocuma",
            "Roygbiv",
            "Rue the Whirl",
            "Aquarius",
            "Olson",
            "Pete Standing Alone",
            "Smokes Quantity",
            "Open the Light",
            "One Very Important Thought",
            "Happy Cycling",
        ],
    },
    AlbumRecord {
        artist: "Massive Attack",
        album: "Mezzanine",
        year: "1998",
        genre: "Trip Hop",
        tracks: &[
            "Angel",
            "Risingson",
            "Teardrop",
            "Inertia Creeps",
            "Exchange",
            "Dissolved Girl",
            "Man Next Door",
            "Black Milk",
            "Mezzanine",
            "Group Four",
            "(Exchange)",
        ],
    },
];
