use std::fmt;

/// Number of plays after which a track becomes a favorite
pub const FAVORITE_THRESHOLD: u32 = 3;

/// A single playlist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Track name (file basename without extension), unique within a playlist
    pub name: String,

    /// How many times the track has been played
    pub play_count: u32,

    /// Set once `play_count` reaches [`FAVORITE_THRESHOLD`]
    pub is_favorite: bool,
}

impl Track {
    /// Create a track that has never been played
    pub fn new(name: String) -> Self {
        Self {
            name,
            play_count: 0,
            is_favorite: false,
        }
    }

    /// Create a track with explicit counters (used when restoring from a file)
    pub fn with_stats(name: String, play_count: u32, is_favorite: bool) -> Self {
        Self {
            name,
            play_count,
            is_favorite,
        }
    }

    /// Count one play and promote to favorite at the threshold.
    /// Never clears the favorite flag.
    pub(crate) fn record_play(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
        if self.play_count >= FAVORITE_THRESHOLD {
            self.is_favorite = true;
        }
    }

    /// Human-readable summary, e.g. `song (Plays: 3, Favorite: Yes)`
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Plays: {}, Favorite: {})",
            self.name,
            self.play_count,
            if self.is_favorite { "Yes" } else { "No" }
        )
    }
}
