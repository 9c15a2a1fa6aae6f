use super::name::track_name_from_path;
use super::ring::{NodeId, Ring};
use super::track::Track;
use crate::error::{PlaylistError, Result};

/// What [`Playlist::restore`] did with a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restored {
    /// A new track was appended
    Added,
    /// An existing track had its counters overwritten
    Updated,
}

/// Playlist engine: tracks in a circular, doubly linked play order plus a
/// cursor marking the current track.
///
/// The cursor is `Some` exactly when the playlist is non-empty. Track names
/// are unique and compared case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    ring: Ring<Track>,
    cursor: Option<NodeId>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self {
            ring: Ring::new(),
            cursor: None,
        }
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Add the track for `path` at the end of the playlist
    ///
    /// The track name is derived from the path (see
    /// [`track_name_from_path`]) and may be empty for paths such as
    /// `/music/`. The first track added to an empty playlist becomes the
    /// current track.
    pub fn insert(&mut self, path: &str) -> Result<&Track> {
        if path.is_empty() {
            return Err(PlaylistError::EmptyPath);
        }

        let name = track_name_from_path(path);
        if self.find(&name).is_some() {
            log::debug!("Skipping duplicate track {:?} from {:?}", name, path);
            return Err(PlaylistError::DuplicateName(name));
        }

        self.append(Track::new(name))
    }

    /// Remove the track called `name`
    ///
    /// If it was the current track the cursor moves to its successor, or
    /// is cleared when the playlist becomes empty.
    pub fn delete(&mut self, name: &str) -> Result<Track> {
        if self.is_empty() {
            return Err(PlaylistError::EmptyPlaylist);
        }
        let id = self
            .find(name)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))?;

        if self.cursor == Some(id) {
            self.cursor = self.ring.next(id).filter(|next| *next != id);
        }

        let track = self
            .ring
            .remove(id)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))?;

        log::debug!("Removed track {:?} ({} left)", track.name, self.len());
        Ok(track)
    }

    /// Play the track called `name`, making it current
    ///
    /// Returns the track name, or `None` if no such track exists.
    pub fn play(&mut self, name: &str) -> Option<String> {
        let id = self.find(name)?;
        self.play_at(id)
    }

    /// Move to the next track (wrapping around) and play it
    pub fn play_next(&mut self) -> Option<String> {
        let id = self.ring.next(self.cursor?)?;
        self.play_at(id)
    }

    /// Move to the previous track (wrapping around) and play it
    pub fn play_previous(&mut self) -> Option<String> {
        let id = self.ring.prev(self.cursor?)?;
        self.play_at(id)
    }

    /// Summary of the track called `name`, e.g. `song (Plays: 1, Favorite: No)`
    pub fn search(&self, name: &str) -> Option<String> {
        self.get(name).map(Track::summary)
    }

    /// All track names in play order, starting from the first track.
    /// Empty when the playlist is empty.
    pub fn list_all(&self) -> Vec<String> {
        self.iter().map(|t| t.name.clone()).collect()
    }

    /// Favorite track names in play order. Empty when there are none.
    pub fn list_favorites(&self) -> Vec<String> {
        self.iter()
            .filter(|t| t.is_favorite)
            .map(|t| t.name.clone())
            .collect()
    }

    /// Drop every track and reset the cursor. Safe on an empty playlist.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            log::debug!("Clearing {} tracks", self.len());
        }
        self.ring.clear();
        self.cursor = None;
    }

    /// Apply a saved `(name, play_count, is_favorite)` record
    ///
    /// An existing track has its counters overwritten, including clearing
    /// `is_favorite`; this is the only way a favorite can be unset. An
    /// unknown name is appended as-is, without deriving it from a path.
    pub fn restore(&mut self, name: &str, play_count: u32, is_favorite: bool) -> Result<Restored> {
        if let Some(id) = self.find(name) {
            if let Some(track) = self.ring.get_mut(id) {
                track.play_count = play_count;
                track.is_favorite = is_favorite;
            }
            return Ok(Restored::Updated);
        }

        self.append(Track::with_stats(name.to_string(), play_count, is_favorite))?;
        Ok(Restored::Added)
    }

    /// Look up a track by exact name
    pub fn get(&self, name: &str) -> Option<&Track> {
        self.find(name).and_then(|id| self.ring.get(id))
    }

    /// Whether a track called `name` exists
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// The current track (last played or navigated to)
    pub fn current(&self) -> Option<&Track> {
        self.cursor.and_then(|id| self.ring.get(id))
    }

    /// First track in play order
    pub fn first(&self) -> Option<&Track> {
        self.ring.head().and_then(|id| self.ring.get(id))
    }

    /// Last track in play order
    pub fn last(&self) -> Option<&Track> {
        self.ring.tail().and_then(|id| self.ring.get(id))
    }

    /// The track that follows `name`, wrapping from last to first
    pub fn successor_of(&self, name: &str) -> Option<&Track> {
        let next = self.ring.next(self.find(name)?)?;
        self.ring.get(next)
    }

    /// The track that precedes `name`, wrapping from first to last
    pub fn predecessor_of(&self, name: &str) -> Option<&Track> {
        let prev = self.ring.prev(self.find(name)?)?;
        self.ring.get(prev)
    }

    /// Tracks in play order, starting from the first track
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Track> + '_ {
        self.ring.iter().map(|(_, track)| track)
    }

    fn find(&self, name: &str) -> Option<NodeId> {
        self.ring.find(|t| t.name == name)
    }

    fn append(&mut self, track: Track) -> Result<&Track> {
        let total = self.len() + 1;
        let (id, track) = self
            .ring
            .push_back(track)
            .map_err(|_| PlaylistError::Allocation)?;
        if self.cursor.is_none() {
            self.cursor = Some(id);
        }
        log::debug!("Added track {:?} ({} total)", track.name, total);
        Ok(&*track)
    }

    fn play_at(&mut self, id: NodeId) -> Option<String> {
        let track = self.ring.get_mut(id)?;
        track.record_play();
        log::debug!("Playing {}", track);
        let name = track.name.clone();
        self.cursor = Some(id);
        Some(name)
    }

}
