//! Playlist file persistence
//!
//! Playlists are stored as plain text, one `name,play_count,is_favorite`
//! line per track in play order. The cursor is not stored.

mod file;
mod record;

pub use file::{load_playlist, save_playlist, LoadSummary};
pub use record::TrackRecord;
