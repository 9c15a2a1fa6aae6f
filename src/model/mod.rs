//! Playlist data model
//!
//! Tracks, track-name derivation and the circular playlist engine.

mod name;
mod playlist;
mod ring;
mod track;

pub use name::{track_name_from_path, MAX_NAME_LEN};
pub use playlist::{Playlist, Restored};
pub use track::{Track, FAVORITE_THRESHOLD};
