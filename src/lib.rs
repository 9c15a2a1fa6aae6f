//! Playlist Engine - circular playlist with play counts and favorites
//!
//! Tracks are kept in a circular doubly linked play order with a cursor
//! for next/previous navigation, and can be saved to and restored from a
//! simple `name,play_count,is_favorite` text file.

pub mod error;
pub mod library;
pub mod model;
pub mod persistence;
pub mod session;
pub mod validation;

pub use error::PlaylistError;
pub use model::{Playlist, Track};
pub use persistence::{load_playlist, save_playlist};
pub use session::{Session, SessionConfig};
