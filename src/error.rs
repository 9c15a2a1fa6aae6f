//! Engine error types

use thiserror::Error;

/// Failures reported by playlist mutations and lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("path is empty")]
    EmptyPath,

    #[error("track already in playlist: {0}")]
    DuplicateName(String),

    #[error("track not found: {0}")]
    NotFound(String),

    #[error("playlist is empty")]
    EmptyPlaylist,

    #[error("out of memory while growing the playlist")]
    Allocation,
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
