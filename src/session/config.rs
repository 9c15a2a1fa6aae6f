//! Session configuration

use std::path::PathBuf;

/// Default playlist file location (`~` is expanded)
pub const DEFAULT_PLAYLIST_PATH: &str = "~/.playlist.csv";

/// Configuration for a playlist session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Playlist file to load at start and save after changes
    pub playlist_path: PathBuf,

    /// Save automatically after every command that changes the playlist
    pub autosave: bool,

    /// Music directories used by import and file lookup
    pub library_dirs: Vec<PathBuf>,

    /// Descend into subdirectories when importing
    pub recursive: bool,
}

impl SessionConfig {
    /// Create a new session configuration for the given playlist file
    pub fn new(playlist_path: PathBuf) -> Self {
        Self {
            playlist_path,
            autosave: true,
            library_dirs: Vec::new(),
            recursive: false,
        }
    }

    /// Build a configuration from a user-supplied path, expanding `~`
    pub fn from_user_path(path: &str) -> Self {
        Self::new(expand_path(path))
    }

    /// Set the music directories
    pub fn with_library_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.library_dirs = dirs;
        self
    }

    /// Enable or disable saving after each change
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Enable or disable recursive import
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_user_path(DEFAULT_PLAYLIST_PATH)
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
