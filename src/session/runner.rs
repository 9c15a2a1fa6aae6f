//! Load a playlist file, run one command against it, save it back

use super::config::SessionConfig;
use crate::error::PlaylistError;
use crate::library::{import_directory, locate_track_file, ImportSummary};
use crate::model::Playlist;
use crate::persistence::{load_playlist, save_playlist};
use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::path::PathBuf;

/// A single playlist operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add tracks from file paths
    Add { paths: Vec<String> },
    /// Remove a track by name
    Remove { name: String },
    /// Play a track by name
    Play { name: String },
    /// Play the track after the current one
    Next,
    /// Play the track before the current one
    Previous,
    /// Show a track's play count and favorite status
    Search { name: String },
    /// List all track names
    List,
    /// List favorite track names
    Favorites,
    /// Import audio files from a directory, or from every library directory
    Import { dir: Option<PathBuf> },
    /// Find the audio file for a track
    Locate { name: String },
    /// Remove every track
    Clear,
}

/// Result of running a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added {
        added: Vec<String>,
        rejected: Vec<(String, PlaylistError)>,
    },
    Removed(String),
    Played(String),
    Info(String),
    Names(Vec<String>),
    Imported(ImportSummary),
    Located(PathBuf),
    Cleared(usize),
}

impl Outcome {
    /// Whether the command changed the playlist
    pub fn modified(&self) -> bool {
        match self {
            Outcome::Added { added, .. } => !added.is_empty(),
            Outcome::Imported(summary) => summary.added > 0,
            Outcome::Removed(_) | Outcome::Played(_) => true,
            Outcome::Cleared(count) => *count > 0,
            Outcome::Info(_) | Outcome::Names(_) | Outcome::Located(_) => false,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added { added, rejected } => {
                for name in added {
                    writeln!(f, "Added: {}", name)?;
                }
                for (path, reason) in rejected {
                    writeln!(f, "Skipped {}: {}", path, reason)?;
                }
                Ok(())
            }
            Outcome::Removed(name) => writeln!(f, "Removed: {}", name),
            Outcome::Played(name) => writeln!(f, "Now playing: {}", name),
            Outcome::Info(info) => writeln!(f, "{}", info),
            Outcome::Names(names) if names.is_empty() => writeln!(f, "(none)"),
            Outcome::Names(names) => {
                for (i, name) in names.iter().enumerate() {
                    writeln!(f, "{:>4}. {}", i + 1, name)?;
                }
                Ok(())
            }
            Outcome::Imported(summary) => writeln!(
                f,
                "Imported {} tracks ({} already present)",
                summary.added, summary.duplicates
            ),
            Outcome::Located(path) => writeln!(f, "{}", path.display()),
            Outcome::Cleared(count) => writeln!(f, "Removed {} tracks", count),
        }
    }
}

/// A playlist bound to its file on disk
pub struct Session {
    config: SessionConfig,
    playlist: Playlist,
}

impl Session {
    /// Open the configured playlist file; a missing file starts empty
    pub fn open(config: SessionConfig) -> Result<Self> {
        let mut playlist = Playlist::new();

        if config.playlist_path.exists() {
            load_playlist(&mut playlist, &config.playlist_path)?;
        } else {
            log::info!(
                "No playlist at {:?}, starting empty",
                config.playlist_path
            );
        }

        Ok(Self { config, playlist })
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run `command`, saving afterwards if it changed anything and
    /// autosave is on
    pub fn run(&mut self, command: Command) -> Result<Outcome> {
        log::debug!("Running {:?}", command);
        let outcome = self.apply(command)?;

        if outcome.modified() && self.config.autosave {
            self.save()?;
        }
        Ok(outcome)
    }

    /// Write the playlist to its file
    ///
    /// An empty playlist truncates an existing file so that removals are
    /// not undone on the next load.
    pub fn save(&self) -> Result<()> {
        let path = &self.config.playlist_path;
        if self.playlist.is_empty() {
            if path.exists() {
                File::create(path)
                    .with_context(|| format!("Failed to truncate playlist file: {:?}", path))?;
                log::info!("Playlist empty, truncated {:?}", path);
            }
            return Ok(());
        }

        save_playlist(&self.playlist, path)?;
        Ok(())
    }

    fn apply(&mut self, command: Command) -> Result<Outcome> {
        let playlist = &mut self.playlist;

        let outcome = match command {
            Command::Add { paths } => {
                let mut added = Vec::new();
                let mut rejected = Vec::new();
                for path in paths {
                    match playlist.insert(&path) {
                        Ok(track) => added.push(track.name.clone()),
                        Err(PlaylistError::Allocation) => {
                            return Err(PlaylistError::Allocation.into())
                        }
                        Err(e) => rejected.push((path, e)),
                    }
                }
                Outcome::Added { added, rejected }
            }
            Command::Remove { name } => Outcome::Removed(playlist.delete(&name)?.name),
            Command::Play { name } => {
                let played = playlist
                    .play(&name)
                    .ok_or(PlaylistError::NotFound(name))?;
                Outcome::Played(played)
            }
            Command::Next => {
                Outcome::Played(playlist.play_next().ok_or(PlaylistError::EmptyPlaylist)?)
            }
            Command::Previous => {
                Outcome::Played(playlist.play_previous().ok_or(PlaylistError::EmptyPlaylist)?)
            }
            Command::Search { name } => {
                let info = playlist.search(&name).ok_or(PlaylistError::NotFound(name))?;
                Outcome::Info(info)
            }
            Command::List => Outcome::Names(playlist.list_all()),
            Command::Favorites => Outcome::Names(playlist.list_favorites()),
            Command::Import { dir } => {
                let dirs = match dir {
                    Some(dir) => vec![dir],
                    None => self.config.library_dirs.clone(),
                };
                if dirs.is_empty() {
                    anyhow::bail!("No music directory given and none configured");
                }

                let mut total = ImportSummary::default();
                for dir in &dirs {
                    let summary = import_directory(playlist, dir, self.config.recursive)?;
                    total.added += summary.added;
                    total.duplicates += summary.duplicates;
                }
                Outcome::Imported(total)
            }
            Command::Locate { name } => {
                if !playlist.contains(&name) {
                    return Err(PlaylistError::NotFound(name).into());
                }
                let path = locate_track_file(&name, &self.config.library_dirs)
                    .with_context(|| format!("No audio file found for {:?}", name))?;
                Outcome::Located(path)
            }
            Command::Clear => {
                let count = playlist.len();
                playlist.clear();
                Outcome::Cleared(count)
            }
        };

        Ok(outcome)
    }
}
