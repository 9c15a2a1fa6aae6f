//! Audio file discovery and bulk import

use crate::error::PlaylistError;
use crate::model::Playlist;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions recognised as audio (compared case-insensitively)
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "m4a", "flac"];

/// Counts from an [`import_directory`] run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Files added as new tracks
    pub added: usize,
    /// Files whose track name was already in the playlist
    pub duplicates: usize,
}

/// Check whether `path` has a supported audio extension
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// List the audio files in `dir`, sorted by file name
///
/// Only the directory itself is scanned unless `recursive` is set.
/// Unreadable entries are logged and skipped.
pub fn scan_audio_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {:?}", dir);
    }

    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry under {:?}: {}", dir, e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_audio_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    log::debug!("Found {} audio files in {:?}", files.len(), dir);
    Ok(files)
}

/// Add every audio file in `dir` to `playlist`
///
/// Files whose track name is already present are counted and skipped.
pub fn import_directory(
    playlist: &mut Playlist,
    dir: &Path,
    recursive: bool,
) -> Result<ImportSummary> {
    let files = scan_audio_files(dir, recursive)
        .with_context(|| format!("Failed to scan music directory: {:?}", dir))?;

    let mut summary = ImportSummary::default();
    for file in files {
        let path = file.to_string_lossy();
        match playlist.insert(&path) {
            Ok(_) => summary.added += 1,
            Err(PlaylistError::DuplicateName(_)) => summary.duplicates += 1,
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to import {:?}", file));
            }
        }
    }

    log::info!(
        "Imported {:?}: {} added, {} already present",
        dir,
        summary.added,
        summary.duplicates
    );
    Ok(summary)
}
