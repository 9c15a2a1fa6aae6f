//! Resolve a track name back to the audio file it came from

use super::scan::AUDIO_EXTENSIONS;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the audio file backing the track `name` in one of `dirs`
///
/// Each directory is tried in turn: first `name` with every supported
/// extension, then `name` as an exact file name, then any file whose stem
/// matches `name` ignoring case.
pub fn locate_track_file<P: AsRef<Path>>(name: &str, dirs: &[P]) -> Option<PathBuf> {
    for dir in dirs {
        let dir: &Path = dir.as_ref();
        if !dir.is_dir() {
            continue;
        }
        if let Some(found) = locate_in_dir(name, dir) {
            return Some(found);
        }
    }
    None
}

fn locate_in_dir(name: &str, dir: &Path) -> Option<PathBuf> {
    for ext in AUDIO_EXTENSIONS {
        let candidate = dir.join(format!("{}.{}", name, ext));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let exact = dir.join(name);
    if exact.is_file() {
        return Some(exact);
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot list {:?}: {}", dir, e);
            return None;
        }
    };

    let wanted = name.to_lowercase();
    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .find(|path| {
            path.is_file()
                && path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().to_lowercase() == wanted)
                    .unwrap_or(false)
        })
}
