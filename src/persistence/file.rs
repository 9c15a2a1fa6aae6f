//! Reading and writing playlist files

use super::record::TrackRecord;
use crate::model::{Playlist, Restored};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Counts from a [`load_playlist`] run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records that created a new track
    pub added: usize,
    /// Records that overwrote an existing track's counters
    pub updated: usize,
    /// Malformed lines that were ignored
    pub skipped: usize,
}

/// Write every track to `path`, one `name,play_count,is_favorite` line each,
/// in play order.
///
/// An empty playlist writes nothing and leaves any existing file alone.
/// Returns the number of lines written.
pub fn save_playlist(playlist: &Playlist, path: &Path) -> Result<usize> {
    if playlist.is_empty() {
        log::debug!("Playlist is empty, not writing {:?}", path);
        return Ok(0);
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create playlist file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    for track in playlist.iter() {
        let record = TrackRecord::from(track);
        if !record.is_loadable() {
            log::warn!("Track {:?} will not load back from {:?}", record.name, path);
        }
        writeln!(writer, "{}", record)
            .with_context(|| format!("Failed to write playlist file: {:?}", path))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write playlist file: {:?}", path))?;

    log::info!("Saved {} tracks to {:?}", playlist.len(), path);
    Ok(playlist.len())
}

/// Merge the records in `path` into `playlist`
///
/// Known tracks get their play count and favorite flag overwritten from the
/// file, unknown ones are appended in file order. Malformed lines are
/// skipped.
pub fn load_playlist(playlist: &mut Playlist, path: &Path) -> Result<LoadSummary> {
    let file =
        File::open(path).with_context(|| format!("Failed to open playlist file: {:?}", path))?;
    let reader = BufReader::new(file);

    let mut summary = LoadSummary::default();

    for (line_no, line) in reader.split(b'\n').enumerate() {
        let line = line.with_context(|| format!("Failed to read playlist file: {:?}", path))?;
        let line = String::from_utf8_lossy(&line);

        let Some(record) = TrackRecord::parse(&line) else {
            log::warn!("Skipping malformed line {} in {:?}", line_no + 1, path);
            summary.skipped += 1;
            continue;
        };

        match playlist.restore(&record.name, record.play_count, record.is_favorite)? {
            Restored::Added => summary.added += 1,
            Restored::Updated => summary.updated += 1,
        }
    }

    log::info!(
        "Loaded {:?}: {} added, {} updated, {} skipped",
        path,
        summary.added,
        summary.updated,
        summary.skipped
    );
    Ok(summary)
}
