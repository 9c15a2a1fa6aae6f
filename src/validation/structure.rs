//! Structural checks on the circular play order

use crate::model::Playlist;
use anyhow::Result;
use std::collections::HashSet;

/// Verify that a playlist's links, names and cursor are consistent
///
/// Checks that:
/// - walking successors `len` times from the first track visits `len`
///   distinct tracks and comes back to the first one
/// - each track's successor has that track as its predecessor
/// - the predecessor walk also closes after `len` steps
/// - the cursor is set exactly when the playlist is non-empty and names a
///   track that is in the playlist
///
/// # Returns
/// Ok(()) if validation passes, Err describing the first problem otherwise
pub fn validate_playlist(playlist: &Playlist) -> Result<()> {
    let len = playlist.len();
    log::debug!("Validating playlist structure ({} tracks)", len);

    let Some(first) = playlist.first() else {
        if len != 0 {
            anyhow::bail!("Playlist reports {} tracks but has no first track", len);
        }
        if playlist.current().is_some() {
            anyhow::bail!("Empty playlist still has a current track");
        }
        return Ok(());
    };

    let mut seen = HashSet::with_capacity(len);
    let mut name = first.name.as_str();
    for step in 0..len {
        if !seen.insert(name) {
            anyhow::bail!("Track {:?} reached twice after {} steps", name, step);
        }

        let next = playlist
            .successor_of(name)
            .ok_or_else(|| anyhow::anyhow!("Track {:?} has no successor", name))?;
        let back = playlist
            .predecessor_of(&next.name)
            .ok_or_else(|| anyhow::anyhow!("Track {:?} has no predecessor", next.name))?;
        if back.name != name {
            anyhow::bail!(
                "Link mismatch: {:?} -> {:?} but {:?} <- {:?}",
                name,
                next.name,
                back.name,
                next.name
            );
        }

        name = next.name.as_str();
    }
    if name != first.name {
        anyhow::bail!(
            "Successor walk of {} steps ended at {:?}, not {:?}",
            len,
            name,
            first.name
        );
    }

    let mut name = first.name.as_str();
    for _ in 0..len {
        name = playlist
            .predecessor_of(name)
            .map(|t| t.name.as_str())
            .ok_or_else(|| anyhow::anyhow!("Track {:?} has no predecessor", name))?;
    }
    if name != first.name {
        anyhow::bail!(
            "Predecessor walk of {} steps ended at {:?}, not {:?}",
            len,
            name,
            first.name
        );
    }

    match playlist.current() {
        None => anyhow::bail!("Non-empty playlist has no current track"),
        Some(current) if !seen.contains(current.name.as_str()) => {
            anyhow::bail!("Current track {:?} is not in the playlist", current.name)
        }
        Some(_) => {}
    }

    Ok(())
}
