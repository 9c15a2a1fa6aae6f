//! Music folder integration
//!
//! Scans directories for audio files to fill a playlist, and maps track
//! names back to files on disk.

mod locate;
mod scan;

pub use locate::locate_track_file;
pub use scan::{import_directory, is_audio_file, scan_audio_files, ImportSummary, AUDIO_EXTENSIONS};
