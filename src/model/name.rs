//! Track name derivation from file paths

/// Maximum length of a track name, in characters
pub const MAX_NAME_LEN: usize = 255;

/// Derive a track name from a file path
///
/// Takes the part after the last `/` or `\` (whichever comes later), drops
/// everything from the last `.` onwards and truncates to [`MAX_NAME_LEN`]
/// characters. Works on the raw string so Windows-style paths behave the
/// same on every platform.
pub fn track_name_from_path(path: &str) -> String {
    let start = path.rfind(|c: char| c == '/' || c == '\\').map(|i| i + 1).unwrap_or(0);
    let file_name = &path[start..];

    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    };

    stem.chars().take(MAX_NAME_LEN).collect()
}
