//! Playlist file line format: `name,play_count,is_favorite`

use crate::model::{Track, MAX_NAME_LEN};
use std::fmt;

/// One line of a playlist file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub name: String,
    pub play_count: u32,
    pub is_favorite: bool,
}

impl TrackRecord {
    /// Parse one line, returning `None` for anything malformed
    ///
    /// - name: 1 to [`MAX_NAME_LEN`] characters up to the first comma
    /// - play count: non-negative decimal, leading whitespace allowed
    /// - favorite: integer, `0` is false and anything else true; text after
    ///   the digits is ignored
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);

        let (name, rest) = line.split_once(',')?;
        if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
            return None;
        }

        let (count, favorite) = rest.split_once(',')?;
        let play_count = count.trim_start().parse::<u32>().ok()?;
        let is_favorite = leading_integer(favorite)? != 0;

        Some(Self {
            name: name.to_string(),
            play_count,
            is_favorite,
        })
    }

    /// Whether [`TrackRecord::parse`] can read this record back unchanged.
    /// Empty names and names containing a comma cannot.
    pub fn is_loadable(&self) -> bool {
        !self.name.is_empty() && !self.name.contains(',')
    }
}

impl From<&Track> for TrackRecord {
    fn from(track: &Track) -> Self {
        Self {
            name: track.name.clone(),
            play_count: track.play_count,
            is_favorite: track.is_favorite,
        }
    }
}

impl fmt::Display for TrackRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.name,
            self.play_count,
            u8::from(self.is_favorite)
        )
    }
}

/// Parse an optionally signed integer at the start of `s` (after whitespace)
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(&['+', '-'][..]));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, play_count: u32, is_favorite: bool) -> TrackRecord {
        TrackRecord {
            name: name.to_string(),
            play_count,
            is_favorite,
        }
    }

    #[test]
    fn test_format_line() {
        assert_eq!(record("song", 3, true).to_string(), "song,3,1");
        assert_eq!(record("song", 0, false).to_string(), "song,0,0");
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(TrackRecord::parse("song,3,1\n"), Some(record("song", 3, true)));
        assert_eq!(TrackRecord::parse("song,0,0"), Some(record("song", 0, false)));
        assert_eq!(TrackRecord::parse("song,2,0\r\n"), Some(record("song", 2, false)));
    }

    #[test]
    fn test_parse_keeps_spaces_in_name() {
        assert_eq!(
            TrackRecord::parse(" my song ,1,0"),
            Some(record(" my song ", 1, false))
        );
    }

    #[test]
    fn test_parse_lenient_numbers() {
        assert_eq!(TrackRecord::parse("song, 4, 1"), Some(record("song", 4, true)));
        assert_eq!(TrackRecord::parse("song,4,7"), Some(record("song", 4, true)));
        assert_eq!(TrackRecord::parse("song,4,1,extra"), Some(record("song", 4, true)));
        assert_eq!(TrackRecord::parse("song,4,0xyz"), Some(record("song", 4, false)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(TrackRecord::parse(""), None);
        assert_eq!(TrackRecord::parse("\n"), None);
        assert_eq!(TrackRecord::parse("song"), None);
        assert_eq!(TrackRecord::parse("song,3"), None);
        assert_eq!(TrackRecord::parse(",3,1"), None);
        assert_eq!(TrackRecord::parse("song,x,1"), None);
        assert_eq!(TrackRecord::parse("song,-1,1"), None);
        assert_eq!(TrackRecord::parse("song,3,"), None);
        assert_eq!(TrackRecord::parse("song,3,yes"), None);
    }

    #[test]
    fn test_parse_rejects_overlong_name() {
        let line = format!("{},1,0", "n".repeat(MAX_NAME_LEN + 1));
        assert_eq!(TrackRecord::parse(&line), None);

        let line = format!("{},1,0", "n".repeat(MAX_NAME_LEN));
        assert!(TrackRecord::parse(&line).is_some());
    }

    #[test]
    fn test_is_loadable() {
        assert!(record("song", 1, false).is_loadable());
        assert!(!record("", 1, false).is_loadable());
        assert!(!record("a,b", 1, false).is_loadable());

        let line = record("a,b", 1, false).to_string();
        assert_ne!(TrackRecord::parse(&line), Some(record("a,b", 1, false)));
    }

    #[test]
    fn test_from_track() {
        let track = Track::with_stats("song".to_string(), 5, true);
        assert_eq!(TrackRecord::from(&track), record("song", 5, true));
    }
}
