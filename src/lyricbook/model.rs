use crate::error::{LyricbookError, Result};
use serde::{Deserialize, Serialize};

/// A single entry in the lyrics book.
///
/// Records are keyed by `(artist, song)` compared case-insensitively; there is
/// no other identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub artist: String,
    pub song: String,
    pub lyrics: String,
}

impl Song {
    pub fn new(
        artist: impl Into<String>,
        song: impl Into<String>,
        lyrics: impl Into<String>,
    ) -> Result<Self> {
        let artist = artist.into();
        let song = song.into();
        if artist.trim().is_empty() {
            return Err(LyricbookError::InvalidSong("artist cannot be empty".into()));
        }
        if song.trim().is_empty() {
            return Err(LyricbookError::InvalidSong("song cannot be empty".into()));
        }
        Ok(Self {
            artist,
            song,
            lyrics: lyrics.into(),
        })
    }

    /// True if this record is keyed by `artist`/`song`, ignoring case.
    pub fn matches(&self, artist: &str, song: &str) -> bool {
        self.artist.to_lowercase() == artist.to_lowercase()
            && self.song.to_lowercase() == song.to_lowercase()
    }

    /// `Artist - Song`, the way songs are named in listings.
    pub fn label(&self) -> String {
        format!("{} - {}", self.artist, self.song)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_artist() {
        let err = Song::new("  ", "Hello", "").unwrap_err();
        assert!(matches!(err, LyricbookError::InvalidSong(_)));
    }

    #[test]
    fn rejects_empty_song() {
        let err = Song::new("Adele", "", "").unwrap_err();
        assert!(matches!(err, LyricbookError::InvalidSong(_)));
    }

    #[test]
    fn allows_empty_lyrics() {
        let song = Song::new("Adele", "Hello", "").unwrap();
        assert!(song.lyrics.is_empty());
    }

    #[test]
    fn matches_ignores_case() {
        let song = Song::new("Adele", "Hello", "Hello, it's me").unwrap();
        assert!(song.matches("adele", "HELLO"));
        assert!(!song.matches("adele", "Someone Like You"));
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let song = Song::new("Adele", "Hello", "Hello, it's me").unwrap();
        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(json["artist"], "Adele");
        assert_eq!(json["song"], "Hello");
        assert_eq!(json["lyrics"], "Hello, it's me");
    }
}
