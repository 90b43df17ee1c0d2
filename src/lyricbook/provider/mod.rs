//! # Lyrics Providers
//!
//! A [`LyricsProvider`] turns an `(artist, song)` pair into lyrics text, or one
//! of the typed outcomes in [`LyricbookError`]:
//!
//! - `MissingCredential`: no access token is configured; nothing was sent
//! - `LyricsNotFound`: the provider had no acceptable match
//! - `Provider`: transport, status or parse failure, with the underlying message
//!
//! [`fetch_english_lyrics`] wraps any provider with the language heuristic and
//! adds the `NonEnglish` outcome. Callers must not persist lyrics in that case.

use crate::error::{LyricbookError, Result};
use tracing::debug;

pub mod genius;

pub use genius::GeniusProvider;

pub trait LyricsProvider {
    /// Fails with `MissingCredential` when the provider cannot be used at all.
    /// Callers run this before touching the store.
    fn check_credential(&self) -> Result<()> {
        Ok(())
    }

    fn fetch_lyrics(&self, artist: &str, song: &str) -> Result<String>;
}

/// Share of characters that are ASCII letters. Empty text scores 0.
///
/// Accented letters, digits, whitespace and punctuation all count against the
/// fraction.
pub fn latin_fraction(text: &str) -> f64 {
    let mut total = 0usize;
    let mut latin = 0usize;
    for c in text.chars() {
        total += 1;
        if c.is_ascii_alphabetic() {
            latin += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    latin as f64 / total as f64
}

/// Cheap stand-in for language detection: more than half of the characters
/// must be Latin letters.
pub fn is_probably_english(text: &str) -> bool {
    latin_fraction(text) > 0.5
}

pub fn fetch_english_lyrics<P: LyricsProvider + ?Sized>(
    provider: &P,
    artist: &str,
    song: &str,
) -> Result<String> {
    let lyrics = provider.fetch_lyrics(artist, song)?;
    let fraction = latin_fraction(&lyrics);
    debug!(artist, song, fraction, "classified fetched lyrics");
    if fraction <= 0.5 {
        return Err(LyricbookError::NonEnglish {
            artist: artist.to_string(),
            song: song.to_string(),
        });
    }
    Ok(lyrics)
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fake {
    use super::*;
    use std::cell::Cell;

    enum Outcome {
        Lyrics(String),
        NotFound,
        Failing(String),
        NoCredential,
    }

    /// Canned provider for tests. Counts how often it was asked.
    pub struct FakeProvider {
        outcome: Outcome,
        calls: Cell<usize>,
    }

    impl FakeProvider {
        fn with(outcome: Outcome) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
            }
        }

        pub fn lyrics(text: &str) -> Self {
            Self::with(Outcome::Lyrics(text.to_string()))
        }

        pub fn not_found() -> Self {
            Self::with(Outcome::NotFound)
        }

        pub fn failing(message: &str) -> Self {
            Self::with(Outcome::Failing(message.to_string()))
        }

        pub fn no_credential() -> Self {
            Self::with(Outcome::NoCredential)
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl LyricsProvider for FakeProvider {
        fn check_credential(&self) -> Result<()> {
            match self.outcome {
                Outcome::NoCredential => Err(LyricbookError::MissingCredential(
                    crate::config::EnvVars::ACCESS_TOKEN,
                )),
                _ => Ok(()),
            }
        }

        fn fetch_lyrics(&self, artist: &str, song: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            match &self.outcome {
                Outcome::Lyrics(text) => Ok(text.clone()),
                Outcome::NotFound => Err(LyricbookError::LyricsNotFound {
                    artist: artist.to_string(),
                    song: song.to_string(),
                }),
                Outcome::Failing(message) => Err(LyricbookError::Provider(message.clone())),
                Outcome::NoCredential => Err(LyricbookError::MissingCredential(
                    crate::config::EnvVars::ACCESS_TOKEN,
                )),
            }
        }
    }
}
