use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LyricbookError, Result};
use crate::lookup;
use crate::model::Song;
use crate::provider::{fetch_english_lyrics, LyricsProvider};
use crate::store::SongStore;
use tracing::{info, warn};

/// Fetches lyrics from `provider` and stores them.
///
/// Not-found and non-English results are reported as warnings and leave the
/// store untouched. Missing credentials and provider failures are errors; the
/// credential is checked before the store is read.
pub fn run<S: SongStore, P: LyricsProvider + ?Sized>(
    store: &mut S,
    provider: &P,
    artist: &str,
    song: &str,
) -> Result<CmdResult> {
    provider.check_credential()?;
    // Validate the key before spending a network call on it
    let placeholder = Song::new(artist, song, "")?;
    let mut songs = store.load()?;

    if lookup::exists(&songs, artist, song) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Song already exists: {}",
            placeholder.label()
        ))));
    }

    let lyrics = match fetch_english_lyrics(provider, artist, song) {
        Ok(lyrics) => lyrics,
        Err(e @ (LyricbookError::NonEnglish { .. } | LyricbookError::LyricsNotFound { .. })) => {
            warn!(artist, song, "{}", e);
            return Ok(CmdResult::default().with_message(CmdMessage::warning(e.to_string())));
        }
        Err(e) => return Err(e),
    };

    let entry = Song { lyrics, ..placeholder };
    songs.push(entry.clone());
    store.save(&songs)?;
    info!(artist, song, "fetched song");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Fetched: {}", entry.label())))
        .with_affected_songs(vec![entry]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::ProviderConfig;
    use crate::provider::fake::FakeProvider;
    use crate::provider::GeniusProvider;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn stores_fetched_lyrics() {
        let mut store = InMemoryStore::new();
        let provider = FakeProvider::lyrics("Hello from the other side");

        let result = run(&mut store, &provider, "Adele", "Hello").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Fetched: Adele - Hello");

        let songs = store.load().unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].lyrics, "Hello from the other side");
    }

    #[test]
    fn existing_song_skips_the_provider() {
        let mut store = StoreFixture::new().with_song("Adele", "Hello", "x").store;
        let provider = FakeProvider::lyrics("Hello from the other side");

        let result = run(&mut store, &provider, "adele", "hello").unwrap();
        assert!(result.messages[0].content.contains("already exists"));
        assert_eq!(provider.calls(), 0);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn non_english_lyrics_are_not_saved() {
        let mut store = InMemoryStore::new();
        let provider = FakeProvider::lyrics("Привет, как дела?");

        let result = run(&mut store, &provider, "Artist", "Song").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("non-English"));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn empty_lyrics_are_treated_as_non_english() {
        let mut store = InMemoryStore::new();
        let provider = FakeProvider::lyrics("");

        let result = run(&mut store, &provider, "Artist", "Song").unwrap();
        assert!(result.messages[0].content.contains("non-English"));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn not_found_is_a_warning() {
        let mut store = InMemoryStore::new();
        let provider = FakeProvider::not_found();

        let result = run(&mut store, &provider, "Adele", "Nope").unwrap();
        assert_eq!(result.messages[0].content, "Lyrics not found: Adele - Nope");
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn provider_failure_propagates() {
        let mut store = InMemoryStore::new();
        let provider = FakeProvider::failing("HTTP 500");

        match run(&mut store, &provider, "Adele", "Hello") {
            Err(LyricbookError::Provider(msg)) => assert_eq!(msg, "HTTP 500"),
            other => panic!("Expected Provider error, got {:?}", other),
        }
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn missing_credential_propagates() {
        let mut store = InMemoryStore::new();
        let provider = FakeProvider::no_credential();

        assert!(matches!(
            run(&mut store, &provider, "Adele", "Hello"),
            Err(LyricbookError::MissingCredential(_))
        ));
    }

    #[test]
    fn missing_credential_wins_over_existing_song() {
        let mut store = StoreFixture::new().with_song("Adele", "Hello", "x").store;
        let provider = FakeProvider::no_credential();

        assert!(matches!(
            run(&mut store, &provider, "Adele", "Hello"),
            Err(LyricbookError::MissingCredential("GENIUS_ACCESS_TOKEN"))
        ));
        assert_eq!(provider.calls(), 0);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn genius_without_token_fails_for_existing_song() {
        let mut store = StoreFixture::new().with_song("Adele", "Hello", "x").store;
        let provider = GeniusProvider::new(ProviderConfig::default()).unwrap();

        assert!(matches!(
            run(&mut store, &provider, "Adele", "Hello"),
            Err(LyricbookError::MissingCredential(_))
        ));
    }

    #[test]
    fn empty_song_is_rejected_before_fetching() {
        let mut store = InMemoryStore::new();
        let provider = FakeProvider::lyrics("whatever");

        assert!(run(&mut store, &provider, "Adele", " ").is_err());
        assert_eq!(provider.calls(), 0);
    }
}
