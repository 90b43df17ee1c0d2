use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup;
use crate::store::SongStore;

pub fn run<S: SongStore>(store: &S, term: &str) -> Result<CmdResult> {
    let songs = store.load()?;
    let matches: Vec<_> = lookup::search(&songs, term).into_iter().cloned().collect();

    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No matches found.")));
    }
    Ok(CmdResult::default().with_listed_songs(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_song("Queen", "Love of My Life", "Love of my life")
            .with_song("Adele", "Hello", "Hello, it's me")
            .with_song("Beatles", "All You Need Is Love", "ALL YOU NEED IS LOVE")
            .store
    }

    #[test]
    fn matches_lyrics_ignoring_case() {
        let result = run(&store(), "love").unwrap();
        let artists: Vec<_> = result.listed_songs.iter().map(|s| s.artist.as_str()).collect();
        assert_eq!(artists, vec!["Queen", "Beatles"]);
    }

    #[test]
    fn empty_term_returns_everything() {
        assert_eq!(run(&store(), "").unwrap().listed_songs.len(), 3);
    }

    #[test]
    fn does_not_search_titles() {
        let result = run(&store(), "Beatles").unwrap();
        assert!(result.listed_songs.is_empty());
        assert_eq!(result.messages[0].content, "No matches found.");
    }
}
