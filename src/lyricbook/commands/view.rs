use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup;
use crate::store::SongStore;

pub fn run<S: SongStore>(store: &S, artist: &str, song: &str) -> Result<CmdResult> {
    let songs = store.load()?;
    match lookup::find(&songs, artist, song) {
        Some(found) => Ok(CmdResult::default().with_listed_songs(vec![found.clone()])),
        None => Ok(CmdResult::default().with_message(CmdMessage::warning("Song not found."))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_song_regardless_of_case() {
        let store = StoreFixture::new()
            .with_song("Adele", "Hello", "Hello, it's me")
            .store;

        let result = run(&store, "adele", "HELLO").unwrap();
        assert_eq!(result.listed_songs.len(), 1);
        assert_eq!(result.listed_songs[0].artist, "Adele");
        assert_eq!(result.listed_songs[0].lyrics, "Hello, it's me");
    }

    #[test]
    fn missing_song_is_a_warning() {
        let store = StoreFixture::new().with_songs(2).store;

        let result = run(&store, "Adele", "Hello").unwrap();
        assert!(result.listed_songs.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Song not found.");
    }
}
