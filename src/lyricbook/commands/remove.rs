use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup;
use crate::store::SongStore;
use tracing::info;

pub fn run<S: SongStore>(store: &mut S, artist: &str, song: &str) -> Result<CmdResult> {
    let songs = store.load()?;
    let (kept, removed) = lookup::remove(songs, artist, song);

    if !removed {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Song not found.")));
    }

    store.save(&kept)?;
    info!(artist, song, "removed song");
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Removed: {} - {}",
        artist, song
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, view};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_regardless_of_case() {
        let mut store = StoreFixture::new()
            .with_song("Adele", "Hello", "Hello, it's me")
            .store;

        let result = run(&mut store, "adele", "hello").unwrap();
        assert_eq!(result.messages[0].content, "Removed: adele - hello");

        let listed = list::run(&store).unwrap();
        assert_eq!(listed.messages[0].content, "No songs saved yet.");
    }

    #[test]
    fn view_after_remove_is_not_found() {
        let mut store = StoreFixture::new()
            .with_song("Adele", "Hello", "Hello, it's me")
            .with_songs(1)
            .store;
        run(&mut store, "Adele", "Hello").unwrap();

        let result = view::run(&store, "Adele", "Hello").unwrap();
        assert_eq!(result.messages[0].content, "Song not found.");
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn missing_song_does_not_write() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Adele", "Hello").unwrap();

        assert_eq!(result.messages[0].content, "Song not found.");
        assert_eq!(store.save_count(), 0);
    }
}
