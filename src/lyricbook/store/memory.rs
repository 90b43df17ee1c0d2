use super::SongStore;
use crate::error::Result;
use crate::model::Song;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    songs: Vec<Song>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_songs(songs: Vec<Song>) -> Self {
        Self { songs, saves: 0 }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SongStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Song>> {
        Ok(self.songs.clone())
    }

    fn save(&mut self, songs: &[Song]) -> Result<()> {
        self.songs = songs.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_song(mut self, artist: &str, song: &str, lyrics: &str) -> Self {
            let mut songs = self.store.songs;
            songs.push(Song::new(artist, song, lyrics).unwrap());
            self.store = InMemoryStore::with_songs(songs);
            self
        }

        pub fn with_songs(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_song(
                    &format!("Artist {}", i + 1),
                    &format!("Song {}", i + 1),
                    &format!("Lyrics for song {}", i + 1),
                );
            }
            self
        }
    }
}
