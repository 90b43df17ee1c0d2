//! # Storage Layer
//!
//! The whole lyrics book is one ordered collection of [`Song`]s. A store only
//! knows how to read that collection in full and write it back in full; every
//! mutation in the command layer is load, modify, save.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single pretty-printed JSON file
//!   (`~/.lyricbook.json` by default). Writes go through a temp file and a
//!   rename so readers never observe a half-written store.
//! - [`memory::InMemoryStore`]: in-memory storage for tests.
//!
//! Stores do not enforce the `(artist, song)` uniqueness rule. They persist
//! whatever they are given; the `add` and `fetch` commands keep duplicates out.

use crate::error::Result;
use crate::model::Song;

pub mod fs;
pub mod memory;

pub trait SongStore {
    /// Read every song. A store that was never written is empty, not an error.
    fn load(&self) -> Result<Vec<Song>>;

    /// Replace the persisted collection with `songs`.
    fn save(&mut self, songs: &[Song]) -> Result<()>;
}
