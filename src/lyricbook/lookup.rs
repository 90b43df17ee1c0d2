//! Lookups and removals over an in-memory song collection.
//!
//! Every function here works on a slice already loaded from a store and never
//! touches storage itself. Keys are `(artist, song)` compared case-insensitively.

use crate::model::Song;

pub fn exists(songs: &[Song], artist: &str, song: &str) -> bool {
    find(songs, artist, song).is_some()
}

/// First match in load order. Later duplicates, if any made it into the
/// store, are unreachable through this function.
pub fn find<'a>(songs: &'a [Song], artist: &str, song: &str) -> Option<&'a Song> {
    songs.iter().find(|s| s.matches(artist, song))
}

/// Songs whose lyrics contain `term`, ignoring case. An empty term matches
/// every song.
pub fn search<'a>(songs: &'a [Song], term: &str) -> Vec<&'a Song> {
    let term_lower = term.to_lowercase();
    songs
        .iter()
        .filter(|s| s.lyrics.to_lowercase().contains(&term_lower))
        .collect()
}

/// Returns the collection without any song keyed by `artist`/`song`, and
/// whether anything was dropped. All matches go, not just the first.
pub fn remove(songs: Vec<Song>, artist: &str, song: &str) -> (Vec<Song>, bool) {
    let before = songs.len();
    let kept: Vec<Song> = songs
        .into_iter()
        .filter(|s| !s.matches(artist, song))
        .collect();
    let removed = kept.len() != before;
    (kept, removed)
}
