use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup;
use crate::model::Song;
use crate::store::SongStore;
use tracing::info;

pub fn run<S: SongStore>(
    store: &mut S,
    artist: &str,
    song: &str,
    lyrics: &str,
) -> Result<CmdResult> {
    let entry = Song::new(artist, song, lyrics)?;
    let mut songs = store.load()?;

    if lookup::exists(&songs, artist, song) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Song already exists: {}",
            entry.label()
        ))));
    }

    songs.push(entry.clone());
    store.save(&songs)?;
    info!(artist, song, "added song");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Added: {}", entry.label())))
        .with_affected_songs(vec![entry]))
}
