use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SongStore;

pub fn run<S: SongStore>(store: &S) -> Result<CmdResult> {
    let songs = store.load()?;
    if songs.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No songs saved yet.")));
    }
    Ok(CmdResult::default().with_listed_songs(songs))
}
