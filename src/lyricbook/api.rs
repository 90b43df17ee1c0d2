//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! lyricbook operation, whatever the UI.
//!
//! The facade dispatches to `commands::*` and hands back `Result<CmdResult>`.
//! It does no business logic, no printing and no formatting.
//!
//! `LyricbookApi<S, P>` is generic over both the store and the lyrics
//! provider, so the whole stack can be exercised with `InMemoryStore` and a
//! fake provider without touching the filesystem or the network.

use crate::commands;
use crate::config::LyricbookConfig;
use crate::error::Result;
use crate::provider::LyricsProvider;
use crate::store::SongStore;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LyricbookPaths {
    pub store_file: PathBuf,
    pub config_file: PathBuf,
}

pub struct LyricbookApi<S: SongStore, P: LyricsProvider> {
    store: S,
    provider: P,
    config: LyricbookConfig,
    paths: LyricbookPaths,
}

impl<S: SongStore, P: LyricsProvider> LyricbookApi<S, P> {
    pub fn new(store: S, provider: P, config: LyricbookConfig, paths: LyricbookPaths) -> Self {
        Self {
            store,
            provider,
            config,
            paths,
        }
    }

    pub fn add_song(&mut self, artist: &str, song: &str, lyrics: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, artist, song, lyrics)
    }

    pub fn fetch_song(&mut self, artist: &str, song: &str) -> Result<CmdResult> {
        commands::fetch::run(&mut self.store, &self.provider, artist, song)
    }

    pub fn list_songs(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_song(&self, artist: &str, song: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, artist, song)
    }

    pub fn search_songs(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn remove_song(&mut self, artist: &str, song: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, artist, song)
    }

    pub fn config(&self) -> CmdResult {
        commands::config::run(
            &self.config,
            &self.paths.store_file,
            &self.paths.config_file,
        )
    }

    pub fn paths(&self) -> &LyricbookPaths {
        &self.paths
    }
}

pub use commands::{CmdMessage, CmdResult, ConfigReport, MessageLevel};
