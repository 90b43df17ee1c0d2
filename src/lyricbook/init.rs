use crate::api::{LyricbookApi, LyricbookPaths};
use crate::config::LyricbookConfig;
use crate::error::{LyricbookError, Result};
use crate::provider::GeniusProvider;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};
use tracing::debug;

const STORE_FILENAME: &str = ".lyricbook.json";

pub struct LyricbookContext {
    pub api: LyricbookApi<FileStore, GeniusProvider>,
}

/// `~/.lyricbook.json`
pub fn default_store_file() -> Result<PathBuf> {
    let base = BaseDirs::new()
        .ok_or_else(|| LyricbookError::Config("Could not determine home directory".into()))?;
    Ok(base.home_dir().join(STORE_FILENAME))
}

pub fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "lyricbook", "lyricbook")
        .ok_or_else(|| LyricbookError::Config("Could not determine config dir".into()))?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Wires config, store and provider together.
///
/// Precedence for the store location: `store_override` (the `--file` flag),
/// then `LYRICBOOK_FILE`, then `store_file` in config.json, then
/// `~/.lyricbook.json`.
pub fn initialize(store_override: Option<&Path>) -> Result<LyricbookContext> {
    let config_dir = config_dir()?;
    let config = LyricbookConfig::load(&config_dir)?.with_env()?;

    let store_file = match store_override {
        Some(path) => path.to_path_buf(),
        None => match &config.store_file {
            Some(path) => path.clone(),
            None => default_store_file()?,
        },
    };
    debug!(store = %store_file.display(), "initialized lyricbook");

    let paths = LyricbookPaths {
        store_file: store_file.clone(),
        config_file: LyricbookConfig::config_path(&config_dir),
    };
    let store = FileStore::new(store_file);
    let provider = GeniusProvider::new(config.provider.clone())?;
    let api = LyricbookApi::new(store, provider, config, paths);

    Ok(LyricbookContext { api })
}
