use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyricbookError {
    #[error("Invalid song: {0}")]
    InvalidSong(String),

    #[error("Missing credential: set {0} to enable fetching lyrics")]
    MissingCredential(&'static str),

    #[error("Lyrics not found: {artist} - {song}")]
    LyricsNotFound { artist: String, song: String },

    #[error("Skipped non-English lyrics: {artist} - {song}")]
    NonEnglish { artist: String, song: String },

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Store at {} is corrupt: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for LyricbookError {
    fn from(err: reqwest::Error) -> Self {
        LyricbookError::Provider(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LyricbookError>;
