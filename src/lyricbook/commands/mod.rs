use crate::model::Song;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod fetch;
pub mod list;
pub mod remove;
pub mod search;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Effective settings, as reported by the `config` command.
#[derive(Debug, Clone)]
pub struct ConfigReport {
    pub store_file: PathBuf,
    pub config_file: PathBuf,
    pub has_token: bool,
    pub base_url: String,
    pub timeout_secs: u64,
    pub excluded_terms: Vec<String>,
    pub skip_non_songs: bool,
    pub remove_section_headers: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_songs: Vec<Song>,
    pub listed_songs: Vec<Song>,
    pub config: Option<ConfigReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_songs(mut self, songs: Vec<Song>) -> Self {
        self.affected_songs = songs;
        self
    }

    pub fn with_listed_songs(mut self, songs: Vec<Song>) -> Self {
        self.listed_songs = songs;
        self
    }

    pub fn with_config(mut self, config: ConfigReport) -> Self {
        self.config = Some(config);
        self
    }
}
