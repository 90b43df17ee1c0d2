use crate::error::{LyricbookError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BASE_URL: &str = "https://api.genius.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variables read at startup.
pub struct EnvVars;

impl EnvVars {
    pub const ACCESS_TOKEN: &'static str = "GENIUS_ACCESS_TOKEN";
    pub const STORE_FILE: &'static str = "LYRICBOOK_FILE";
}

/// Settings for the lyrics provider.
///
/// The access token is never serialized; it only ever comes from the
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderConfig {
    #[serde(skip)]
    pub access_token: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Search hits whose title contains any of these are ignored
    #[serde(default = "default_excluded_terms")]
    pub excluded_terms: Vec<String>,

    /// Ignore hits that look like track lists, credits, interviews and the like
    #[serde(default = "default_true")]
    pub skip_non_songs: bool,

    /// Strip `[Chorus]`-style annotations from fetched lyrics
    #[serde(default = "default_true")]
    pub remove_section_headers: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_excluded_terms() -> Vec<String> {
    vec!["(Remix)".to_string(), "(Live)".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            excluded_terms: default_excluded_terms(),
            skip_non_songs: true,
            remove_section_headers: true,
        }
    }
}

impl ProviderConfig {
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Configuration for lyricbook, optionally stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LyricbookConfig {
    /// Overrides the default store location (`~/.lyricbook.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,

    #[serde(default)]
    pub provider: ProviderConfig,
}

impl LyricbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LyricbookError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            LyricbookError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    pub fn config_path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    /// Overlay values from the process environment.
    pub fn with_env(mut self) -> Result<Self> {
        if let Some(token) = env_string(EnvVars::ACCESS_TOKEN)? {
            self.provider.access_token = Some(token);
        }
        if let Some(file) = env_string(EnvVars::STORE_FILE)? {
            self.store_file = Some(PathBuf::from(file));
        }
        Ok(self)
    }
}

/// Reads a variable, treating unset and blank alike.
fn env_string(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(LyricbookError::Config(format!(
            "Environment variable {} contains invalid UTF-8",
            name
        ))),
    }
}
