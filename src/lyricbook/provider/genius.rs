use super::LyricsProvider;
use crate::config::{EnvVars, ProviderConfig};
use crate::error::{LyricbookError, Result};
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Title patterns that mark a hit as something other than a song.
const NON_SONG_PATTERNS: &[&str] = &[
    r"track\s?list",
    r"album art(work)?",
    r"liner notes",
    r"booklet",
    r"credits",
    r"interview",
    r"skit",
    r"instrumental",
    r"setlist",
];

/// A bracketed annotation closed on the same line, e.g. `[Verse 1: Adele]`.
const SECTION_HEADER_PATTERN: &str = r"\[[^\]\n]*\]";

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "type")]
    kind: String,
    result: HitResult,
}

#[derive(Debug, Deserialize)]
struct HitResult {
    title: String,
    url: String,
    primary_artist: Option<HitArtist>,
}

#[derive(Debug, Deserialize)]
struct HitArtist {
    name: String,
}

/// Lyrics from genius.com: API search for the song, then a scrape of its page.
pub struct GeniusProvider {
    config: ProviderConfig,
    client: Client,
    non_songs: Regex,
    section_headers: Regex,
}

impl GeniusProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let user_agent = format!("lyricbook/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent)
            .build()?;
        let non_songs = Regex::new(&NON_SONG_PATTERNS.join("|"))
            .map_err(|e| LyricbookError::Config(e.to_string()))?;
        let section_headers = Regex::new(SECTION_HEADER_PATTERN)
            .map_err(|e| LyricbookError::Config(e.to_string()))?;

        Ok(Self {
            config,
            client,
            non_songs,
            section_headers,
        })
    }

    fn search(&self, token: &str, artist: &str, song: &str) -> Result<Vec<SearchHit>> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let query = format!("{} {}", song, artist);
        info!(%query, "searching Genius");

        let envelope: SearchEnvelope = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[("q", query.as_str())])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(envelope.response.hits)
    }

    fn is_acceptable(&self, hit: &SearchHit) -> bool {
        if hit.kind != "song" {
            return false;
        }
        let title = hit.result.title.to_lowercase();
        if self
            .config
            .excluded_terms
            .iter()
            .any(|term| title.contains(&term.to_lowercase()))
        {
            debug!(title = %hit.result.title, "skipping excluded hit");
            return false;
        }
        if self.config.skip_non_songs && self.non_songs.is_match(&title) {
            debug!(title = %hit.result.title, "skipping non-song hit");
            return false;
        }
        true
    }

    /// Prefers a hit by the requested artist, otherwise the first acceptable one.
    fn pick_hit<'a>(&self, hits: &'a [SearchHit], artist: &str) -> Option<&'a SearchHit> {
        let artist_lower = artist.to_lowercase();
        let mut acceptable = hits.iter().filter(|hit| self.is_acceptable(hit)).peekable();
        let first = *acceptable.peek()?;
        let by_artist = acceptable.find(|hit| {
            hit.result
                .primary_artist
                .as_ref()
                .is_some_and(|a| a.name.to_lowercase() == artist_lower)
        });
        Some(by_artist.unwrap_or(first))
    }

    fn download_page(&self, url: &str) -> Result<String> {
        debug!(%url, "downloading lyrics page");
        Ok(self.client.get(url).send()?.error_for_status()?.text()?)
    }
}

impl GeniusProvider {
    fn token(&self) -> Result<&str> {
        self.config
            .access_token
            .as_deref()
            .ok_or(LyricbookError::MissingCredential(EnvVars::ACCESS_TOKEN))
    }
}

impl LyricsProvider for GeniusProvider {
    fn check_credential(&self) -> Result<()> {
        self.token().map(|_| ())
    }

    fn fetch_lyrics(&self, artist: &str, song: &str) -> Result<String> {
        let token = self.token()?;

        let not_found = || LyricbookError::LyricsNotFound {
            artist: artist.to_string(),
            song: song.to_string(),
        };

        let hits = self.search(token, artist, song)?;
        let hit = self.pick_hit(&hits, artist).ok_or_else(not_found)?;
        info!(title = %hit.result.title, "matched Genius song");

        let page = self.download_page(&hit.result.url)?;
        let mut lyrics = extract_lyrics(&page)?;
        if self.config.remove_section_headers {
            lyrics = strip_section_headers(&lyrics, &self.section_headers);
        }
        if lyrics.trim().is_empty() {
            warn!(url = %hit.result.url, "song page had no lyrics");
            return Err(not_found());
        }
        Ok(lyrics)
    }
}

/// Text of every lyrics container on a Genius song page, `<br>` as newlines.
fn extract_lyrics(page: &str) -> Result<String> {
    let document = Html::parse_document(page);
    let containers = Selector::parse(r#"div[data-lyrics-container="true"]"#)
        .map_err(|e| LyricbookError::Provider(e.to_string()))?;

    let mut out = String::new();
    for container in document.select(&containers) {
        if !out.is_empty() {
            out.push('\n');
        }
        push_text(container, &mut out);
    }
    Ok(out.trim().to_string())
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(el) = ElementRef::wrap(child) {
            if el.value().name() == "br" {
                out.push('\n');
            } else if el.value().attr("data-exclude-from-selection") != Some("true") {
                push_text(el, out);
            }
        }
    }
}

/// Drops `[Chorus]`-style annotations and the blank-line runs they leave.
/// A `[` without a closing `]` on its line is kept as text.
fn strip_section_headers(lyrics: &str, headers: &Regex) -> String {
    let mut out: Vec<&str> = Vec::new();
    let stripped = headers.replace_all(lyrics, "");
    for line in stripped.lines().map(str::trim_end) {
        if line.trim().is_empty() && out.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        out.push(if line.trim().is_empty() { "" } else { line });
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
