//! External content providers: quotes and mood songs.
//!
//! Both providers are opaque collaborators, not core logic. Their failures
//! are never fatal: the quote client falls back to a static default string
//! and the song client falls back to an empty list. Clients take a base
//! URL so tests can point them at a local mock server.

use crate::constants::{
    DEFAULT_QUOTE, MAX_SONG_RESULTS, QUOTE_API_BASE_URL, YOUTUBE_API_BASE_URL,
};
use crate::errors::ContentError;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Request timeout for both providers. Content is decoration; a slow
/// provider must not stall the session.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}

/// One quote as returned by the quote API.
#[derive(Debug, Deserialize)]
struct QuoteRow {
    /// Quote text
    q: String,
    /// Author
    a: String,
}

/// Client for the random-quote API.
pub struct QuoteClient {
    client: Client,
    base_url: String,
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteClient {
    /// Creates a client against the production API.
    pub fn new() -> Self {
        Self::with_base_url(QUOTE_API_BASE_URL)
    }

    /// Creates a client against an arbitrary base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.into(),
        }
    }

    /// Fetches a random quote, falling back to [`DEFAULT_QUOTE`] on any
    /// failure. Never errors.
    pub fn fetch_quote(&self) -> String {
        match self.try_fetch() {
            Ok(quote) => quote,
            Err(e) => {
                warn!("Quote fetch failed, using default: {}", e);
                DEFAULT_QUOTE.to_string()
            }
        }
    }

    fn try_fetch(&self) -> Result<String, ContentError> {
        let url = format!("{}/api/random", self.base_url);
        debug!("Fetching quote from {}", url);

        let rows: Vec<QuoteRow> = self.client.get(&url).send()?.error_for_status()?.json()?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| ContentError::InvalidResponse("empty quote list".to_string()))?;

        Ok(format!("{} — {}", row.q, row.a))
    }
}

/// One playable song suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub thumbnail_url: String,
    pub playback_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    default: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// Client for the video search API used for mood songs.
pub struct SongClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl SongClient {
    /// Creates a client against the production API.
    ///
    /// With no API key the client is inert: every search returns an empty
    /// list.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(YOUTUBE_API_BASE_URL, api_key)
    }

    /// Creates a client against an arbitrary base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Searches for songs matching a mood, in the given language.
    ///
    /// An empty list is a valid result, and is also what every failure
    /// mode degrades to. Never errors.
    pub fn fetch_songs(&self, mood: &str, language: &str) -> Vec<Song> {
        let Some(api_key) = &self.api_key else {
            debug!("No song API key configured, skipping song search");
            return Vec::new();
        };

        match self.try_fetch(api_key, mood, language) {
            Ok(songs) => songs,
            Err(e) => {
                warn!("Song search failed, returning no songs: {}", e);
                Vec::new()
            }
        }
    }

    fn try_fetch(
        &self,
        api_key: &str,
        mood: &str,
        language: &str,
    ) -> Result<Vec<Song>, ContentError> {
        let url = format!("{}/youtube/v3/search", self.base_url);
        let query = format!("{} songs in {}", mood, language);
        let max_results = MAX_SONG_RESULTS.to_string();
        debug!("Searching songs: {}", query);

        let response: SearchResponse = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query.as_str()),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("key", api_key),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response
            .items
            .into_iter()
            .map(|item| Song {
                title: item.snippet.title,
                thumbnail_url: item.snippet.thumbnails.default.url,
                playback_url: format!("https://www.youtube.com/watch?v={}", item.id.video_id),
            })
            .collect())
    }
}
