use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Article;

const API_URL: &str = "https://en.wikipedia.org/w/api.php";
const ARTICLE_BASE_URL: &str = "https://en.wikipedia.org/wiki/";
// The Wikipedia API rejects requests without an identifying User-Agent
const USER_AGENT: &str = "WikiQuizServer/0.1 (educational project; reqwest)";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const MIN_CONTENT_CHARS: usize = 100;
const MAX_CONTENT_CHARS: usize = 3000;

static WIKI_ARTICLE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[a-z]{2,3}\.wikipedia\.org/wiki/.+")
        .expect("WIKI_ARTICLE_URL is a valid regex pattern")
});

static CITATION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\d+\]").expect("CITATION_MARKER is a valid regex pattern")
});

/// Resolves a topic or article URL to article text.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch(&self, topic_or_url: &str) -> AppResult<Article>;
}

type OpenSearchResponse = (String, Vec<String>, Vec<String>, Vec<String>);

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    pages: HashMap<String, ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    title: Option<String>,
    extract: Option<String>,
}

pub struct WikipediaClient {
    client: Client,
}

impl WikipediaClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// Best-match title for a search topic, if any.
    async fn search_topic(&self, topic: &str) -> AppResult<Option<String>> {
        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("action", "opensearch"),
                ("search", topic),
                ("limit", "1"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let results: OpenSearchResponse = response.json().await?;
        Ok(results.1.into_iter().next())
    }

    /// Plain-text extract for an exact title. `Ok(None)` means the
    /// article does not exist or its content is too short to quiz on.
    async fn fetch_extract(&self, title: &str) -> AppResult<Option<(String, String)>> {
        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("action", "query"),
                ("titles", title),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: ExtractResponse = response.json().await?;
        let pages = match data.query {
            Some(query) => query.pages,
            None => return Ok(None),
        };

        // A single title was requested, so pages holds one entry; the
        // API reports a miss as page id "-1".
        let Some((page_id, page)) = pages.into_iter().next() else {
            return Ok(None);
        };
        if page_id == "-1" {
            return Ok(None);
        }

        let content = page.extract.unwrap_or_default();
        if content.chars().count() < MIN_CONTENT_CHARS {
            log::debug!(
                "extract for '{title}' too short to quiz on ({} chars)",
                content.chars().count()
            );
            return Ok(None);
        }

        let title = page.title.unwrap_or_else(|| title.to_string());
        Ok(Some((title, content)))
    }
}

#[async_trait]
impl ArticleSource for WikipediaClient {
    async fn fetch(&self, topic_or_url: &str) -> AppResult<Article> {
        let input = topic_or_url.trim();

        let resolved = if let Some(title) = article_title_from_url(input) {
            title
        } else {
            // A failed search falls back to the raw topic; the extract
            // lookup decides whether anything exists under that name.
            match self.search_topic(input).await {
                Ok(Some(title)) => title,
                Ok(None) => input.to_string(),
                Err(err) => {
                    log::warn!("Wikipedia search for '{input}' failed: {err}");
                    input.to_string()
                }
            }
        };
        log::info!("Fetching Wikipedia content for '{resolved}'");

        let (title, content) = self.fetch_extract(&resolved).await?.ok_or_else(|| {
            AppError::SourceNotFound(format!("no Wikipedia article found for '{input}'"))
        })?;

        let content = truncate_content(&clean_extract(&content));
        let source_url = format!("{ARTICLE_BASE_URL}{}", title.replace(' ', "_"));

        Ok(Article {
            title,
            content,
            source_url,
        })
    }
}

/// Title taken from a Wikipedia article URL, or None for plain topics.
/// Underscores become spaces; section fragments and query strings are
/// dropped. Titles containing '/' keep their full path.
fn article_title_from_url(input: &str) -> Option<String> {
    if !WIKI_ARTICLE_URL.is_match(input) {
        return None;
    }
    let (_, slug) = input.split_once("/wiki/")?;
    let slug = slug
        .split(|c| c == '#' || c == '?')
        .next()
        .unwrap_or(slug);
    if slug.is_empty() {
        return None;
    }
    Some(slug.replace('_', " "))
}

/// Strip citation markers like `[3]` left in plain-text extracts.
fn clean_extract(text: &str) -> String {
    CITATION_MARKER.replace_all(text, "").into_owned()
}

fn truncate_content(content: &str) -> String {
    match content.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((byte_index, _)) => format!("{}...", &content[..byte_index]),
        None => content.to_string(),
    }
}
