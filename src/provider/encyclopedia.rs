//! Encyclopedia client: full-text search, page fetch, Plot extraction.
//!
//! Talks to a MediaWiki API. Page lookups resolve to a typed
//! [`PageLookup`] instead of error-driven control flow: disambiguation and
//! missing pages are ordinary variants that the caller branches on.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::ProviderError;

const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";
const SEARCH_LIMIT: u32 = 10;

/// Words kept from the Plot section when building a clue.
pub const CLUE_WORD_LIMIT: usize = 150;

/// Leading characters of the page text scanned for the movie heuristic.
const LEAD_WINDOW: usize = 500;

/// A fetched encyclopedia page: resolved title plus plaintext body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub text: String,
}

/// Typed outcome of a page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLookup {
    Found(Page),
    /// The title resolves to a disambiguation page.
    Ambiguous,
    /// No page exists under this title.
    NotFound,
}

/// HTTP client for the encyclopedia API.
pub struct EncyclopediaClient {
    client: reqwest::blocking::Client,
    api_url: String,
}

impl EncyclopediaClient {
    /// Create a client against the default encyclopedia endpoint.
    ///
    /// # Errors
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Create a client against a custom API URL (used by tests).
    ///
    /// # Errors
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Full-text search returning candidate page titles, best match first.
    ///
    /// # Errors
    /// Returns [`ProviderError`] on network failure, a non-success status,
    /// or an undecodable response body.
    pub fn search(&self, query: &str) -> Result<Vec<String>, ProviderError> {
        debug!("encyclopedia search: query='{query}'");

        let limit = SEARCH_LIMIT.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
            });
        }

        let body: SearchResponse = response
            .json()
            .map_err(|e| ProviderError::Parse(format!("failed to parse search response: {e}")))?;

        Ok(body
            .query
            .search
            .into_iter()
            .map(|hit| hit.title)
            .collect())
    }

    /// Fetch a page as a plaintext extract.
    ///
    /// Disambiguation pages (flagged via `pageprops`) and missing pages map
    /// to their own [`PageLookup`] variants rather than errors.
    ///
    /// # Errors
    /// Returns [`ProviderError`] on network failure, a non-success status,
    /// or an undecodable response body.
    pub fn page(&self, title: &str) -> Result<PageLookup, ProviderError> {
        debug!("encyclopedia page fetch: title='{title}'");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("prop", "extracts|pageprops"),
                ("ppprop", "disambiguation"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
            });
        }

        let body: PagesResponse = response
            .json()
            .map_err(|e| ProviderError::Parse(format!("failed to parse page response: {e}")))?;

        Ok(resolve_page(body))
    }

    /// Find a movie page for `title` and produce a truncated plot clue.
    ///
    /// Walks the search candidates in order. A candidate whose resolved
    /// title mentions "film" or "movie" decides the lookup outright: its
    /// Plot section becomes the clue, or the whole lookup yields nothing.
    /// Otherwise a candidate whose lead text mentions "film" contributes its
    /// Plot section if it has one. Ambiguous and missing pages are skipped.
    ///
    /// # Errors
    /// Returns [`ProviderError`] if any underlying request fails.
    pub fn plot_clue(&self, title: &str) -> Result<Option<String>, ProviderError> {
        let candidates = self.search(title)?;
        if candidates.is_empty() {
            debug!("no search results for '{title}'");
            return Ok(None);
        }

        for candidate in candidates {
            let page = match self.page(&candidate)? {
                PageLookup::Found(page) => page,
                PageLookup::Ambiguous | PageLookup::NotFound => {
                    debug!("skipping candidate '{candidate}': ambiguous or missing");
                    continue;
                }
            };

            let page_title = page.title.to_lowercase();
            if page_title.contains("film") || page_title.contains("movie") {
                return Ok(plot_section(&page.text)
                    .map(|plot| truncate_words(&plot, CLUE_WORD_LIMIT)));
            }

            let lead: String = page
                .text
                .chars()
                .take(LEAD_WINDOW)
                .collect::<String>()
                .to_lowercase();
            if lead.contains("film") {
                if let Some(plot) = plot_section(&page.text) {
                    return Ok(Some(truncate_words(&plot, CLUE_WORD_LIMIT)));
                }
            }
        }

        Ok(None)
    }
}

fn resolve_page(body: PagesResponse) -> PageLookup {
    let Some(entry) = body.query.pages.into_iter().next() else {
        return PageLookup::NotFound;
    };

    if entry.missing {
        return PageLookup::NotFound;
    }

    if entry
        .pageprops
        .is_some_and(|props| props.disambiguation.is_some())
    {
        return PageLookup::Ambiguous;
    }

    PageLookup::Found(Page {
        title: entry.title,
        text: entry.extract.unwrap_or_default(),
    })
}

/// Extract the Plot section from a plaintext page extract.
///
/// MediaWiki plaintext extracts mark headings as `== Plot ==`. The section
/// runs until the next heading of the same or higher level; deeper
/// sub-headings stay part of the section.
pub fn plot_section(text: &str) -> Option<String> {
    let mut section = String::new();
    let mut plot_level: Option<usize> = None;

    for line in text.lines() {
        match (heading(line), plot_level) {
            (Some((level, name)), None) => {
                if name == "Plot" {
                    plot_level = Some(level);
                }
            }
            (Some((level, _)), Some(open_level)) if level <= open_level => break,
            (_, Some(_)) => {
                section.push_str(line);
                section.push('\n');
            }
            _ => {}
        }
    }

    plot_level?;
    let section = section.trim().to_string();
    if section.is_empty() { None } else { Some(section) }
}

/// Parse a plaintext heading line into (level, name).
fn heading(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim();
    if !trimmed.starts_with("==") || !trimmed.ends_with("==") || trimmed.len() < 5 {
        return None;
    }

    let level = trimmed.chars().take_while(|&c| c == '=').count();
    let name = trimmed.trim_matches('=').trim();
    if name.is_empty() {
        return None;
    }

    Some((level, name))
}

/// Keep the first `limit` whitespace-delimited words and append an ellipsis.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().take(limit).collect();
    format!("{}...", words.join(" "))
}

// ============================================================================
// Encyclopedia API response types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: SearchQuery,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PagesResponse {
    query: PagesQuery,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: Vec<PageEntry>,
}

#[derive(Debug, Deserialize)]
struct PageEntry {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    pageprops: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    #[serde(default)]
    disambiguation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTRACT: &str = "Inception is a 2010 science fiction action film \
written and directed by Christopher Nolan.\n\
== Plot ==\n\
Dom Cobb and Arthur are extractors who perform corporate espionage.\n\
=== The heist ===\n\
They infiltrate targets' subconscious minds to steal information.\n\
== Cast ==\n\
Leonardo DiCaprio as Dom Cobb.\n";

    #[test]
    fn plot_section_runs_until_next_top_heading() {
        let plot = plot_section(EXTRACT).unwrap();
        assert!(plot.starts_with("Dom Cobb and Arthur"));
        // Deeper sub-heading content is part of the section
        assert!(plot.contains("subconscious minds"));
        // The next level-2 section is not
        assert!(!plot.contains("DiCaprio"));
    }

    #[test]
    fn plot_section_absent_when_no_heading() {
        let text = "A page about something else.\n== Reception ==\nPraised.\n";
        assert_eq!(plot_section(text), None);
    }

    #[test]
    fn plot_section_absent_when_empty() {
        let text = "Lead.\n== Plot ==\n== Cast ==\nSomeone.\n";
        assert_eq!(plot_section(text), None);
    }

    #[test]
    fn heading_parses_levels() {
        assert_eq!(heading("== Plot =="), Some((2, "Plot")));
        assert_eq!(heading("=== The heist ==="), Some((3, "The heist")));
        assert_eq!(heading("Plain text"), None);
        assert_eq!(heading("== =="), None);
    }

    #[test]
    fn truncate_keeps_word_limit_and_appends_marker() {
        let short = truncate_words("one two three", 150);
        assert_eq!(short, "one two three...");

        let long_text = vec!["word"; 200].join(" ");
        let truncated = truncate_words(&long_text, 150);
        assert_eq!(truncated.split_whitespace().count(), 150);
        assert!(truncated.ends_with("word..."));

        let exact = vec!["w"; 150].join(" ");
        assert_eq!(truncate_words(&exact, 150).split_whitespace().count(), 150);
    }

    #[test]
    fn search_response_decodes() {
        let json = r#"{
            "batchcomplete": true,
            "query": {
                "search": [
                    {"pageid": 1, "title": "Inception"},
                    {"pageid": 2, "title": "Inception (soundtrack)"}
                ]
            }
        }"#;

        let body: SearchResponse = serde_json::from_str(json).unwrap();
        let titles: Vec<String> = body.query.search.into_iter().map(|h| h.title).collect();
        assert_eq!(titles, vec!["Inception", "Inception (soundtrack)"]);
    }

    #[test]
    fn found_page_decodes() {
        let json = r#"{
            "query": {
                "pages": [
                    {"pageid": 18955875, "ns": 0, "title": "Inception", "extract": "A film.\n== Plot ==\nDreams.\n"}
                ]
            }
        }"#;

        let body: PagesResponse = serde_json::from_str(json).unwrap();
        let PageLookup::Found(page) = resolve_page(body) else {
            panic!("expected Found");
        };
        assert_eq!(page.title, "Inception");
        assert!(page.text.contains("Dreams"));
    }

    #[test]
    fn disambiguation_page_resolves_to_ambiguous() {
        let json = r#"{
            "query": {
                "pages": [
                    {"pageid": 1, "ns": 0, "title": "Mercury",
                     "extract": "Mercury may refer to:",
                     "pageprops": {"disambiguation": ""}}
                ]
            }
        }"#;

        let body: PagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resolve_page(body), PageLookup::Ambiguous);
    }

    #[test]
    fn missing_page_resolves_to_not_found() {
        let json = r#"{
            "query": {
                "pages": [
                    {"ns": 0, "title": "No Such Movie Page", "missing": true}
                ]
            }
        }"#;

        let body: PagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resolve_page(body), PageLookup::NotFound);
    }
}
