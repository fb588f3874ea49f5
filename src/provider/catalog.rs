//! Top-movies catalog client.
//!
//! Queries a keyless IMDb-mirror JSON API for the highest-rated movie chart
//! and exposes it as a plain list of titles.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::ProviderError;

const DEFAULT_BASE_URL: &str = "https://api.imdbapi.dev";
const CHART_PAGE_SIZE: u32 = 50;

/// HTTP client for the top-movies chart.
pub struct CatalogClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the default catalog endpoint.
    ///
    /// # Errors
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (used by tests).
    ///
    /// # Errors
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the top-rated movie chart as a list of titles.
    ///
    /// # Errors
    /// Returns [`ProviderError`] on network failure, a non-success status,
    /// or an undecodable response body.
    pub fn top_titles(&self) -> Result<Vec<String>, ProviderError> {
        let url = format!("{}/titles", self.base_url);

        debug!("catalog chart fetch: {url}");

        let page_size = CHART_PAGE_SIZE.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("types", "MOVIE"),
                ("sortBy", "SORT_BY_USER_RATING"),
                ("sortOrder", "DESC"),
                ("pageSize", page_size.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
            });
        }

        let chart: ChartResponse = response
            .json()
            .map_err(|e| ProviderError::Parse(format!("failed to parse chart response: {e}")))?;

        Ok(chart.titles.into_iter().map(|t| t.primary_title).collect())
    }
}

// ============================================================================
// Catalog API response types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct ChartResponse {
    #[serde(default)]
    titles: Vec<ChartEntry>,
}

#[derive(Debug, Deserialize)]
struct ChartEntry {
    #[serde(rename = "primaryTitle")]
    primary_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_response_decodes_titles() {
        let json = r#"{
            "titles": [
                {"id": "tt0111161", "primaryTitle": "The Shawshank Redemption", "startYear": 1994},
                {"id": "tt0068646", "primaryTitle": "The Godfather", "startYear": 1972}
            ],
            "nextPageToken": "abc"
        }"#;

        let chart: ChartResponse = serde_json::from_str(json).unwrap();
        let titles: Vec<String> = chart.titles.into_iter().map(|t| t.primary_title).collect();
        assert_eq!(
            titles,
            vec!["The Shawshank Redemption", "The Godfather"]
        );
    }

    #[test]
    fn chart_response_tolerates_missing_title_list() {
        let chart: ChartResponse = serde_json::from_str("{}").unwrap();
        assert!(chart.titles.is_empty());
    }
}
