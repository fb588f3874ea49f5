//! Content providers: the movie catalog and the encyclopedia.
//!
//! The game core sees content through the [`ContentProvider`] trait and a
//! pair of `Option`-returning operations: `None` means "no usable data"
//! and is always a retryable skip, never a fatal error. The HTTP layer
//! underneath reports typed [`ProviderError`]s; the live provider logs them
//! and converts every failure to `None`.

mod catalog;
mod encyclopedia;

pub use catalog::CatalogClient;
pub use encyclopedia::{CLUE_WORD_LIMIT, EncyclopediaClient, Page, PageLookup};

use thiserror::Error;
use tracing::warn;

/// Errors raised inside the HTTP provider layer.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed (network, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status.
    #[error("API error: status {status}")]
    Api { status: u16 },

    /// The response body did not decode.
    #[error("{0}")]
    Parse(String),
}

/// Supplies a random movie title and, given a title, a truncated plot clue.
///
/// Both operations return `None` for "no usable data available"; callers
/// treat that as a skip-and-retry signal.
pub trait ContentProvider {
    /// Pick a random title from the top-movies catalog.
    fn fetch_random_title(&mut self) -> Option<String>;

    /// Build a truncated plot clue for `title`.
    fn fetch_clue(&mut self, title: &str) -> Option<String>;
}

/// Live provider backed by the catalog and encyclopedia HTTP clients.
pub struct HttpContentProvider {
    catalog: CatalogClient,
    encyclopedia: EncyclopediaClient,
}

impl HttpContentProvider {
    /// Build the live provider against the default endpoints.
    ///
    /// # Errors
    /// Returns [`ProviderError::Http`] if an HTTP client cannot be built.
    pub fn new() -> Result<Self, ProviderError> {
        Ok(Self {
            catalog: CatalogClient::new()?,
            encyclopedia: EncyclopediaClient::new()?,
        })
    }
}

impl ContentProvider for HttpContentProvider {
    fn fetch_random_title(&mut self) -> Option<String> {
        use rand::prelude::IndexedRandom;

        match self.catalog.top_titles() {
            Ok(titles) => titles.choose(&mut rand::rng()).cloned(),
            Err(err) => {
                warn!("top movies fetch failed: {err}");
                None
            }
        }
    }

    fn fetch_clue(&mut self, title: &str) -> Option<String> {
        match self.encyclopedia.plot_clue(title) {
            Ok(clue) => clue,
            Err(err) => {
                warn!("plot lookup failed for '{title}': {err}");
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted provider for driving the session loop in tests.

    use super::ContentProvider;
    use std::collections::{HashMap, VecDeque};

    /// Provider double serving a fixed script of title fetch results and a
    /// title-to-clue table.
    pub struct ScriptedProvider {
        titles: VecDeque<Option<String>>,
        clues: HashMap<String, String>,
    }

    impl ScriptedProvider {
        pub fn new(titles: &[Option<&str>], clues: &[(&str, &str)]) -> Self {
            Self {
                titles: titles
                    .iter()
                    .map(|t| t.map(std::string::ToString::to_string))
                    .collect(),
                clues: clues
                    .iter()
                    .map(|(title, clue)| ((*title).to_string(), (*clue).to_string()))
                    .collect(),
            }
        }
    }

    impl ContentProvider for ScriptedProvider {
        fn fetch_random_title(&mut self) -> Option<String> {
            self.titles.pop_front().flatten()
        }

        fn fetch_clue(&mut self, title: &str) -> Option<String> {
            self.clues.get(title).cloned()
        }
    }
}
