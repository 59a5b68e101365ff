//! Accessors that turn a status code or name into an [`HttpCat`].
//!
//! # Architecture
//!
//! - [`HttpCatClient`] - resolves input against the catalog, then fetches
//! - [`CatFetcher`] - trait for the network step
//! - [`HttpCatFetcher`] - blocking reqwest implementation
//! - [`mock::MockCatFetcher`] - recording mock (behind `test-utils` feature)
//!
//! # Example
//!
//! ```no_run
//! use httpcats::HttpCatClient;
//!
//! let client = HttpCatClient::new();
//! let cat = client.cat_by_name("not found")?;
//! assert_eq!(cat.code, 404);
//! assert_eq!(cat.url, "https://http.cat/404");
//! # Ok::<(), httpcats::HttpCatError>(())
//! ```

mod fetcher;

pub use fetcher::{CatFetcher, HttpCatFetcher};

#[cfg(any(test, feature = "test-utils"))]
pub use fetcher::mock;

use tracing::debug;

use crate::cat::HttpCat;
use crate::catalog::{self, StatusEntry};
use crate::config::ClientConfig;
use crate::error::HttpCatError;

/// Root of the public image service.
pub const DEFAULT_BASE_URL: &str = "https://http.cat/";

/// Looks up status codes and fetches their cats.
///
/// Lookup failures are reported before any request is made.
pub struct HttpCatClient<F = HttpCatFetcher> {
    fetcher: F,
    base_url: String,
}

impl HttpCatClient {
    /// Create a client for `https://http.cat/` with default HTTP settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fetcher(HttpCatFetcher::new(), DEFAULT_BASE_URL)
    }

    /// Create a client from configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, HttpCatError> {
        Ok(Self::with_fetcher(
            HttpCatFetcher::from_config(config)?,
            config.base_url.as_str(),
        ))
    }
}

impl Default for HttpCatClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: CatFetcher> HttpCatClient<F> {
    /// Create a client with a custom fetcher and base URL.
    ///
    /// A trailing `/` is appended to `base_url` when missing.
    pub fn with_fetcher(fetcher: F, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { fetcher, base_url }
    }

    /// Base URL that status codes are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Image URL for a catalog entry.
    #[must_use]
    pub fn url_for(&self, entry: &StatusEntry) -> String {
        format!("{}{}", self.base_url, entry.code)
    }

    /// Get an HTTP cat by status code.
    ///
    /// # Errors
    /// Returns [`HttpCatError::InvalidCat`] for an unknown code, or
    /// [`HttpCatError::Request`] if the image request fails.
    pub fn cat_by_code(&self, code: u16) -> Result<HttpCat, HttpCatError> {
        let entry = catalog::lookup_by_code(code)?;
        self.cat_for(entry)
    }

    /// Get an HTTP cat by status name or alias, ignoring case and treating
    /// spaces as underscores.
    ///
    /// # Errors
    /// Returns [`HttpCatError::InvalidCat`] for an unknown name, or
    /// [`HttpCatError::Request`] if the image request fails.
    pub fn cat_by_name(&self, name: &str) -> Result<HttpCat, HttpCatError> {
        let entry = catalog::lookup_by_name(name)?;
        self.cat_for(entry)
    }

    /// Fetch the cat for an already resolved catalog entry.
    ///
    /// # Errors
    /// Returns [`HttpCatError::Request`] if the image request fails.
    pub fn cat_for(&self, entry: &StatusEntry) -> Result<HttpCat, HttpCatError> {
        debug!(code = entry.code, name = entry.name, "resolved status");
        let url = self.url_for(entry);
        let image = self.fetcher.fetch(&url)?;
        Ok(HttpCat {
            code: entry.code,
            name: entry.pretty_name(),
            url,
            image,
        })
    }
}
