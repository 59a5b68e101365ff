//! Image fetching for resolved catalog entries.
//!
//! [`CatFetcher`] is the seam between catalog lookup and the network. Use
//! [`HttpCatFetcher`] for real requests, or [`mock::MockCatFetcher`] (behind
//! the `test-utils` feature) to exercise callers without a server.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::HttpCatError;

/// Retrieves the raw image bytes served at a URL.
pub trait CatFetcher: Send + Sync {
    /// Perform a blocking GET of `url` and return the body.
    ///
    /// # Errors
    /// Returns [`HttpCatError::Request`] if the request fails in transport.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, HttpCatError>;
}

/// Blocking `reqwest` implementation of [`CatFetcher`].
///
/// The response status is not checked: the image service answers every known
/// code with an image, so the body is returned as-is.
pub struct HttpCatFetcher {
    client: reqwest::blocking::Client,
}

impl HttpCatFetcher {
    /// Create a fetcher with reqwest's default client settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Create a fetcher with a custom `reqwest::blocking::Client`.
    #[must_use]
    pub const fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    /// Create a fetcher honouring the user agent and timeout in `config`.
    ///
    /// # Errors
    /// Returns [`HttpCatError::Request`] if the TLS backend cannot be initialized.
    pub fn from_config(config: &ClientConfig) -> Result<Self, HttpCatError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(&config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::with_client(builder.build()?))
    }
}

impl Default for HttpCatFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CatFetcher for HttpCatFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, HttpCatError> {
        debug!(%url, "fetching cat");

        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "image service returned a non-success status");
        }

        let image = response.bytes()?;
        debug!(%url, bytes = image.len(), "fetched cat");
        Ok(Vec::from(image))
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{CatFetcher, HttpCatError};
    use std::sync::Mutex;

    /// Mock implementation of `CatFetcher` for unit tests.
    ///
    /// Every call returns the configured image and records the URL it was
    /// asked for. Verify calls with `calls()`.
    pub struct MockCatFetcher {
        image: Mutex<Vec<u8>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockCatFetcher {
        pub fn new() -> Self {
            Self {
                image: Mutex::new(Vec::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Create a mock that answers every fetch with `image`.
        pub fn with_image(image: impl Into<Vec<u8>>) -> Self {
            let mock = Self::new();
            mock.set_image(image);
            mock
        }

        /// Set the bytes returned by `fetch`.
        pub fn set_image(&self, image: impl Into<Vec<u8>>) {
            *self.image.lock().unwrap() = image.into();
        }

        /// Get all URLs passed to `fetch`.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockCatFetcher {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatFetcher for MockCatFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, HttpCatError> {
            self.calls.lock().unwrap().push(url.to_string());
            Ok(self.image.lock().unwrap().clone())
        }
    }
}
