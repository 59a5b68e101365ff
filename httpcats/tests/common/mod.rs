//! Common test utilities for integration tests.
//!
//! - [`http_mock::MockHttpServer`] - wiremock wrapper standing in for http.cat
//! - [`run_blocking`] - run blocking client calls from an async test
//!
//! The client is blocking, and `reqwest::blocking` refuses to run on an async
//! worker thread. Build and drive the client inside [`run_blocking`]:
//!
//! ```ignore
//! let server = MockHttpServer::start().await;
//! let base = server.url();
//! let cat = run_blocking(move || HttpCatClient::with_fetcher(HttpCatFetcher::new(), base).cat_by_code(404)).await;
//! ```

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

pub mod http_mock;

/// Run `f` on tokio's blocking pool and wait for its result.
pub async fn run_blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}
