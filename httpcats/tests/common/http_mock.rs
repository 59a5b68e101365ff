//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing of the image service.
//!
//! # Patterns
//!
//! - **Image response**: `.respond_with_image(bytes)`
//! - **Error response**: `.respond_with_status(500)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` to assert call count

use std::time::Duration;

pub use wiremock::matchers::{header, method, path};
pub use wiremock::MockServer as WiremockServer;
pub use wiremock::{Mock, ResponseTemplate};

/// A running stub server.
pub struct MockHttpServer {
    server: WiremockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: WiremockServer::start().await,
        }
    }

    /// Base URL of the server, with a trailing slash.
    pub fn url(&self) -> String {
        format!("{}/", self.server.uri())
    }

    /// Access the underlying wiremock server for custom matchers.
    pub fn inner(&self) -> &WiremockServer {
        &self.server
    }

    /// Start stubbing a GET request to `path`.
    pub fn expect_get(&self, path: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.server,
            path: path.to_string(),
            headers: Vec::new(),
            status: 200,
            body: Vec::new(),
            delay: None,
            times: None,
        }
    }

    /// Panic if any `expect_times` expectation was not met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    /// Number of requests the server has received.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}

/// Builder for a single stubbed GET endpoint.
pub struct StubBuilder<'a> {
    server: &'a WiremockServer,
    path: String,
    headers: Vec<(String, String)>,
    status: u16,
    body: Vec<u8>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl StubBuilder<'_> {
    /// Only match requests carrying this header value.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Respond 200 with the given image bytes.
    pub fn respond_with_image(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.body = bytes.into();
        self
    }

    /// Respond with the given status code.
    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Hold the response back for `delay`.
    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Require exactly `times` matching requests before `verify` passes.
    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut mock = Mock::given(method("GET")).and(path(self.path.as_str()));
        for (name, value) in &self.headers {
            mock = mock.and(header(name.as_str(), value.as_str()));
        }

        let mut response = ResponseTemplate::new(self.status)
            .insert_header("content-type", "image/jpeg")
            .set_body_bytes(self.body);
        if let Some(delay) = self.delay {
            response = response.set_delay(delay);
        }

        let mut mock = mock.respond_with(response);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
