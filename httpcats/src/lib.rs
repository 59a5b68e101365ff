//! Get the HTTP cat for a status code or status name.
//!
//! ```no_run
//! let cat = httpcats::cat_by_code(418)?;
//! assert_eq!(cat.name, "Im A Teapot");
//! assert_eq!(cat.url, "https://http.cat/418");
//! std::fs::write("teapot.jpg", &cat.image)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every call performs one blocking request; nothing is cached. Unknown
//! input is rejected before an HTTP client is built.

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod cat;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;

pub use cat::HttpCat;
pub use catalog::StatusEntry;
pub use client::{CatFetcher, HttpCatClient, HttpCatFetcher, DEFAULT_BASE_URL};
pub use error::{HttpCatError, InvalidCat};

/// Get an HTTP cat by status code from `https://http.cat/`.
///
/// # Errors
/// Returns [`HttpCatError::InvalidCat`] if `code` is not a known status code,
/// or [`HttpCatError::Request`] if the image request fails.
pub fn cat_by_code(code: u16) -> Result<HttpCat, HttpCatError> {
    let entry = catalog::lookup_by_code(code)?;
    HttpCatClient::new().cat_for(entry)
}

/// Get an HTTP cat by status name (e.g. `"Not Found"`, `"im a teapot"`).
///
/// # Errors
/// Returns [`HttpCatError::InvalidCat`] if `name` is not a known status name,
/// or [`HttpCatError::Request`] if the image request fails.
pub fn cat_by_name(name: &str) -> Result<HttpCat, HttpCatError> {
    let entry = catalog::lookup_by_name(name)?;
    HttpCatClient::new().cat_for(entry)
}
