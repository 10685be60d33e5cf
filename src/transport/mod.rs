//! Transport seams for HTTP GET and local file reads.
//!
//! The fetcher only talks to these two traits, so tests (and embedders with
//! their own HTTP stack) can swap either side without a network or disk.

pub mod http;
pub mod local;

use crate::core::error::Result;
use reqwest::Url;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

pub use http::HttpTransport;
pub use local::LocalFiles;

/// Response from an [`HttpGetter`]. The body is read by the caller and
/// dropped when the response goes out of scope, which releases the
/// connection.
pub struct HttpResponse {
    pub status: u16,
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    pub fn success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Performs a single GET request.
pub trait HttpGetter: Send + Sync {
    fn get(&self, url: &Url) -> Result<HttpResponse>;
}

/// Reads a whole file into memory.
pub trait FileReader: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Settings for the production transports.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
    /// Reject non-2xx responses instead of parsing their bodies
    pub strict_status: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("recipekit/{}", env!("CARGO_PKG_VERSION")),
            strict_status: false,
        }
    }
}
