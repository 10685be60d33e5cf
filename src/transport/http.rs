//! HTTP transport backed by a blocking `reqwest` client.
//!
//! One GET per call. No retries, no auth, default redirect policy. Status
//! handling is left to the caller; this layer only fails when the request
//! itself cannot complete.

use super::{HttpGetter, HttpResponse, TransportConfig};
use crate::core::error::{RecipeError, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

/// Production [`HttpGetter`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client from the given config.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(RecipeError::Client)?;
        Ok(Self { client })
    }
}

impl HttpGetter for HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| RecipeError::Http {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        let status = response.status().as_u16();
        debug!(%url, status, "GET recipe file");
        Ok(HttpResponse {
            status,
            body: Box::new(response),
        })
    }
}
