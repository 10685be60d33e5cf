//! Recipe file fetching by URL or local path.
//!
//! Both entry points go through the injected transports in
//! [`crate::transport`]. A fetch either returns a fully parsed
//! [`RecipeFile`] or an error; nothing is retried or cached.

use super::error::{RecipeError, Result};
use super::parser::parse_recipe_file;
use super::types::RecipeFile;
use crate::transport::{FileReader, HttpGetter, HttpTransport, LocalFiles, TransportConfig};
use reqwest::Url;
use std::convert::Infallible;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Where to load a recipe file from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSource {
    Url(Url),
    Path(PathBuf),
}

impl RecipeSource {
    /// `http://` and `https://` locators are URLs; anything else is a path.
    pub fn parse(s: &str) -> Self {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
            _ => Self::Path(PathBuf::from(s)),
        }
    }
}

impl FromStr for RecipeSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads recipe files through replaceable HTTP and file transports.
pub struct RecipeFileFetcher {
    http: Box<dyn HttpGetter>,
    files: Box<dyn FileReader>,
    strict_status: bool,
}

impl fmt::Debug for RecipeFileFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeFileFetcher")
            .field("strict_status", &self.strict_status)
            .finish_non_exhaustive()
    }
}

impl RecipeFileFetcher {
    /// Fetcher using the default transport config.
    pub fn new() -> Result<Self> {
        Self::from_config(&TransportConfig::default())
    }

    /// Fetcher using the production transports built from `config`.
    pub fn from_config(config: &TransportConfig) -> Result<Self> {
        Ok(Self::with_transports(HttpTransport::new(config)?, LocalFiles)
            .strict_status(config.strict_status))
    }

    /// Fetcher using caller-supplied transports.
    pub fn with_transports(
        http: impl HttpGetter + 'static,
        files: impl FileReader + 'static,
    ) -> Self {
        Self {
            http: Box::new(http),
            files: Box::new(files),
            strict_status: false,
        }
    }

    /// Reject non-2xx responses instead of parsing their bodies.
    pub fn strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    /// Fetch and parse a recipe file with a single GET.
    ///
    /// The body is always read to the end before the status is looked at,
    /// so the connection is released on every path.
    pub fn fetch_recipe_file(&self, url: &Url) -> Result<RecipeFile> {
        info!(%url, "fetching recipe file");
        let response = self.http.get(url)?;
        let status = response.status;
        let success = response.success();

        let mut body = response.body;
        let mut content = String::new();
        body.read_to_string(&mut content)
            .map_err(|source| RecipeError::BodyRead {
                url: url.to_string(),
                source,
            })?;
        drop(body);
        debug!(%url, status, bytes = content.len(), "recipe body received");

        if !success {
            if self.strict_status {
                return Err(RecipeError::Status {
                    url: url.to_string(),
                    status,
                });
            }
            warn!(%url, status, "parsing recipe body from error response");
        }

        parse_recipe_file(&content)
    }

    /// Read and parse a recipe file from disk.
    pub fn load_recipe_file(&self, path: &Path) -> Result<RecipeFile> {
        info!(path = %path.display(), "loading recipe file");
        let content = self.files.read_to_string(path)?;
        parse_recipe_file(&content)
    }

    /// Dispatch to [`Self::fetch_recipe_file`] or [`Self::load_recipe_file`].
    pub fn fetch_source(&self, source: &RecipeSource) -> Result<RecipeFile> {
        match source {
            RecipeSource::Url(url) => self.fetch_recipe_file(url),
            RecipeSource::Path(path) => self.load_recipe_file(path),
        }
    }
}
