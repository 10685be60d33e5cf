//! Error types for recipe loading and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecipeError>;

/// Errors raised while fetching, parsing, or converting a recipe file.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Request could not be sent or completed (DNS, connect, TLS)
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// HTTP client could not be constructed
    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Response body could not be read
    #[error("cannot read response body from {url}: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Local file could not be read
    #[error("cannot read recipe {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Text is not a well-formed recipe file
    #[error("recipe parse error: {0}")]
    Parse(#[source] serde_yaml_ng::Error),

    /// Recipe file could not be re-emitted
    #[error("recipe serialize error: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),
}

/// Coarse classification of a [`RecipeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Parse,
    Serialize,
}

impl RecipeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. }
            | Self::Client(_)
            | Self::Status { .. }
            | Self::BodyRead { .. }
            | Self::Io { .. } => ErrorKind::Transport,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Serialize(_) => ErrorKind::Serialize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_transport() {
        let e = RecipeError::Status {
            url: "https://example.com/r.yml".to_string(),
            status: 404,
        };
        assert_eq!(e.kind(), ErrorKind::Transport);
        assert_eq!(e.to_string(), "HTTP 404 from https://example.com/r.yml");

        let e = RecipeError::Io {
            path: PathBuf::from("/nope.yml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(e.kind(), ErrorKind::Transport);
        assert!(e.to_string().starts_with("cannot read recipe /nope.yml"));
    }

    #[test]
    fn test_error_kind_parse() {
        let yaml_err = serde_yaml_ng::from_str::<Vec<String>>("a: b").unwrap_err();
        let e = RecipeError::Parse(yaml_err);
        assert_eq!(e.kind(), ErrorKind::Parse);
        assert!(e.to_string().starts_with("recipe parse error"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;
        let e = RecipeError::BodyRead {
            url: "http://x".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated"),
        };
        assert_eq!(e.source().map(|s| s.to_string()), Some("truncated".to_string()));
    }
}
