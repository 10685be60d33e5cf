//! Local filesystem transport.

use super::FileReader;
use crate::core::error::{RecipeError, Result};
use std::path::Path;
use tracing::debug;

/// Reads recipe files straight from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl FileReader for LocalFiles {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path).map_err(|source| RecipeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read recipe file");
        Ok(content)
    }
}
