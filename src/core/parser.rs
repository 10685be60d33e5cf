//! YAML parsing and re-emission of recipe files.
//!
//! Parsing is all-or-nothing: a type mismatch anywhere in the document
//! rejects the whole file. Unknown keys are ignored and missing keys take
//! zero values. An empty (or comment-only) document is a zero-valued recipe.
//! `<<` merge keys inside `install` are expanded, so the install engine never
//! sees them.

use super::error::{RecipeError, Result};
use super::types::RecipeFile;
use indexmap::IndexMap;
use serde_yaml_ng::{Mapping, Value};

/// Parse a recipe file from a YAML string.
pub fn parse_recipe_file(yaml: &str) -> Result<RecipeFile> {
    let doc: Value = serde_yaml_ng::from_str(yaml).map_err(RecipeError::Parse)?;
    if doc.is_null() {
        return Ok(RecipeFile::default());
    }
    let mut file: RecipeFile = serde_yaml_ng::from_str(yaml).map_err(RecipeError::Parse)?;
    if !file.install.is_empty() {
        file.install = expand_merge_keys(std::mem::take(&mut file.install))?;
    }
    Ok(file)
}

/// Resolve `<<` keys at every depth of the install tree. Explicit keys win
/// over merged ones.
fn expand_merge_keys(install: IndexMap<String, Value>) -> Result<IndexMap<String, Value>> {
    let mut tree = Value::Mapping(
        install
            .into_iter()
            .map(|(k, v)| (Value::String(k), v))
            .collect::<Mapping>(),
    );
    tree.apply_merge().map_err(RecipeError::Parse)?;
    serde_yaml_ng::from_value(tree).map_err(RecipeError::Parse)
}

impl RecipeFile {
    /// Re-emit this recipe file as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(RecipeError::Serialize)
    }
}
