//! Projection of a recipe file into the installer's recipe shape.
//!
//! The downstream recipe keeps a copy of the whole recipe file (re-emitted
//! as YAML) so the install engine can read sections it understands, such as
//! `install`, without this crate knowing their structure.

use super::error::Result;
use super::types::{Recipe, RecipeFile};
use tracing::debug;

impl RecipeFile {
    /// Convert into a [`Recipe`]. Fails only if the file cannot be re-emitted.
    pub fn to_recipe(&self) -> Result<Recipe> {
        let file = self.to_yaml()?;
        debug!(name = %self.name, bytes = file.len(), "projected recipe file");

        Ok(Recipe {
            file,
            name: self.name.clone(),
            description: self.description.clone(),
            repository: self.repository.clone(),
            keywords: self.keywords.clone(),
            process_match: self.process_match.clone(),
            log_match: self.log_match.clone(),
            validation_nrql: self.validation_nrql.clone(),
        })
    }
}
