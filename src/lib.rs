//! recipekit: load, fetch, and convert monitoring-agent install recipes.
//!
//! A recipe file is a YAML document describing how to install one
//! integration. This crate reads it from a URL or a local path, parses it
//! into [`core::types::RecipeFile`], and projects it into the installer's
//! [`core::types::Recipe`].

pub mod cli;
pub mod core;
pub mod transport;

pub use crate::core::error::{ErrorKind, RecipeError, Result};
pub use crate::core::fetcher::{RecipeFileFetcher, RecipeSource};
pub use crate::core::parser::parse_recipe_file;
pub use crate::core::types::{
    LogMatch, LogMatchAttributes, Recipe, RecipeFile, RecipeInstallTarget, VariableConfig,
};
