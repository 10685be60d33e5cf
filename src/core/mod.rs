//! Core recipe logic: types, parsing, fetching, projection.

pub mod error;
pub mod fetcher;
pub mod parser;
pub mod recipe;
pub mod types;
