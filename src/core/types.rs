//! Recipe file schema and the downstream recipe shape.
//!
//! `RecipeFile` mirrors the YAML document published for each recipe. Every
//! field is optional on input: missing keys take zero values and unknown keys
//! are ignored, so newer recipe files still load. An explicit `~`/`null`
//! counts as a missing key, and the secrecy flag also takes the YAML 1.1
//! spellings (`yes`, `off`, ...) older recipes use. `Recipe` is the flattened
//! projection handed to the installer.

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Recipe file (wire shape)
// ============================================================================

/// A recipe file as published by a recipe repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeFile {
    /// Human-readable summary
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    /// Values collected from the user before install
    #[serde(deserialize_with = "null_as_default")]
    pub input_vars: Vec<VariableConfig>,

    /// Free-form install definition, interpreted by the install engine
    #[serde(deserialize_with = "null_as_default")]
    pub install: IndexMap<String, serde_yaml_ng::Value>,

    /// Environments this recipe applies to
    #[serde(deserialize_with = "null_as_default")]
    pub install_targets: Vec<RecipeInstallTarget>,

    /// Search keywords
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,

    /// Log sources to forward once installed
    #[serde(deserialize_with = "null_as_default")]
    pub log_match: Vec<LogMatch>,

    /// Recipe name (unique within a repository)
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Process name patterns that suggest this recipe
    #[serde(deserialize_with = "null_as_default")]
    pub process_match: Vec<String>,

    /// Source repository of the integration
    #[serde(deserialize_with = "null_as_default")]
    pub repository: String,

    /// Query proving the install reports data
    #[serde(deserialize_with = "null_as_default")]
    pub validation_nrql: String,
}

/// An input variable prompted for during install.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub prompt: String,
    /// Mask the value when collecting it
    #[serde(deserialize_with = "yaml11_bool")]
    pub secret: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub default: String,
}

/// One matching rule for where a recipe can be installed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeInstallTarget {
    /// Target type (host, application, ...)
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub target_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub os: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform_family: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platform_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kernel_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kernel_arch: String,
}

/// A log file (or systemd unit) to forward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogMatch {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// File path or glob
    #[serde(deserialize_with = "null_as_default")]
    pub file: String,

    #[serde(
        skip_serializing_if = "LogMatchAttributes::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub attributes: LogMatchAttributes,

    /// Content pattern a line must match
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub pattern: String,

    /// systemd unit to read instead of a file
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub systemd: String,
}

/// Extra tags attached to forwarded log lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogMatchAttributes {
    #[serde(rename = "logtype", deserialize_with = "null_as_default")]
    pub log_type: String,
}

impl LogMatchAttributes {
    pub fn is_empty(&self) -> bool {
        self.log_type.is_empty()
    }
}

// ============================================================================
// Deserialize helpers
// ============================================================================

/// Treat an explicit null like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Boolean that also accepts the YAML 1.1 literals, case-insensitively.
fn yaml11_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(Yaml11Bool)
}

struct Yaml11Bool;

impl<'de> Visitor<'de> for Yaml11Bool {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean (true/false, yes/no, on/off, y/n)")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        match v.to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "on" => Ok(true),
            "n" | "no" | "false" | "off" => Ok(false),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

// ============================================================================
// Downstream recipe
// ============================================================================

/// The installer's view of a recipe: flattened metadata plus the re-emitted
/// recipe file text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Full recipe file, re-serialized as YAML
    pub file: String,
    pub name: String,
    pub description: String,
    pub repository: String,
    pub keywords: Vec<String>,
    pub process_match: Vec<String>,
    pub log_match: Vec<LogMatch>,
    pub validation_nrql: String,
}
