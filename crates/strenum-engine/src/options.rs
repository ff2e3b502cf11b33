//! Construction options passed through to type finalization.

use crate::error::Result;
use serde::Deserialize;

/// What to do when two members resolve to the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Later members become aliases of the first member holding the value.
    #[default]
    Alias,
    /// Duplicate values are an error.
    Unique,
}

/// Options accepted by every construction path.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// # use strenum_engine::{BuildOptions, DuplicatePolicy};
/// let options = BuildOptions::from_json(r#"{"module": "app.colors", "duplicates": "unique"}"#).unwrap();
/// assert_eq!(options.duplicates, DuplicatePolicy::Unique);
/// assert_eq!(options.start, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildOptions {
    /// Module path recorded on the finalized type.
    pub module: Option<String>,
    /// Qualified name; defaults to the type name.
    pub qualname: Option<String>,
    /// First value handed to integer hooks.
    pub start: i64,
    pub duplicates: DuplicatePolicy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            module: None,
            qualname: None,
            start: 1,
            duplicates: DuplicatePolicy::Alias,
        }
    }
}

impl BuildOptions {
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_qualname(mut self, qualname: impl Into<String>) -> Self {
        self.qualname = Some(qualname.into());
        self
    }

    pub fn with_start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    pub fn unique(mut self) -> Self {
        self.duplicates = DuplicatePolicy::Unique;
        self
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
