//! Recipe source abstraction.
//!
//! This module defines the [`RecipeSource`] trait that abstracts over where the
//! dataset comes from, plus the descriptor used to name a source across the
//! plugin/worker boundary.
//!
//! # Implementations
//!
//! - [`JsonFileSource`](super::JsonFileSource): a JSON document on disk
//! - [`EmbeddedSource`](super::EmbeddedSource): the sample dataset compiled
//!   into the plugin

use crate::catalog::models::RecordBatch;
use crate::domain::error::Result;
use serde::{Deserialize, Serialize};

/// A one-shot provider of recipe records.
///
/// A source is read once at startup. Implementations do not cache; the
/// [`Catalog`](super::Catalog) built from the batch is the cache.
pub trait RecipeSource: Send {
    /// Reads and parses the whole dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read or is not a JSON array.
    /// Individually malformed records are not errors; they are counted in
    /// [`RecordBatch::rejected`].
    fn load(&self) -> Result<RecordBatch>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

/// Serializable description of a recipe source.
///
/// Sent to the worker, which turns it into a concrete [`RecipeSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceSpec {
    /// The dataset compiled into the plugin.
    #[default]
    Embedded,
    /// A JSON file inside the plugin sandbox.
    File(String),
}

impl SourceSpec {
    /// Parses the `catalog` configuration value.
    ///
    /// `"builtin"` (or an empty value) selects the embedded dataset; anything
    /// else is a path resolved with
    /// [`resolve_sandbox_path`](crate::infrastructure::resolve_sandbox_path).
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::catalog::SourceSpec;
    ///
    /// assert_eq!(SourceSpec::from_config_value("builtin"), SourceSpec::Embedded);
    /// assert_eq!(
    ///     SourceSpec::from_config_value("~/recipes.json"),
    ///     SourceSpec::File("/host/recipes.json".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn from_config_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("builtin") {
            Self::Embedded
        } else {
            Self::File(crate::infrastructure::resolve_sandbox_path(value))
        }
    }

    /// Builds the concrete source.
    ///
    /// Opening never fails; a missing file surfaces on
    /// [`RecipeSource::load`].
    #[must_use]
    pub fn open(&self) -> Box<dyn RecipeSource> {
        match self {
            Self::Embedded => Box::new(super::EmbeddedSource),
            Self::File(path) => Box::new(super::JsonFileSource::new(path)),
        }
    }
}
