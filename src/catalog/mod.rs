//! Recipe catalog: the immutable dataset and where it comes from.
//!
//! The catalog is loaded once, on the worker thread, from a [`RecipeSource`].
//! A failed load is not fatal; the application simply keeps an empty catalog.
//!
//! # Modules
//!
//! - `collection`: the [`Catalog`] itself (recipes + derived categories)
//! - `source`: the [`RecipeSource`] trait and the serializable [`SourceSpec`]
//! - `json`: JSON file and embedded dataset sources
//! - `models`: wire records, separate from the domain [`Recipe`](crate::domain::Recipe)

pub mod collection;
pub mod json;
pub mod models;
pub mod source;

pub use collection::Catalog;
pub use json::{EmbeddedSource, JsonFileSource};
pub use models::{parse_document, RawId, RecipeRecord, RecordBatch};
pub use source::{RecipeSource, SourceSpec};
