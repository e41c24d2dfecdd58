//! JSON-backed recipe sources.
//!
//! Both sources read the same document format (a JSON array of recipe
//! objects, see [`RecipeRecord`](super::RecipeRecord)); they differ only in
//! where the text comes from.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Blueberry Pancakes",
//!     "time": 25,
//!     "image": "/images/pancakes.jpg",
//!     "categories": ["Breakfast", "Sweet"],
//!     "ingredients": ["2 cups flour", "1 cup blueberries"],
//!     "steps": ["Whisk the batter", "Fry until golden"]
//!   }
//! ]
//! ```

use crate::catalog::models::{parse_document, RecordBatch};
use crate::catalog::source::RecipeSource;
use crate::domain::error::Result;
use std::path::PathBuf;

/// Sample dataset compiled into the plugin.
const EMBEDDED_DATASET: &str = include_str!("../../mock-data/recipes.json");

/// Reads recipes from a JSON file.
///
/// The file is read in full on every [`load`](RecipeSource::load); nothing is
/// cached between calls.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::catalog::{JsonFileSource, RecipeSource};
///
/// let source = JsonFileSource::new("/host/recipes.json");
/// assert_eq!(source.describe(), "file:~/recipes.json");
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    /// Sandbox path of the dataset.
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source for `path`. The file is not touched until `load`.
    ///
    /// # Parameters
    ///
    /// * `path` - Path inside the plugin sandbox (host files live under `/host`)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecipeSource for JsonFileSource {
    /// # Errors
    ///
    /// Returns [`RecipeExplorerError::Io`](crate::domain::RecipeExplorerError::Io)
    /// if the file cannot be read, or a catalog error if it is not a JSON array.
    fn load(&self) -> Result<RecordBatch> {
        let _span = tracing::debug_span!("json_file_load", path = ?self.path).entered();

        let contents = std::fs::read_to_string(&self.path)?;

        let batch = parse_document(&contents)?;

        tracing::debug!(
            records = batch.records.len(),
            rejected = batch.rejected,
            bytes = contents.len(),
            "recipe file parsed"
        );
        Ok(batch)
    }

    fn describe(&self) -> String {
        format!("file:{}", crate::infrastructure::display_path(&self.path.to_string_lossy()))
    }
}

/// Serves the sample dataset bundled with the plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl RecipeSource for EmbeddedSource {
    fn load(&self) -> Result<RecordBatch> {
        parse_document(EMBEDDED_DATASET)
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeExplorerError;
    use std::io::Write;

    #[test]
    fn reads_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "Toast", "time": 5, "categories": ["Breakfast"]}}]"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let batch = source.load().unwrap();

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].title, "Toast");
        assert!(source.describe().starts_with("file:"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));

        let err = source.load().unwrap_err();
        assert!(matches!(err, RecipeExplorerError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn malformed_file_is_a_catalog_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"id\": 1,").unwrap();

        assert!(JsonFileSource::new(file.path()).load().is_err());
    }

    #[test]
    fn embedded_dataset_parses_cleanly() {
        let batch = EmbeddedSource.load().unwrap();
        assert!(batch.records.len() >= 9);
        assert_eq!(batch.rejected, 0);
        assert!(batch.records.iter().all(|r| r.time > 0));
    }
}
