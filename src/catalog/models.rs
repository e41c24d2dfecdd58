//! Wire records for the recipe dataset.
//!
//! These types mirror the JSON document a [`RecipeSource`](super::RecipeSource)
//! reads. They are kept separate from the domain [`Recipe`] so the loader can
//! be lenient about the wire format (numeric ids, missing or `null` lists,
//! unknown fields) while the domain type stays strict.

use crate::domain::error::{RecipeExplorerError, Result};
use crate::domain::{Recipe, RecipeId};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier as it appears on the wire: a JSON string or a JSON integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// `"id": 7`
    Number(u64),

    /// `"id": "7"` or any other string.
    Text(String),
}

impl From<RawId> for RecipeId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self::new(n.to_string()),
            RawId::Text(s) => Self::new(s),
        }
    }
}

/// One recipe object from the dataset.
///
/// `id`, `title` and `time` are required. `image` defaults to an empty
/// reference. `categories`, `ingredients` and `steps` default to empty when
/// absent or `null`. Any other field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: RawId,
    pub title: String,

    /// Cooking time in minutes. Must be positive to pass validation.
    pub time: u32,

    /// Image URI or path. Not rendered in the terminal, only kept.
    #[serde(default)]
    pub image: String,

    /// Category labels, matched case-sensitively by the filter.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub steps: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RecipeRecord {
    /// Converts the record into a domain recipe.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeExplorerError::Catalog`] if the title is blank or the
    /// cooking time is zero.
    pub fn into_recipe(self) -> Result<Recipe> {
        let id = RecipeId::from(self.id);

        if self.title.trim().is_empty() {
            return Err(RecipeExplorerError::Catalog(format!("recipe {id} has an empty title")));
        }
        if self.time == 0 {
            return Err(RecipeExplorerError::Catalog(format!("recipe {id} has a cooking time of zero")));
        }

        Ok(Recipe {
            id,
            title: self.title,
            time: self.time,
            image: self.image,
            categories: self.categories,
            ingredients: self.ingredients,
            steps: self.steps,
        })
    }
}

/// Records parsed from one dataset document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBatch {
    /// Records that parsed, in document order.
    pub records: Vec<RecipeRecord>,

    /// Number of array elements that were not valid recipe objects.
    pub rejected: usize,
}

/// Parses a dataset document.
///
/// The document must be a JSON array. Elements that do not deserialize into a
/// [`RecipeRecord`] are counted in [`RecordBatch::rejected`] and skipped.
///
/// # Errors
///
/// Returns [`RecipeExplorerError::Catalog`] if the text is not JSON or the top
/// level value is not an array.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::catalog::parse_document;
///
/// let batch = parse_document(r#"[{"id": 1, "title": "Toast", "time": 5}, 42]"#).unwrap();
/// assert_eq!(batch.records.len(), 1);
/// assert_eq!(batch.rejected, 1);
/// ```
pub fn parse_document(text: &str) -> Result<RecordBatch> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(text)
        .map_err(|e| RecipeExplorerError::Catalog(format!("failed to parse recipe document: {e}")))?;

    let mut batch = RecordBatch::default();
    for (position, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<RecipeRecord>(element) {
            Ok(record) => batch.records.push(record),
            Err(e) => {
                tracing::warn!(position, error = %e, "skipping malformed recipe record");
                batch.rejected += 1;
            }
        }
    }

    Ok(batch)
}
