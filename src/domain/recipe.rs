//! Recipe domain model.
//!
//! A [`Recipe`] is one immutable entry of the catalog. Recipes are created from
//! wire records by the catalog loader and never mutated afterwards; the rest of
//! the application refers to them by [`RecipeId`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, unique identifier of a recipe.
///
/// Datasets use either JSON strings or JSON integers for ids. Both are
/// normalized to their string form, so `7` and `"7"` name the same recipe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wraps an id string as is; no trimming or normalization.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::domain::RecipeId;
    ///
    /// let id = RecipeId::new("7");
    /// assert_eq!(id.as_str(), "7");
    /// assert_eq!(id.to_string(), "7");
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single recipe from the catalog.
///
/// # Fields
///
/// - `id`: unique, stable identifier
/// - `title`: display title
/// - `time`: cooking time in minutes, always positive
/// - `image`: image reference (URI or path), displayed as text
/// - `categories`: category labels in dataset order, may be empty
/// - `ingredients`: ordered ingredient lines
/// - `steps`: ordered preparation steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub time: u32,
    pub image: String,
    pub categories: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Recipe {
    /// Returns `true` if the recipe carries the given category label.
    ///
    /// The comparison is exact and case-sensitive.
    #[must_use]
    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    /// Category labels joined for card captions, e.g. `"Dessert · Baking"`.
    #[must_use]
    pub fn category_caption(&self) -> String {
        self.categories.join(" · ")
    }

    /// Label announced for the recipe card, e.g. `"Pancakes, 20 minutes"`.
    #[must_use]
    pub fn accessible_label(&self) -> String {
        format!("{}, {} minutes", self.title, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> Recipe {
        Recipe {
            id: RecipeId::new("1"),
            title: "Pancakes".to_string(),
            time: 20,
            image: "/images/pancakes.jpg".to_string(),
            categories: vec!["Breakfast".to_string(), "Sweet".to_string()],
            ingredients: vec!["Flour".to_string()],
            steps: vec![],
        }
    }

    #[test]
    fn has_category_is_case_sensitive() {
        let recipe = pancakes();
        assert!(recipe.has_category("Breakfast"));
        assert!(!recipe.has_category("breakfast"));
    }

    #[test]
    fn captions_and_labels() {
        let recipe = pancakes();
        assert_eq!(recipe.category_caption(), "Breakfast · Sweet");
        assert_eq!(recipe.accessible_label(), "Pancakes, 20 minutes");
    }
}
