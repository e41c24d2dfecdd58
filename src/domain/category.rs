//! Category labels used by the sidebar and the filter engine.
//!
//! Categories are not declared anywhere; they are whatever labels the loaded
//! recipes carry, plus the synthetic `All`. The list is rebuilt whenever a
//! catalog is built.

use super::Recipe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Display label of the synthetic category matching every recipe.
pub const ALL_LABEL: &str = "All";

/// A sidebar category.
///
/// `All` is synthetic and matches every recipe. `Named` holds a label taken
/// from the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Matches every recipe; always first in the sidebar.
    #[default]
    All,

    /// A dataset label, compared exactly.
    Named(String),
}

impl Category {
    /// Builds a category from a label, folding `"All"` into [`Category::All`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::domain::Category;
    ///
    /// assert_eq!(Category::from_label("All"), Category::All);
    /// assert_eq!(Category::from_label("Soup"), Category::Named("Soup".to_string()));
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }

    /// Sidebar text: `"All"` or the dataset label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Named(label) => label,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns `true` if `recipe` belongs to this category.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            Self::All => true,
            Self::Named(label) => recipe.has_category(label),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derives the sidebar category list from a set of recipes.
///
/// The result always starts with [`Category::All`], followed by the distinct
/// dataset labels in lexicographic (byte) order. A dataset label equal to
/// `"All"` is not listed twice.
///
/// # Parameters
///
/// * `recipes` - Catalog recipes; their order does not matter
///
/// # Returns
///
/// `[All, label1, label2, ...]`, never empty.
#[must_use]
pub fn derive_categories(recipes: &[Recipe]) -> Vec<Category> {
    let labels: BTreeSet<&str> = recipes
        .iter()
        .flat_map(|r| r.categories.iter().map(String::as_str))
        .filter(|label| *label != ALL_LABEL)
        .collect();

    std::iter::once(Category::All)
        .chain(labels.into_iter().map(Category::from_label))
        .collect()
}
