//! Filter engine deriving the visible recipe subset.
//!
//! Filtering is a pure function of the catalog and the active
//! [`FilterCriteria`]. It is cheap enough to run after every state change and
//! never reorders recipes.

use crate::domain::{Category, Recipe};

/// Active category plus free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: Category,

    /// Raw query text as typed. Matching trims and lowercases it; the raw text
    /// is kept so the search box shows exactly what was entered.
    pub query: String,
}

impl FilterCriteria {
    /// `true` when no filter is active (category `All`, empty query).
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.category.is_all() && self.query.is_empty()
    }

    /// Lowercased, trimmed query, or `None` if it is blank.
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}

fn text_matches(recipe: &Recipe, needle: &str) -> bool {
    recipe.title.to_lowercase().contains(needle)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(needle))
}

/// Returns the recipes accepted by `criteria`, in catalog order.
///
/// A recipe is kept when it carries the active category (skipped for `All`)
/// and, if the trimmed query is non-empty, the lowercased query is a substring
/// of the lowercased title or of at least one lowercased ingredient.
///
/// # Parameters
///
/// * `all` - The whole catalog, in load order
/// * `criteria` - Active category and query
///
/// # Returns
///
/// Borrowed recipes in catalog order. Empty when nothing matches.
#[must_use]
pub fn filtered<'a>(all: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    let _span = tracing::debug_span!(
        "filter_recipes",
        total = all.len(),
        category = %criteria.category,
        query_len = criteria.query.len()
    )
    .entered();

    let needle = criteria.needle();
    let visible: Vec<&Recipe> = all
        .iter()
        .filter(|recipe| criteria.category.matches(recipe))
        .filter(|recipe| needle.as_deref().map_or(true, |n| text_matches(recipe, n)))
        .collect();

    tracing::debug!(visible = visible.len(), "recipes filtered");
    visible
}

/// Character range `(start, end)` of the first case-insensitive occurrence of
/// the trimmed `query` in `text`.
///
/// Indices count `char`s of `text`, end exclusive. Returns `None` for a blank
/// query or when there is no match.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::app::match_range;
///
/// assert_eq!(match_range("Pie Stew", "STEW"), Some((4, 8)));
/// assert_eq!(match_range("Pie Stew", "  "), None);
/// ```
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = query.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return None;
    }

    // Lowercasing may expand a char, so each folded char remembers its source index.
    let folded: Vec<(usize, char)> = text
        .chars()
        .enumerate()
        .flat_map(|(idx, c)| c.to_lowercase().map(move |l| (idx, l)))
        .collect();

    if folded.len() < needle.len() {
        return None;
    }

    (0..=folded.len() - needle.len())
        .find(|&start| {
            folded[start..start + needle.len()]
                .iter()
                .map(|(_, c)| *c)
                .eq(needle.iter().copied())
        })
        .map(|start| {
            let first = folded[start].0;
            let last = folded[start + needle.len() - 1].0;
            (first, last + 1)
        })
}
