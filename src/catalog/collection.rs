//! The in-memory recipe catalog.
//!
//! Built once from the worker's reply and replaced wholesale on reload. Both
//! the plugin (from [`Catalog::new`]) and the worker (from
//! [`Catalog::from_records`]) construct it.

use crate::catalog::models::RecipeRecord;
use crate::domain::{derive_categories, Category, Recipe, RecipeId};
use std::collections::HashSet;

/// Immutable set of loaded recipes plus the derived category list.
///
/// The category list is computed once on construction; a catalog is replaced
/// wholesale rather than mutated, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Valid recipes, unique by id, in dataset order.
    recipes: Vec<Recipe>,

    /// `All` followed by the distinct labels of `recipes`, sorted.
    categories: Vec<Category>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    /// Builds a catalog from already validated recipes, keeping their order.
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let categories = derive_categories(&recipes);
        Self { recipes, categories }
    }

    /// Validates wire records and builds a catalog from the valid ones.
    ///
    /// Records that fail [`RecipeRecord::into_recipe`] and records repeating an
    /// earlier id are skipped; the first record with a given id wins.
    ///
    /// # Parameters
    ///
    /// * `records` - Parsed wire records in dataset order
    ///
    /// # Returns
    ///
    /// The catalog and the number of skipped records.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::catalog::{parse_document, Catalog};
    ///
    /// let batch = parse_document(r#"[
    ///     {"id": 1, "title": "Toast", "time": 5},
    ///     {"id": 1, "title": "Toast again", "time": 5}
    /// ]"#).unwrap();
    /// let (catalog, skipped) = Catalog::from_records(batch.records);
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(skipped, 1);
    /// ```
    #[must_use]
    pub fn from_records(records: Vec<RecipeRecord>) -> (Self, usize) {
        let _span = tracing::debug_span!("catalog_from_records", count = records.len()).entered();

        let mut seen: HashSet<RecipeId> = HashSet::with_capacity(records.len());
        let mut recipes = Vec::with_capacity(records.len());
        let mut skipped = 0;

        for record in records {
            match record.into_recipe() {
                Ok(recipe) if seen.insert(recipe.id.clone()) => recipes.push(recipe),
                Ok(recipe) => {
                    tracing::warn!(recipe_id = %recipe.id, "skipping recipe with duplicate id");
                    skipped += 1;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping invalid recipe");
                    skipped += 1;
                }
            }
        }

        let catalog = Self::new(recipes);
        tracing::debug!(
            recipes = catalog.len(),
            categories = catalog.categories.len(),
            skipped,
            "catalog built"
        );
        (catalog, skipped)
    }

    /// All recipes in load order.
    #[must_use]
    pub fn all_recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// `All` followed by the sorted dataset labels.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a recipe by id. Linear; catalogs are small.
    #[must_use]
    pub fn find(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::RawId;

    fn record(id: u64, title: &str, time: u32, categories: &[&str]) -> RecipeRecord {
        RecipeRecord {
            id: RawId::Number(id),
            title: title.to_string(),
            time,
            image: String::new(),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            ingredients: vec![],
            steps: vec![],
        }
    }

    #[test]
    fn keeps_load_order_and_derives_categories() {
        let (catalog, skipped) = Catalog::from_records(vec![
            record(3, "Stew", 90, &["Main"]),
            record(1, "Pie", 60, &["Dessert"]),
            record(2, "Porridge", 10, &["Breakfast"]),
        ]);

        assert_eq!(skipped, 0);
        let titles: Vec<&str> = catalog.all_recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Stew", "Pie", "Porridge"]);

        let labels: Vec<&str> = catalog.categories().iter().map(Category::label).collect();
        assert_eq!(labels, vec!["All", "Breakfast", "Dessert", "Main"]);
    }

    #[test]
    fn skips_invalid_and_duplicate_records() {
        let (catalog, skipped) = Catalog::from_records(vec![
            record(1, "Pie", 60, &[]),
            record(1, "Another Pie", 30, &[]),
            record(2, "Nothing", 0, &[]),
            record(3, "Cake", 45, &[]),
        ]);

        assert_eq!(skipped, 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(&RecipeId::new("1")).map(|r| r.title.as_str()), Some("Pie"));
        assert!(catalog.find(&RecipeId::new("2")).is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), &[Category::All]);
    }
}
