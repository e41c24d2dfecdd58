//! Application state and view model computation.
//!
//! [`AppState`] is the single writer of everything the screen shows. The
//! catalog is immutable once loaded; the browse state (focus plus filter
//! criteria) changes only through [`AppState::transition`], which keeps the
//! visible list and the focus indices consistent after every step.

use super::filter::{filtered, match_range};
use super::focus::{BrowseState, NavContext, Region};
use crate::catalog::{Catalog, SourceSpec};
use crate::domain::Recipe;
use crate::ui::layout::{Hit, LayoutConfig, ScreenLayout, BRAND};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardInfo, CategoryItem, DetailInfo, FooterInfo, GridInfo, MainContent, Role, SidebarInfo, StatusInfo,
    TopNavInfo, UIViewModel,
};

/// Search box text while the query is empty.
pub const SEARCH_PLACEHOLDER: &str = "Search recipes or ingredients...";

/// Main area message until the worker replies.
pub const LOADING_MESSAGE: &str = "Loading recipes...";

/// Main area message when no recipe passes the criteria.
pub const EMPTY_MESSAGE: &str = "No recipes found";
pub const EMPTY_SUBTITLE: &str = "Try adjusting your search or filters.";

/// Central application state.
///
/// # Lifecycle
///
/// ```text
/// new ──▶ loading ──set_catalog──────▶ ready
///                 └─catalog_failed──▶ ready (empty catalog)
/// ```
///
/// While loading, the catalog is empty and navigation is ignored by the
/// event handler; query edits are kept and filter the catalog once it
/// arrives.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded recipes and categories. Empty while loading or after a failure.
    pub catalog: Catalog,

    /// `true` until the catalog load resolves, successfully or not.
    pub loading: bool,

    /// Focus and filter criteria. Change it through
    /// [`transition`](Self::transition) so the visible list follows.
    pub browse: BrowseState,

    /// Recipes passing the current criteria, in catalog order.
    ///
    /// Recomputed by [`apply_filter`](Self::apply_filter) whenever the catalog
    /// or the criteria change.
    visible: Vec<Recipe>,

    pub theme: Theme,

    /// Card and sidebar sizes from the configuration.
    pub layout: LayoutConfig,

    /// Where the worker loads the catalog from.
    pub source: SourceSpec,

    /// Last pane size seen by the renderer, `(rows, cols)`.
    viewport: (usize, usize),
}

impl AppState {
    /// Creates the startup state: loading, grid focused, nothing filtered.
    #[must_use]
    pub fn new(theme: Theme, layout: LayoutConfig, source: SourceSpec) -> Self {
        Self {
            catalog: Catalog::default(),
            loading: true,
            browse: BrowseState::default(),
            visible: Vec::new(),
            theme,
            layout,
            source,
            viewport: (0, 0),
        }
    }

    /// Recipes the grid shows, in catalog order.
    #[must_use]
    pub fn visible(&self) -> &[Recipe] {
        &self.visible
    }

    /// The focused region.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.browse.focus.region
    }

    /// `true` while key presses edit the query.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        matches!(self.browse.focus.region, Region::Search)
    }

    /// Records the pane size. Returns `true` if it changed.
    pub fn resize(&mut self, rows: usize, cols: usize) -> bool {
        let changed = self.viewport != (rows, cols);
        self.viewport = (rows, cols);
        changed
    }

    /// Last recorded pane size, `(rows, cols)`. `(0, 0)` before the first
    /// render.
    #[must_use]
    pub const fn viewport(&self) -> (usize, usize) {
        self.viewport
    }

    /// Geometry for a `rows` x `cols` pane under this state's layout config.
    #[must_use]
    pub fn screen_layout(&self, rows: usize, cols: usize) -> ScreenLayout {
        ScreenLayout::new(rows, cols, &self.layout)
    }

    /// Cards per grid row at the last rendered size.
    #[must_use]
    pub fn grid_columns(&self) -> usize {
        let (rows, cols) = self.viewport;
        self.screen_layout(rows, cols).columns
    }

    /// Applies a browse-state transition.
    ///
    /// `step` sees the current state and the lists it navigates over. When
    /// the criteria change the visible list is recomputed and the indices are
    /// clamped to it. Returns `true` if anything changed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::app::focus;
    /// use recipe_explorer::Config;
    ///
    /// let mut state = recipe_explorer::initialize(&Config::default());
    /// assert!(state.transition(|browse, _| focus::edit_query(browse, "pie")));
    /// assert_eq!(state.browse.criteria.query, "pie");
    /// ```
    pub fn transition<F>(&mut self, step: F) -> bool
    where
        F: FnOnce(&BrowseState, &NavContext<'_>) -> BrowseState,
    {
        let next = {
            let visible: Vec<&Recipe> = self.visible.iter().collect();
            let ctx = NavContext {
                categories: self.catalog.categories(),
                visible: &visible,
                columns: self.grid_columns(),
            };
            step(&self.browse, &ctx)
        };

        if next == self.browse {
            return false;
        }

        let criteria_changed = next.criteria != self.browse.criteria;
        tracing::debug!(
            from = self.browse.focus.region.name(),
            to = next.focus.region.name(),
            criteria_changed,
            "browse state changed"
        );

        self.browse = next;
        if criteria_changed {
            self.apply_filter();
        }
        true
    }

    /// Recomputes the visible list and restores the focus invariants.
    ///
    /// # Invariants
    ///
    /// Afterwards:
    /// - `sidebar_index < categories.len()`, or 0 when there are none
    /// - `grid_index < visible.len()`, or 0 when nothing is visible
    /// - the detail region names a recipe that is in the catalog
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!("apply_filter").entered();

        self.visible = filtered(self.catalog.all_recipes(), &self.browse.criteria)
            .into_iter()
            .cloned()
            .collect();

        self.browse
            .focus
            .clamp(self.catalog.categories().len(), self.visible.len());

        let dangling = self
            .browse
            .focus
            .open_recipe()
            .is_some_and(|id| self.catalog.find(id).is_none());
        if dangling {
            tracing::debug!("open recipe no longer in catalog, closing detail");
            self.browse.focus.region = Region::Grid;
        }
    }

    /// Installs a freshly loaded catalog and leaves the loading state.
    ///
    /// The browse state is kept; its indices are clamped to the new lists.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        tracing::debug!(
            recipes = catalog.len(),
            categories = catalog.categories().len(),
            "catalog installed"
        );
        self.catalog = catalog;
        self.loading = false;
        self.apply_filter();
    }

    /// Resolves a failed load into an empty catalog.
    pub fn catalog_failed(&mut self) {
        self.set_catalog(Catalog::default());
    }

    /// Maps a 1-indexed pointer position to the element under it.
    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> Option<Hit> {
        let (rows, cols) = self.viewport;
        let layout = self.screen_layout(rows, cols);
        let viewmodel = self.compute_viewmodel(rows, cols);
        layout.hit_test(&viewmodel, row, col)
    }

    /// Builds the view model for a `rows` x `cols` pane.
    ///
    /// # Parameters
    ///
    /// * `rows` - Pane height in rows
    /// * `cols` - Pane width in columns
    ///
    /// # Returns
    ///
    /// A `UIViewModel` with:
    /// - the brand, the query and the search placeholder
    /// - the windowed category list with the active and focused entries marked
    /// - the loading message, the empty state, or the windowed card grid
    /// - the open recipe's dialog, if any
    /// - key hints for the focused region
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = self.screen_layout(rows, cols);

        UIViewModel {
            top_nav: self.compute_top_nav(),
            sidebar: self.compute_sidebar(&layout),
            main: self.compute_main(&layout),
            detail: self.compute_detail(),
            footer: self.compute_footer(),
        }
    }

    fn compute_top_nav(&self) -> TopNavInfo {
        TopNavInfo {
            role: Role::Banner,
            brand: BRAND.to_string(),
            query: self.browse.criteria.query.clone(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            search_label: "Search recipes".to_string(),
            focused: self.is_typing(),
        }
    }

    fn compute_sidebar(&self, layout: &ScreenLayout) -> SidebarInfo {
        let categories = self.catalog.categories();
        let focus = &self.browse.focus;
        let window = layout.sidebar_window(categories.len(), focus.sidebar_index);
        let first_index = window.start;

        let items = window
            .map(|index| {
                let category = &categories[index];
                CategoryItem {
                    role: Role::Option,
                    label: category.label().to_string(),
                    active: *category == self.browse.criteria.category,
                    focused: focus.region == Region::Sidebar && index == focus.sidebar_index,
                }
            })
            .collect();

        SidebarInfo {
            role: Role::Navigation,
            list_role: Role::Listbox,
            label: "Recipe categories".to_string(),
            title: "Categories".to_string(),
            items,
            first_index,
        }
    }

    /// Loading message, empty state, or the windowed card grid, in that order
    /// of precedence.
    fn compute_main(&self, layout: &ScreenLayout) -> MainContent {
        if self.loading {
            return MainContent::Loading(StatusInfo {
                role: Role::Status,
                message: LOADING_MESSAGE.to_string(),
                subtitle: None,
            });
        }
        if self.visible.is_empty() {
            return MainContent::Empty(StatusInfo {
                role: Role::Status,
                message: EMPTY_MESSAGE.to_string(),
                subtitle: Some(EMPTY_SUBTITLE.to_string()),
            });
        }

        let focus = &self.browse.focus;
        let count = self.visible.len();
        let window = layout.grid_window(count, focus.grid_index);
        let first_index = window.start;
        let query = &self.browse.criteria.query;

        let cards = window
            .map(|index| {
                let recipe = &self.visible[index];
                CardInfo {
                    role: Role::Option,
                    label: recipe.accessible_label(),
                    title: recipe.title.clone(),
                    time_pill: format!("{}m", recipe.time),
                    meta: recipe.category_caption(),
                    focused: focus.region == Region::Grid && index == focus.grid_index,
                    highlight: match_range(&recipe.title, query),
                }
            })
            .collect();

        let noun = if count == 1 { "recipe" } else { "recipes" };
        MainContent::Grid(GridInfo {
            role: Role::Grid,
            label: "Recipes".to_string(),
            caption: format!("{} · {count} {noun}", self.browse.criteria.category),
            cards,
            first_index,
            columns: layout.columns,
        })
    }

    /// `None` unless a recipe is open.
    fn compute_detail(&self) -> Option<DetailInfo> {
        let recipe = self.catalog.find(self.browse.focus.open_recipe()?)?;

        Some(DetailInfo {
            role: Role::Dialog,
            label: format!("Recipe details for {}", recipe.title),
            title: recipe.title.clone(),
            time_label: format!("{} minutes", recipe.time),
            image: recipe.image.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            close_role: Role::Button,
            close_label: "Close details".to_string(),
        })
    }

    /// Key hints for the focused region.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.browse.focus.region {
            Region::Search => "type to search  ←↑ categories  →↓ recipes  Esc clear/back",
            Region::Sidebar => "↑↓ move  Enter select  → recipes  / search  Esc back  q quit",
            Region::Grid => "←↑↓→ move  Enter open  / search  Esc back  q quit",
            Region::Detail(_) => "Enter/Esc close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::focus::{self, Input};
    use crate::domain::{Category, RecipeId};

    fn recipe(id: &str, title: &str, time: u32, categories: &[&str]) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            title: title.to_string(),
            time,
            image: format!("/images/{id}.jpg"),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            ingredients: vec!["Flour".to_string(), "Butter".to_string()],
            steps: vec!["Mix.".to_string(), "Bake.".to_string()],
        }
    }

    fn loaded() -> AppState {
        let mut state = AppState::new(Theme::default(), LayoutConfig::default(), SourceSpec::Embedded);
        state.resize(40, 120);
        state.set_catalog(Catalog::new(vec![
            recipe("1", "Pie", 45, &["Dessert"]),
            recipe("2", "Cake", 60, &["Dessert", "Baking"]),
            recipe("3", "Pie Stew", 90, &["Main"]),
        ]));
        state
    }

    fn press(state: &mut AppState, input: Input) -> bool {
        state.transition(|browse, ctx| focus::step(browse, input, ctx))
    }

    #[test]
    fn starts_loading_with_grid_focus() {
        let state = AppState::new(Theme::default(), LayoutConfig::default(), SourceSpec::Embedded);
        assert!(state.loading);
        assert_eq!(*state.region(), Region::Grid);

        let vm = state.compute_viewmodel(40, 120);
        assert!(matches!(vm.main, MainContent::Loading(ref s) if s.message == LOADING_MESSAGE));
        assert!(vm.detail.is_none());
    }

    #[test]
    fn failed_load_is_an_empty_state() {
        let mut state = AppState::new(Theme::default(), LayoutConfig::default(), SourceSpec::Embedded);
        state.catalog_failed();

        assert!(!state.loading);
        assert!(state.visible().is_empty());
        assert_eq!(state.catalog.categories(), &[Category::All]);
        assert!(!press(&mut state, Input::Down));

        let vm = state.compute_viewmodel(40, 120);
        match vm.main {
            MainContent::Empty(status) => {
                assert_eq!(status.message, EMPTY_MESSAGE);
                assert_eq!(status.subtitle.as_deref(), Some(EMPTY_SUBTITLE));
            }
            other => panic!("expected empty state, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_query_empties_grid() {
        let mut state = loaded();
        state.transition(|browse, _| focus::edit_query(browse, "zz"));

        assert!(state.visible().is_empty());
        assert_eq!(state.browse.focus.grid_index, 0);
        assert!(!state.loading);
        assert!(!press(&mut state, Input::Right));
        assert!(matches!(state.compute_viewmodel(40, 120).main, MainContent::Empty(_)));
    }

    #[test]
    fn category_and_query_combine() {
        let mut state = loaded();
        state.browse.focus.region = Region::Sidebar;
        press(&mut state, Input::Down);
        press(&mut state, Input::Down);
        assert_eq!(state.catalog.categories()[state.browse.focus.sidebar_index].label(), "Dessert");
        press(&mut state, Input::Enter);
        state.transition(|browse, _| focus::edit_query(browse, "pie"));

        let ids: Vec<&str> = state.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);

        let vm = state.compute_viewmodel(40, 120);
        let grid = vm.main.grid().unwrap();
        assert_eq!(grid.caption, "Dessert · 1 recipe");
        assert_eq!(grid.cards[0].highlight, Some((0, 3)));
        assert!(vm.sidebar.items.iter().any(|i| i.label == "Dessert" && i.active));
    }

    #[test]
    fn card_strings() {
        let state = loaded();
        let vm = state.compute_viewmodel(40, 120);
        let grid = vm.main.grid().unwrap();

        assert_eq!(grid.caption, "All · 3 recipes");
        let cake = &grid.cards[1];
        assert_eq!(cake.label, "Cake, 60 minutes");
        assert_eq!(cake.time_pill, "60m");
        assert_eq!(cake.meta, "Dessert · Baking");
        assert_eq!(cake.role, Role::Option);
        assert!(grid.cards[0].focused);
        assert!(!cake.focused);
    }

    #[test]
    fn open_and_close_detail() {
        let mut state = loaded();
        press(&mut state, Input::Right);
        press(&mut state, Input::Enter);

        let vm = state.compute_viewmodel(40, 120);
        let detail = vm.detail.unwrap();
        assert_eq!(detail.role, Role::Dialog);
        assert_eq!(detail.label, "Recipe details for Cake");
        assert_eq!(detail.time_label, "60 minutes");
        assert_eq!(detail.close_label, "Close details");
        assert_eq!(vm.footer.keybindings, "Enter/Esc close");

        press(&mut state, Input::Back);
        assert_eq!(*state.region(), Region::Grid);
        assert_eq!(state.browse.focus.grid_index, 1);
        assert!(state.compute_viewmodel(40, 120).detail.is_none());
    }

    #[test]
    fn reloading_catalog_clamps_and_closes_missing_detail() {
        let mut state = loaded();
        press(&mut state, Input::Right);
        press(&mut state, Input::Right);
        press(&mut state, Input::Enter);
        assert!(state.browse.focus.open_recipe().is_some());

        state.set_catalog(Catalog::new(vec![recipe("9", "Toast", 5, &[])]));
        assert_eq!(*state.region(), Region::Grid);
        assert_eq!(state.browse.focus.grid_index, 0);
    }

    #[test]
    fn columns_follow_viewport() {
        let mut state = loaded();
        assert_eq!(state.grid_columns(), 3);
        assert!(state.resize(40, 60));
        assert!(!state.resize(40, 60));
        assert_eq!(state.grid_columns(), 1);
    }

    #[test]
    fn pointer_hits_cards_and_categories() {
        let state = loaded();
        let layout = state.screen_layout(40, 120);

        let card = layout.card_rect(2);
        assert_eq!(state.hit_test(card.row + 1, card.col + 1), Some(Hit::Item(crate::app::focus::ListRegion::Grid, 2)));

        let row = layout.sidebar_items_row() + 1;
        assert_eq!(state.hit_test(row, 3), Some(Hit::Item(crate::app::focus::ListRegion::Sidebar, 1)));
        assert_eq!(state.hit_test(2, layout.search_box.col + 2), Some(Hit::SearchBox));
    }
}
