//! Directional focus state machine.
//!
//! Maps the six remote-style inputs (`Left`, `Right`, `Up`, `Down`, `Enter`,
//! `Back`) to focus transitions across the four screen regions. The machine is
//! a pure function [`step`] from the current [`BrowseState`] and an [`Input`]
//! to the next state; it never touches rendering or I/O.
//!
//! # Transitions
//!
//! | Region  | Left        | Right       | Up           | Down         | Enter                    |
//! |---------|-------------|-------------|--------------|--------------|--------------------------|
//! | search  | sidebar     | grid        | sidebar      | grid         | no-op                    |
//! | sidebar | stay        | grid        | index - 1    | index + 1    | select category, grid    |
//! | grid    | index - 1   | index + 1   | index - cols | index + cols | open focused recipe      |
//! | detail  | no-op       | no-op       | no-op        | no-op        | close, grid              |
//!
//! Moves saturate at the ends of a list; nothing wraps.
//!
//! # Back
//!
//! First match wins: close the detail overlay, else clear the query, else reset
//! the category to `All`, else do nothing.
//!
//! # Index Reset
//!
//! Any change of the filter criteria moves the grid index back to 0. Selecting
//! the category that is already active is not a change.

use super::filter::FilterCriteria;
use crate::domain::{Category, Recipe, RecipeId};

/// A discrete navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Left,
    Right,
    Up,
    Down,

    /// Activate: select a category, open or close a recipe.
    Enter,

    /// Undo one level; see the module docs for the precedence.
    Back,
}

/// The focusable screen region.
///
/// The detail overlay carries the id of the open recipe, so a recipe is open
/// exactly when the region is `Detail`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Region {
    Search,
    Sidebar,
    #[default]
    Grid,
    Detail(RecipeId),
}

impl Region {
    /// `true` while the detail overlay is open.
    #[must_use]
    pub const fn is_detail(&self) -> bool {
        matches!(self, Self::Detail(_))
    }

    /// Lowercase region name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Sidebar => "sidebar",
            Self::Grid => "grid",
            Self::Detail(_) => "detail",
        }
    }
}

/// A region holding an indexed list that pointer hover and click can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRegion {
    Sidebar,
    Grid,
}

/// Active region plus the highlighted index of each list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    pub region: Region,

    /// Highlighted category, in `[0, category_count)`.
    pub sidebar_index: usize,

    /// Highlighted card, in `[0, visible_count)`, or 0 when nothing is visible.
    pub grid_index: usize,
}

impl FocusState {
    /// Id of the recipe shown in the detail overlay, if it is open.
    #[must_use]
    pub const fn open_recipe(&self) -> Option<&RecipeId> {
        match &self.region {
            Region::Detail(id) => Some(id),
            _ => None,
        }
    }

    /// Clamps both indices into their list bounds (0 for an empty list).
    pub fn clamp(&mut self, category_count: usize, visible_count: usize) {
        self.sidebar_index = self.sidebar_index.min(last_index(category_count));
        self.grid_index = self.grid_index.min(last_index(visible_count));
    }
}

/// Everything the state machine reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    /// Active region and list indices.
    pub focus: FocusState,

    /// Active category and query; what the grid shows.
    pub criteria: FilterCriteria,
}

/// Read-only view of the lists the machine navigates over.
#[derive(Debug, Clone, Copy)]
pub struct NavContext<'a> {
    /// Sidebar entries, `All` first.
    pub categories: &'a [Category],

    /// Recipes visible under the current criteria, in grid order.
    pub visible: &'a [&'a Recipe],

    /// Cards per grid row as laid out by the renderer. Values below 1 are
    /// treated as 1.
    pub columns: usize,
}

const fn last_index(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Computes the state following `input`.
///
/// Inputs that make no sense in the current region leave the state unchanged.
///
/// # Parameters
///
/// * `state` - Current browse state
/// * `input` - One of the six directional inputs
/// * `ctx` - Category list, visible recipes and column count for this frame
///
/// # Returns
///
/// The next state. Equal to `state` when the input had no effect.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::app::{focus, BrowseState, Input, NavContext};
/// use recipe_explorer::domain::Category;
///
/// let categories = [Category::All, Category::from_label("Dessert")];
/// let ctx = NavContext { categories: &categories, visible: &[], columns: 3 };
///
/// let state = focus::step(&BrowseState::default(), Input::Left, &ctx);
/// assert_eq!(state, BrowseState::default());
/// ```
#[must_use]
pub fn step(state: &BrowseState, input: Input, ctx: &NavContext<'_>) -> BrowseState {
    let mut next = state.clone();
    let columns = ctx.columns.max(1);
    let visible_count = ctx.visible.len();

    match (&state.focus.region, input) {
        (_, Input::Back) => back(&mut next),

        (Region::Search, Input::Left | Input::Up) => next.focus.region = Region::Sidebar,
        (Region::Search, Input::Right | Input::Down) => next.focus.region = Region::Grid,
        (Region::Search, Input::Enter) | (Region::Sidebar, Input::Left) => {}

        (Region::Sidebar, Input::Right) => next.focus.region = Region::Grid,
        (Region::Sidebar, Input::Up) => {
            next.focus.sidebar_index = state.focus.sidebar_index.saturating_sub(1);
        }
        (Region::Sidebar, Input::Down) => {
            next.focus.sidebar_index = (state.focus.sidebar_index + 1).min(last_index(ctx.categories.len()));
        }
        (Region::Sidebar, Input::Enter) => {
            if let Some(category) = ctx.categories.get(state.focus.sidebar_index) {
                select_category(&mut next, category.clone());
            }
            next.focus.region = Region::Grid;
        }

        (Region::Grid, Input::Left | Input::Right | Input::Up | Input::Down) if visible_count == 0 => {}
        (Region::Grid, Input::Left) => {
            next.focus.grid_index = state.focus.grid_index.saturating_sub(1);
        }
        (Region::Grid, Input::Right) => {
            next.focus.grid_index = (state.focus.grid_index + 1).min(last_index(visible_count));
        }
        (Region::Grid, Input::Up) => {
            next.focus.grid_index = state.focus.grid_index.saturating_sub(columns);
        }
        (Region::Grid, Input::Down) => {
            next.focus.grid_index = (state.focus.grid_index + columns).min(last_index(visible_count));
        }
        (Region::Grid, Input::Enter) => {
            if let Some(recipe) = ctx.visible.get(state.focus.grid_index) {
                next.focus.region = Region::Detail(recipe.id.clone());
            }
        }

        (Region::Detail(_), Input::Enter) => next.focus.region = Region::Grid,
        (Region::Detail(_), _) => {}
    }

    next
}

/// Applies the Back precedence: detail, then query, then category.
fn back(next: &mut BrowseState) {
    if next.focus.region.is_detail() {
        next.focus.region = Region::Grid;
    } else if next.criteria.is_default() {
        tracing::debug!("back pressed at root");
    } else if !next.criteria.query.is_empty() {
        next.criteria.query.clear();
        next.focus.grid_index = 0;
    } else {
        next.criteria.category = Category::All;
        next.focus.grid_index = 0;
    }
}

/// Activates `category`. Reselecting the active category keeps the grid index.
fn select_category(next: &mut BrowseState, category: Category) {
    if next.criteria.category != category {
        next.criteria.category = category;
        next.focus.grid_index = 0;
    }
}

/// Replaces the query text. The region is unchanged; the grid index resets
/// when the text actually changes.
#[must_use]
pub fn edit_query(state: &BrowseState, query: &str) -> BrowseState {
    let mut next = state.clone();
    if next.criteria.query != query {
        next.criteria.query = query.to_string();
        next.focus.grid_index = 0;
    }
    next
}

/// Gives the search box focus, closing the detail overlay if it is open.
#[must_use]
pub fn focus_search(state: &BrowseState) -> BrowseState {
    let mut next = state.clone();
    next.focus.region = Region::Search;
    next
}

/// Closes the detail overlay. No-op if it is not open.
#[must_use]
pub fn close_detail(state: &BrowseState) -> BrowseState {
    let mut next = state.clone();
    if next.focus.region.is_detail() {
        next.focus.region = Region::Grid;
    }
    next
}

/// Pointer hover: highlights entry `index` of `list` without moving focus.
///
/// Ignored while the detail overlay is open or when `index` is out of range.
#[must_use]
pub fn hover(state: &BrowseState, list: ListRegion, index: usize, ctx: &NavContext<'_>) -> BrowseState {
    let mut next = state.clone();
    if state.focus.region.is_detail() {
        return next;
    }
    match list {
        ListRegion::Sidebar if index < ctx.categories.len() => next.focus.sidebar_index = index,
        ListRegion::Grid if index < ctx.visible.len() => next.focus.grid_index = index,
        _ => {}
    }
    next
}

/// Pointer click: highlights entry `index` of `list` and activates it.
///
/// A category click selects the category and focuses the grid; a card click
/// opens the recipe. Ignored while the detail overlay is open or when `index`
/// is out of range.
#[must_use]
pub fn click(state: &BrowseState, list: ListRegion, index: usize, ctx: &NavContext<'_>) -> BrowseState {
    let mut next = state.clone();
    if state.focus.region.is_detail() {
        return next;
    }
    match list {
        ListRegion::Sidebar => {
            if let Some(category) = ctx.categories.get(index) {
                next.focus.sidebar_index = index;
                select_category(&mut next, category.clone());
                next.focus.region = Region::Grid;
            }
        }
        ListRegion::Grid => {
            if let Some(recipe) = ctx.visible.get(index) {
                next.focus.grid_index = index;
                next.focus.region = Region::Detail(recipe.id.clone());
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::filtered;
    use crate::domain::derive_categories;
    use proptest::prelude::*;

    fn recipe(id: usize, categories: &[&str]) -> Recipe {
        Recipe {
            id: RecipeId::new(id.to_string()),
            title: format!("Recipe {id}"),
            time: 10,
            image: String::new(),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            ingredients: vec![],
            steps: vec![],
        }
    }

    fn nine() -> Vec<Recipe> {
        (0..9).map(|i| recipe(i, &["Main"])).collect()
    }

    fn grid_at(index: usize) -> BrowseState {
        BrowseState {
            focus: FocusState {
                region: Region::Grid,
                sidebar_index: 0,
                grid_index: index,
            },
            criteria: FilterCriteria::default(),
        }
    }

    #[test]
    fn initial_state_focuses_grid() {
        let state = BrowseState::default();
        assert_eq!(state.focus.region, Region::Grid);
        assert_eq!(state.focus.sidebar_index, 0);
        assert_eq!(state.focus.grid_index, 0);
        assert!(state.focus.open_recipe().is_none());
        assert!(state.criteria.is_default());
    }

    #[test]
    fn grid_rows_move_by_column_count_and_saturate() {
        let recipes = nine();
        let visible: Vec<&Recipe> = recipes.iter().collect();
        let categories = derive_categories(&recipes);
        let ctx = NavContext { categories: &categories, visible: &visible, columns: 3 };

        assert_eq!(step(&grid_at(0), Input::Down, &ctx).focus.grid_index, 3);
        assert_eq!(step(&grid_at(7), Input::Down, &ctx).focus.grid_index, 8);
        assert_eq!(step(&grid_at(1), Input::Up, &ctx).focus.grid_index, 0);
        assert_eq!(step(&grid_at(8), Input::Right, &ctx).focus.grid_index, 8);
        assert_eq!(step(&grid_at(0), Input::Left, &ctx).focus.grid_index, 0);
    }

    #[test]
    fn zero_columns_behave_as_one() {
        let recipes = nine();
        let visible: Vec<&Recipe> = recipes.iter().collect();
        let ctx = NavContext { categories: &[Category::All], visible: &visible, columns: 0 };
        assert_eq!(step(&grid_at(4), Input::Down, &ctx).focus.grid_index, 5);
    }

    #[test]
    fn search_region_moves_out() {
        let ctx = NavContext { categories: &[Category::All], visible: &[], columns: 3 };
        let search = focus_search(&BrowseState::default());
        assert_eq!(search.focus.region, Region::Search);

        assert_eq!(step(&search, Input::Left, &ctx).focus.region, Region::Sidebar);
        assert_eq!(step(&search, Input::Up, &ctx).focus.region, Region::Sidebar);
        assert_eq!(step(&search, Input::Right, &ctx).focus.region, Region::Grid);
        assert_eq!(step(&search, Input::Down, &ctx).focus.region, Region::Grid);
        assert_eq!(step(&search, Input::Enter, &ctx), search);
    }

    #[test]
    fn sidebar_enter_selects_category_and_focuses_grid() {
        let recipes = vec![
            recipe(1, &["Main"]),
            recipe(2, &["Breakfast"]),
            recipe(3, &["Breakfast", "Quick"]),
        ];
        let categories = derive_categories(&recipes);
        let all: Vec<&Recipe> = recipes.iter().collect();
        let ctx = NavContext { categories: &categories, visible: &all, columns: 3 };

        let mut state = grid_at(2);
        state.focus.region = Region::Sidebar;
        state = step(&state, Input::Down, &ctx);
        assert_eq!(categories[state.focus.sidebar_index].label(), "Breakfast");

        let state = step(&state, Input::Enter, &ctx);
        assert_eq!(state.criteria.category, Category::from_label("Breakfast"));
        assert_eq!(state.focus.region, Region::Grid);
        assert_eq!(state.focus.grid_index, 0);

        let visible = filtered(&recipes, &state.criteria);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.has_category("Breakfast")));
    }

    #[test]
    fn reselecting_active_category_keeps_grid_index() {
        let recipes = nine();
        let visible: Vec<&Recipe> = recipes.iter().collect();
        let categories = derive_categories(&recipes);
        let ctx = NavContext { categories: &categories, visible: &visible, columns: 3 };

        let mut state = grid_at(5);
        state.focus.region = Region::Sidebar;
        let state = step(&state, Input::Enter, &ctx);
        assert_eq!(state.criteria.category, Category::All);
        assert_eq!(state.focus.grid_index, 5);
    }

    #[test]
    fn sidebar_moves_saturate() {
        let categories = vec![Category::All, Category::from_label("Main")];
        let ctx = NavContext { categories: &categories, visible: &[], columns: 3 };

        let mut state = BrowseState::default();
        state.focus.region = Region::Sidebar;
        assert_eq!(step(&state, Input::Up, &ctx).focus.sidebar_index, 0);
        assert_eq!(step(&state, Input::Left, &ctx), state);

        state.focus.sidebar_index = 1;
        assert_eq!(step(&state, Input::Down, &ctx).focus.sidebar_index, 1);
        assert_eq!(step(&state, Input::Right, &ctx).focus.region, Region::Grid);
    }

    #[test]
    fn detail_opens_and_back_returns_to_same_card() {
        let recipes = nine();
        let visible: Vec<&Recipe> = recipes.iter().collect();
        let ctx = NavContext { categories: &[Category::All], visible: &visible, columns: 3 };

        let opened = step(&grid_at(4), Input::Enter, &ctx);
        assert_eq!(opened.focus.open_recipe(), Some(&RecipeId::new("4")));

        for input in [Input::Left, Input::Right, Input::Up, Input::Down] {
            assert_eq!(step(&opened, input, &ctx), opened);
        }

        let closed = step(&opened, Input::Back, &ctx);
        assert_eq!(closed.focus.region, Region::Grid);
        assert!(closed.focus.open_recipe().is_none());
        assert_eq!(closed.focus.grid_index, 4);

        let closed_by_enter = step(&opened, Input::Enter, &ctx);
        assert_eq!(closed_by_enter, closed);
    }

    #[test]
    fn back_clears_query_then_category_then_stops() {
        let recipes = nine();
        let visible: Vec<&Recipe> = recipes.iter().collect();
        let ctx = NavContext { categories: &[Category::All], visible: &visible, columns: 3 };

        let mut state = grid_at(2);
        state.focus.region = Region::Sidebar;
        state.criteria = FilterCriteria {
            category: Category::from_label("Main"),
            query: "stew".to_string(),
        };

        let state = step(&state, Input::Back, &ctx);
        assert!(state.criteria.query.is_empty());
        assert_eq!(state.criteria.category, Category::from_label("Main"));
        assert_eq!(state.focus.region, Region::Sidebar);
        assert_eq!(state.focus.grid_index, 0);

        let state = step(&state, Input::Back, &ctx);
        assert_eq!(state.criteria.category, Category::All);
        assert_eq!(state.focus.region, Region::Sidebar);

        let root = step(&state, Input::Back, &ctx);
        assert_eq!(root, state);
    }

    #[test]
    fn empty_grid_ignores_navigation() {
        let ctx = NavContext { categories: &[Category::All], visible: &[], columns: 3 };
        let state = edit_query(&grid_at(0), "zz");
        for input in [Input::Left, Input::Right, Input::Up, Input::Down, Input::Enter] {
            assert_eq!(step(&state, input, &ctx), state);
        }
        assert_eq!(state.focus.grid_index, 0);
    }

    #[test]
    fn query_edits_reset_grid_only_on_change() {
        let state = grid_at(4);
        let edited = edit_query(&state, "pie");
        assert_eq!(edited.focus.grid_index, 0);
        assert_eq!(edited.criteria.query, "pie");

        let mut moved = edited.clone();
        moved.focus.grid_index = 2;
        assert_eq!(edit_query(&moved, "pie").focus.grid_index, 2);
    }

    #[test]
    fn focus_search_closes_detail() {
        let mut state = grid_at(1);
        state.focus.region = Region::Detail(RecipeId::new("1"));
        let state = focus_search(&state);
        assert_eq!(state.focus.region, Region::Search);
        assert!(state.focus.open_recipe().is_none());
        assert_eq!(close_detail(&state), state);
    }

    #[test]
    fn hover_moves_index_but_not_region() {
        let recipes = nine();
        let visible: Vec<&Recipe> = recipes.iter().collect();
        let categories = vec![Category::All, Category::from_label("Main")];
        let ctx = NavContext { categories: &categories, visible: &visible, columns: 3 };

        let mut state = BrowseState::default();
        state.focus.region = Region::Search;

        let hovered = hover(&state, ListRegion::Grid, 6, &ctx);
        assert_eq!(hovered.focus.grid_index, 6);
        assert_eq!(hovered.focus.region, Region::Search);

        let hovered = hover(&hovered, ListRegion::Sidebar, 1, &ctx);
        assert_eq!(hovered.focus.sidebar_index, 1);
        assert_eq!(hovered.focus.region, Region::Search);

        assert_eq!(hover(&hovered, ListRegion::Grid, 42, &ctx), hovered);
    }

    #[test]
    fn click_moves_index_and_region() {
        let recipes = nine();
        let visible: Vec<&Recipe> = recipes.iter().collect();
        let categories = vec![Category::All, Category::from_label("Main")];
        let ctx = NavContext { categories: &categories, visible: &visible, columns: 3 };

        let state = grid_at(3);
        let clicked = click(&state, ListRegion::Sidebar, 1, &ctx);
        assert_eq!(clicked.focus.sidebar_index, 1);
        assert_eq!(clicked.criteria.category, Category::from_label("Main"));
        assert_eq!(clicked.focus.region, Region::Grid);
        assert_eq!(clicked.focus.grid_index, 0);

        let opened = click(&clicked, ListRegion::Grid, 7, &ctx);
        assert_eq!(opened.focus.grid_index, 7);
        assert_eq!(opened.focus.open_recipe(), Some(&RecipeId::new("7")));

        assert_eq!(click(&opened, ListRegion::Grid, 2, &ctx), opened);
        assert_eq!(hover(&opened, ListRegion::Grid, 2, &ctx), opened);
    }

    #[test]
    fn clamp_fits_indices_to_new_sizes() {
        let mut focus = FocusState {
            region: Region::Grid,
            sidebar_index: 5,
            grid_index: 9,
        };
        focus.clamp(3, 4);
        assert_eq!((focus.sidebar_index, focus.grid_index), (2, 3));
        focus.clamp(1, 0);
        assert_eq!((focus.sidebar_index, focus.grid_index), (0, 0));
    }

    fn input_strategy() -> impl Strategy<Value = Input> {
        prop_oneof![
            Just(Input::Left),
            Just(Input::Right),
            Just(Input::Up),
            Just(Input::Down),
            Just(Input::Enter),
            Just(Input::Back),
        ]
    }

    proptest! {
        #[test]
        fn indices_stay_in_bounds(
            recipe_count in 0usize..20,
            category_count in 1usize..6,
            columns in 1usize..6,
            inputs in prop::collection::vec(input_strategy(), 0..64),
        ) {
            let recipes: Vec<Recipe> = (0..recipe_count).map(|i| recipe(i, &[])).collect();
            let visible: Vec<&Recipe> = recipes.iter().collect();
            let categories: Vec<Category> = std::iter::once(Category::All)
                .chain((1..category_count).map(|i| Category::Named(format!("C{i}"))))
                .collect();
            let ctx = NavContext { categories: &categories, visible: &visible, columns };

            let mut state = BrowseState::default();
            for input in inputs {
                state = step(&state, input, &ctx);
                prop_assert!(state.focus.sidebar_index < category_count);
                if recipe_count == 0 {
                    prop_assert_eq!(state.focus.grid_index, 0);
                } else {
                    prop_assert!(state.focus.grid_index < recipe_count);
                }
                if let Some(id) = state.focus.open_recipe() {
                    prop_assert!(visible.iter().any(|r| &r.id == id));
                }
            }
        }

        #[test]
        fn back_reaches_a_fixed_point(
            inputs in prop::collection::vec(input_strategy(), 0..32),
        ) {
            let recipes: Vec<Recipe> = (0..9).map(|i| recipe(i, &["Main"])).collect();
            let visible: Vec<&Recipe> = recipes.iter().collect();
            let categories = derive_categories(&recipes);
            let ctx = NavContext { categories: &categories, visible: &visible, columns: 3 };

            let mut state = BrowseState::default();
            for input in inputs {
                state = step(&state, input, &ctx);
            }
            for _ in 0..3 {
                state = step(&state, Input::Back, &ctx);
            }

            prop_assert!(state.criteria.is_default());
            prop_assert!(state.focus.open_recipe().is_none());
            prop_assert_eq!(step(&state, Input::Back, &ctx), state.clone());
        }
    }
}
