//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer and by pointer hit testing. They hold display-ready text and
//! flags only; every decision about what is focused or visible has already
//! been made.
//!
//! Each part carries the semantic [`Role`] a screen reader would announce,
//! and interactive parts carry their accessible label.

/// Semantic role of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Top navigation band.
    Banner,
    /// Sidebar container.
    Navigation,
    /// The category list.
    Listbox,
    /// One category entry or recipe card.
    Option,
    /// The card grid.
    Grid,
    /// Close button of the detail overlay.
    Button,
    /// The detail overlay.
    Dialog,
    /// Loading and empty-result messages.
    Status,
}

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub top_nav: TopNavInfo,
    pub sidebar: SidebarInfo,
    pub main: MainContent,

    /// Present while a recipe is open.
    pub detail: Option<DetailInfo>,

    pub footer: FooterInfo,
}

/// Brand and search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopNavInfo {
    pub role: Role,
    pub brand: String,

    /// Current query text, shown verbatim.
    pub query: String,

    /// Shown instead of the query when it is empty.
    pub placeholder: String,
    pub search_label: String,
    pub focused: bool,
}

/// The category sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarInfo {
    pub role: Role,
    pub list_role: Role,
    pub label: String,
    pub title: String,

    /// Visible window of categories.
    pub items: Vec<CategoryItem>,

    /// Category index of `items[0]`.
    pub first_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItem {
    pub role: Role,
    pub label: String,

    /// This is the category currently filtering the grid.
    pub active: bool,

    /// The sidebar has focus and this entry is highlighted.
    pub focused: bool,
}

/// What the main area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainContent {
    Loading(StatusInfo),
    Empty(StatusInfo),
    Grid(GridInfo),
}

impl MainContent {
    #[must_use]
    pub const fn grid(&self) -> Option<&GridInfo> {
        match self {
            Self::Grid(grid) => Some(grid),
            Self::Loading(_) | Self::Empty(_) => None,
        }
    }
}

/// Loading or empty-result message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub role: Role,
    pub message: String,
    pub subtitle: Option<String>,
}

/// The recipe card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridInfo {
    pub role: Role,
    pub label: String,

    /// Line above the cards, e.g. `"Dessert · 3 recipes"`.
    pub caption: String,

    /// Visible window of cards, row-major.
    pub cards: Vec<CardInfo>,

    /// Recipe index of `cards[0]`.
    pub first_index: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    pub role: Role,

    /// `"{title}, {time} minutes"`.
    pub label: String,
    pub title: String,

    /// `"{time}m"`.
    pub time_pill: String,

    /// Categories joined by `" · "`.
    pub meta: String,
    pub focused: bool,

    /// Character range of the query match in `title`.
    pub highlight: Option<(usize, usize)>,
}

/// The open recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    pub role: Role,

    /// `"Recipe details for {title}"`.
    pub label: String,
    pub title: String,

    /// `"{time} minutes"`.
    pub time_label: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub close_role: Role,
    pub close_label: String,
}

/// Key hints for the focused region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
