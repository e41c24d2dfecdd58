//! Screen geometry and pointer hit testing.
//!
//! All positions are 1-indexed terminal cells, matching
//! [`position_cursor`](crate::ui::helpers::position_cursor).
//!
//! ```text
//! row 1..=3   Recipe Explorer  ┌ search box ──────────────────┐
//! row 4       ─────────────────────────────────────────────────
//! body        Categories     │ All · 13 recipes
//!                            │ ┌ card ──────┐  ┌ card ──────┐
//!               ● All        │ │ title  25m │  │ title  40m │
//!               ● Breakfast  │ │ meta       │  │ meta       │
//!                            │ └────────────┘  └────────────┘
//! rows - 1    ─────────────────────────────────────────────────
//! rows        key hints
//! ```
//!
//! The detail overlay is a centered box drawn over the body.

use crate::app::focus::ListRegion;
use crate::ui::viewmodel::UIViewModel;
use std::ops::Range;

/// Brand text in the top navigation.
pub const BRAND: &str = "Recipe Explorer";

/// Rows taken by one recipe card, frame included.
pub const CARD_HEIGHT: usize = 4;

/// Blank rows between card rows.
const CARD_ROW_GAP: usize = 1;

const HEADER_HEIGHT: usize = 3;
const BRAND_COL: usize = 3;
const DETAIL_MAX_WIDTH: usize = 76;

/// Grid and sidebar sizing, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Card width including its frame. Default 28.
    pub card_width: usize,

    /// Blank columns between cards in a row. Default 2.
    pub card_gap: usize,

    /// Sidebar width including its separator. Default 22.
    pub sidebar_width: usize,
}

impl LayoutConfig {
    /// Narrowest card that still fits a frame, a title cell and a time pill.
    pub const MIN_CARD_WIDTH: usize = 8;

    /// Narrowest sidebar that still shows the `Categories` title.
    pub const MIN_SIDEBAR_WIDTH: usize = 12;
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 28,
            card_gap: 2,
            sidebar_width: 22,
        }
    }
}

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Top row, 1-indexed.
    pub row: usize,

    /// Left column, 1-indexed.
    pub col: usize,

    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// `true` if the cell at `row`/`col` lies inside. An empty rectangle
    /// contains nothing.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.row + self.height && col >= self.col && col < self.col + self.width
    }

    /// Last row inside the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.row + self.height.saturating_sub(1)
    }
}

/// What the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The search input frame.
    SearchBox,

    /// The `[×]` button of the detail overlay.
    CloseButton,

    /// An entry of the sidebar or the grid, by list index (not window slot).
    Item(ListRegion, usize),
}

/// Number of cards per grid row for a grid area `width` cells wide.
///
/// `max(1, floor((width + gap) / (card_width + gap)))`. The trailing card
/// needs no gap after it, hence the `+ gap` on the width.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::ui::layout::grid_columns;
///
/// assert_eq!(grid_columns(94, 28, 2), 3);
/// assert_eq!(grid_columns(10, 28, 2), 1);
/// ```
#[must_use]
pub const fn grid_columns(width: usize, card_width: usize, gap: usize) -> usize {
    let cell = card_width + gap;
    if cell == 0 {
        return 1;
    }
    let columns = (width + gap) / cell;
    if columns == 0 {
        1
    } else {
        columns
    }
}

/// First entry of a `capacity`-sized window that keeps `focused` visible.
///
/// The window only scrolls once the focused entry would fall off the end.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::ui::layout::window_start;
///
/// assert_eq!(window_start(2, 4), 0);
/// assert_eq!(window_start(5, 4), 2);
/// ```
#[must_use]
pub const fn window_start(focused: usize, capacity: usize) -> usize {
    if capacity == 0 {
        focused
    } else {
        focused.saturating_sub(capacity - 1)
    }
}

/// Resolved geometry for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub rows: usize,
    pub cols: usize,

    /// Framed search input in the top band.
    pub search_box: Rect,

    /// Category column, title included.
    pub sidebar: Rect,

    /// Area right of the sidebar: caption line, then card rows.
    pub grid: Rect,

    pub card_width: usize,
    pub card_gap: usize,

    /// Cards per grid row; at least 1.
    pub columns: usize,
}

impl ScreenLayout {
    /// Computes the geometry for a `rows` x `cols` pane.
    ///
    /// Never fails: on panes too small for a region its rectangle collapses
    /// to zero height or width and nothing is drawn there.
    #[must_use]
    pub fn new(rows: usize, cols: usize, config: &LayoutConfig) -> Self {
        let body_top = HEADER_HEIGHT + 2;
        let body_height = rows.saturating_sub(2).saturating_sub(body_top - 1);

        let search_col = BRAND_COL + BRAND.len() + 3;
        let search_box = Rect {
            row: 1,
            col: search_col,
            width: cols.saturating_sub(search_col),
            height: HEADER_HEIGHT,
        };

        let sidebar_width = config.sidebar_width.min(cols / 3);
        let sidebar = Rect {
            row: body_top,
            col: 1,
            width: sidebar_width,
            height: body_height,
        };

        // Sidebar, separator, one blank cell on each side of the grid.
        let grid_col = sidebar_width + 3;
        let grid = Rect {
            row: body_top,
            col: grid_col,
            width: cols.saturating_sub(grid_col),
            height: body_height,
        };

        let card_width = config.card_width.min(grid.width).max(1);
        let columns = grid_columns(grid.width, card_width, config.card_gap);

        Self {
            rows,
            cols,
            search_box,
            sidebar,
            grid,
            card_width,
            card_gap: config.card_gap,
            columns,
        }
    }

    /// Column of the vertical separator between sidebar and grid.
    #[must_use]
    pub const fn separator_col(&self) -> usize {
        self.sidebar.width + 1
    }

    /// Row of the sidebar's first category entry.
    #[must_use]
    pub const fn sidebar_items_row(&self) -> usize {
        self.sidebar.row + 2
    }

    /// Number of category entries that fit in the sidebar.
    #[must_use]
    pub const fn sidebar_capacity(&self) -> usize {
        self.sidebar.height.saturating_sub(2)
    }

    /// Row of the first card row (below the results caption).
    #[must_use]
    pub const fn cards_row(&self) -> usize {
        self.grid.row + 1
    }

    /// Number of card rows that fit in the grid area.
    #[must_use]
    pub const fn card_rows(&self) -> usize {
        let height = self.grid.height.saturating_sub(1);
        let rows = (height + CARD_ROW_GAP) / (CARD_HEIGHT + CARD_ROW_GAP);
        if rows == 0 {
            1
        } else {
            rows
        }
    }

    /// Category entries shown for the given focus, as a range of indices.
    #[must_use]
    pub fn sidebar_window(&self, count: usize, focused: usize) -> Range<usize> {
        let capacity = self.sidebar_capacity();
        let start = window_start(focused, capacity).min(count);
        start..(start + capacity).min(count)
    }

    /// Cards shown for the given focus, as a range of indices. Always starts
    /// on a row boundary.
    #[must_use]
    pub fn grid_window(&self, count: usize, focused: usize) -> Range<usize> {
        let first_row = window_start(focused / self.columns, self.card_rows());
        let start = (first_row * self.columns).min(count);
        start..(start + self.card_rows() * self.columns).min(count)
    }

    /// Frame of the card in window slot `slot` (0 = first visible card).
    #[must_use]
    pub const fn card_rect(&self, slot: usize) -> Rect {
        let row = slot / self.columns;
        let col = slot % self.columns;
        Rect {
            row: self.cards_row() + row * (CARD_HEIGHT + CARD_ROW_GAP),
            col: self.grid.col + col * (self.card_width + self.card_gap),
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }

    /// Frame of the detail overlay.
    #[must_use]
    pub fn detail_box(&self) -> Rect {
        let width = self.cols.saturating_sub(4).min(DETAIL_MAX_WIDTH);
        let height = self.rows.saturating_sub(4);
        Rect {
            row: 3,
            col: (self.cols.saturating_sub(width)) / 2 + 1,
            width,
            height,
        }
    }

    /// The `[×]` button in the detail overlay's title row.
    #[must_use]
    pub fn close_button(&self) -> Rect {
        let detail = self.detail_box();
        Rect {
            row: detail.row + 1,
            col: (detail.col + detail.width).saturating_sub(5),
            width: 3,
            height: 1,
        }
    }

    /// Maps a pointer position to the element under it.
    ///
    /// While the detail overlay is open only its close button reacts.
    ///
    /// # Parameters
    ///
    /// * `vm` - View model of the frame on screen; supplies the visible
    ///   windows of both lists
    /// * `row`, `col` - Pointer position, 1-indexed
    ///
    /// # Returns
    ///
    /// The element under the pointer, or `None` over blank space, frames and
    /// captions.
    #[must_use]
    pub fn hit_test(&self, vm: &UIViewModel, row: usize, col: usize) -> Option<Hit> {
        if vm.detail.is_some() {
            return self.close_button().contains(row, col).then_some(Hit::CloseButton);
        }

        if self.search_box.contains(row, col) {
            return Some(Hit::SearchBox);
        }

        if self.sidebar.contains(row, col) && row >= self.sidebar_items_row() {
            let slot = row - self.sidebar_items_row();
            if slot < vm.sidebar.items.len() {
                return Some(Hit::Item(ListRegion::Sidebar, vm.sidebar.first_index + slot));
            }
            return None;
        }

        let grid = vm.main.grid()?;
        (0..grid.cards.len())
            .find(|&slot| self.card_rect(slot).contains(row, col))
            .map(|slot| Hit::Item(ListRegion::Grid, grid.first_index + slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_card_cell_width() {
        assert_eq!(grid_columns(1600, 280, 24), 5);
        assert_eq!(grid_columns(88, 28, 2), 3);
        assert_eq!(grid_columns(87, 28, 2), 2);
        assert_eq!(grid_columns(10, 28, 2), 1);
        assert_eq!(grid_columns(0, 0, 0), 1);
    }

    #[test]
    fn window_scrolls_only_past_the_end() {
        assert_eq!(window_start(0, 3), 0);
        assert_eq!(window_start(2, 3), 0);
        assert_eq!(window_start(3, 3), 1);
        assert_eq!(window_start(9, 3), 7);
    }

    #[test]
    fn geometry_for_a_typical_pane() {
        let layout = ScreenLayout::new(40, 120, &LayoutConfig::default());

        assert_eq!(layout.sidebar.width, 22);
        assert_eq!(layout.separator_col(), 23);
        assert_eq!(layout.grid.col, 25);
        assert_eq!(layout.grid.width, 95);
        assert_eq!(layout.columns, 3);
        assert_eq!(layout.grid.row, 5);
        assert_eq!(layout.grid.bottom(), 38);

        // 33 usable rows hold 6 card rows of 4 plus gaps.
        assert_eq!(layout.card_rows(), 6);

        let second = layout.card_rect(1);
        assert_eq!((second.row, second.col), (6, 55));
        let fourth = layout.card_rect(3);
        assert_eq!((fourth.row, fourth.col), (11, 25));
    }

    #[test]
    fn narrow_panes_shrink_sidebar_and_cards() {
        let layout = ScreenLayout::new(20, 30, &LayoutConfig::default());
        assert_eq!(layout.sidebar.width, 10);
        assert_eq!(layout.grid.width, 17);
        assert_eq!(layout.card_width, 17);
        assert_eq!(layout.columns, 1);
    }

    #[test]
    fn grid_window_starts_on_row_boundary() {
        let layout = ScreenLayout::new(16, 120, &LayoutConfig::default());
        assert_eq!(layout.card_rows(), 2);

        assert_eq!(layout.grid_window(13, 0), 0..6);
        assert_eq!(layout.grid_window(13, 7), 3..9);
        assert_eq!(layout.grid_window(13, 12), 9..13);
        assert_eq!(layout.grid_window(0, 0), 0..0);
    }

    #[test]
    fn sidebar_window_is_clamped_to_count() {
        let layout = ScreenLayout::new(12, 120, &LayoutConfig::default());
        assert_eq!(layout.sidebar_capacity(), 4);
        assert_eq!(layout.sidebar_window(3, 0), 0..3);
        assert_eq!(layout.sidebar_window(10, 6), 3..7);
    }

    #[test]
    fn close_button_sits_in_detail_title_row() {
        let layout = ScreenLayout::new(40, 120, &LayoutConfig::default());
        let detail = layout.detail_box();
        assert_eq!(detail.width, 76);
        assert_eq!(detail.col, 23);

        let close = layout.close_button();
        assert_eq!(close.row, detail.row + 1);
        assert!(detail.contains(close.row, close.col + close.width - 1));
    }
}
