//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at the positions given by a
//! [`ScreenLayout`](crate::ui::layout::ScreenLayout):
//!
//! - `header`: brand and search box
//! - `sidebar`: category list
//! - `grid`: recipe cards
//! - `status`: loading and empty-result messages
//! - `detail`: the recipe overlay
//! - `footer`: key hints

mod detail;
mod footer;
mod grid;
mod header;
mod sidebar;
mod status;

pub use detail::render_detail;
pub use footer::render_footer;
pub use grid::render_grid;
pub use header::render_top_nav;
pub use sidebar::render_sidebar;
pub use status::render_status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Draws a full-width horizontal rule on `row`.
pub fn render_border(row: usize, color: &str, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
}
