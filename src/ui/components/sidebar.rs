//! Category sidebar renderer.
//!
//! The active category is marked `●`, the others `○`. Only the window of
//! entries chosen by the view model is drawn.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SidebarInfo;

/// Renders the sidebar title, the visible category window and the vertical
/// separator to its right.
///
/// ```text
///  Categories
///
///  ● All
///  ○ Breakfast      <- focused: selection colors across the full width
///  ○ Dessert
/// ```
///
/// # Parameters
///
/// * `sidebar` - Title and the visible window of categories
/// * `layout` - Screen geometry; `sidebar` bounds the column
/// * `theme` - Active color theme
///
/// Narrower than 4 cells, nothing is drawn.
pub fn render_sidebar(sidebar: &SidebarInfo, layout: &ScreenLayout, theme: &Theme) {
    let area = layout.sidebar;
    if area.height == 0 || area.width < 4 {
        return;
    }

    position_cursor(area.row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", fit(&format!(" {}", sidebar.title), area.width));
    print!("{}", Theme::reset());

    let label_width = area.width.saturating_sub(4);
    for (slot, item) in sidebar.items.iter().enumerate() {
        let row = layout.sidebar_items_row() + slot;
        if row > area.bottom() {
            break;
        }
        position_cursor(row, 1);

        let marker = if item.active { "●" } else { "○" };
        let label = fit(&item.label, label_width);

        if item.focused {
            print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
            print!(" {marker} {label} ");
        } else if item.active {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.active_category_fg));
            print!(" {marker} {label} ");
        } else {
            print!("{} {marker} ", Theme::fg(&theme.colors.text_dim));
            print!("{}{label} ", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", Theme::reset());
    }

    print!("{}", Theme::fg(&theme.colors.border));
    for row in area.row..=area.bottom() {
        position_cursor(row, layout.separator_col());
        print!("│");
    }
    print!("{}", Theme::reset());
}
