//! Top navigation: brand and search box.

use crate::ui::helpers::{fit, position_cursor, text_width};
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TopNavInfo;

/// Renders the three-row top navigation band.
///
/// ```text
///                    ┌────────────────────────────────────┐
///   Recipe Explorer  │ Search recipes or ingredients...   │
///                    └────────────────────────────────────┘
/// ```
///
/// The search frame switches to `search_focus_border` while the search region
/// has focus, and a bar cursor follows the query.
pub fn render_top_nav(nav: &TopNavInfo, layout: &ScreenLayout, theme: &Theme) {
    let band = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();

    for row in 1..=3 {
        position_cursor(row, 1);
        print!("{band}{}{}", " ".repeat(layout.cols), Theme::reset());
    }

    position_cursor(2, 3);
    print!("{band}{}{}", Theme::bold(), Theme::fg(&theme.colors.brand_fg));
    print!("{}", nav.brand);
    print!("{}", Theme::reset());

    render_search_box(nav, layout, theme, &band);
}

/// Draws the framed search input. `band` is the escape sequence of the top
/// band background, printed before each frame piece.
fn render_search_box(nav: &TopNavInfo, layout: &ScreenLayout, theme: &Theme, band: &str) {
    let area = layout.search_box;
    if area.width < 4 {
        return;
    }
    let inner_width = area.width - 2;
    let frame = if nav.focused {
        Theme::fg(&theme.colors.search_focus_border)
    } else {
        Theme::fg(&theme.colors.search_bar_border)
    };

    position_cursor(area.row, area.col);
    print!("{band}{frame}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    position_cursor(area.row + 1, area.col);
    print!("{band}{frame}│{}", Theme::reset());
    print!("{band}");
    let content_width = inner_width.saturating_sub(2);
    if nav.query.is_empty() && !nav.focused {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" {} ", fit(&nav.placeholder, content_width));
    } else {
        // Keep the tail of long queries visible while typing.
        let skip = text_width(&nav.query).saturating_sub(content_width.saturating_sub(1));
        let shown: String = nav.query.chars().skip(skip).collect();
        let cursor = if nav.focused { "▏" } else { "" };
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(" {} ", fit(&format!("{shown}{cursor}"), content_width));
    }
    print!("{frame}│{}", Theme::reset());

    position_cursor(area.row + 2, area.col);
    print!("{band}{frame}└{}┘{}", "─".repeat(inner_width), Theme::reset());
}
