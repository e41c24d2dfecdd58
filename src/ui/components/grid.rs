//! Recipe card grid renderer.

use crate::ui::helpers::{fit, position_cursor, render_highlighted_text, text_width, truncate};
use crate::ui::layout::{Rect, ScreenLayout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardInfo, GridInfo};

/// Renders the results caption and the visible window of cards.
///
/// Cards that would not fit fully inside the grid area are not drawn.
///
/// # Parameters
///
/// * `grid` - Caption and the windowed cards, in slot order
/// * `layout` - Screen geometry; `card_rect` places each slot
/// * `theme` - Active color theme
///
/// The focused card is framed in `focus_border`. Query matches in titles use
/// the match highlight colors.
pub fn render_grid(grid: &GridInfo, layout: &ScreenLayout, theme: &Theme) {
    let area = layout.grid;
    if area.height == 0 {
        return;
    }

    position_cursor(area.row, area.col);
    print!("{}{}", Theme::fg(&theme.colors.text_dim), truncate(&grid.caption, area.width));
    print!("{}", Theme::reset());

    for (slot, card) in grid.cards.iter().enumerate() {
        let rect = layout.card_rect(slot);
        if rect.bottom() > area.bottom() {
            break;
        }
        render_card(card, rect, theme);
    }
}

/// One card:
///
/// ```text
/// ┌──────────────────────────┐
/// │ Blueberry Pancakes   25m │
/// │ Breakfast · Vegetarian   │
/// └──────────────────────────┘
/// ```
fn render_card(card: &CardInfo, rect: Rect, theme: &Theme) {
    let inner = rect.width.saturating_sub(2);
    let frame = if card.focused {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.focus_border))
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(rect.row, rect.col);
    print!("{frame}┌{}┐{}", "─".repeat(inner), Theme::reset());

    // Title row: " title" + gap + " 25m " + " "
    let pill = format!(" {} ", card.time_pill);
    let pill_width = text_width(&pill);
    let title_width = inner.saturating_sub(pill_width + 3);
    let title = fit(&card.title, title_width);
    let highlight = card.highlight.and_then(|(start, end)| {
        let visible = if text_width(&card.title) > title_width {
            title_width.saturating_sub(1)
        } else {
            title_width
        };
        (start < visible).then_some((start, end.min(visible)))
    });

    let text_style = if card.focused {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(rect.row + 1, rect.col);
    print!("{frame}│{}{text_style} ", Theme::reset());
    render_highlighted_text(&title, highlight, theme, &text_style);
    print!(" ");
    if pill_width + 2 <= inner {
        print!("{}{}", Theme::fg(&theme.colors.time_pill_fg), Theme::bg(&theme.colors.time_pill_bg));
        print!("{pill}{}", Theme::reset());
        print!(" ");
    } else {
        print!("{}", " ".repeat(inner.saturating_sub(title_width + 2)));
    }
    print!("{frame}│{}", Theme::reset());

    position_cursor(rect.row + 2, rect.col);
    print!("{frame}│{}", Theme::reset());
    print!("{} {} ", Theme::fg(&theme.colors.text_dim), fit(&card.meta, inner.saturating_sub(2)));
    print!("{frame}│{}", Theme::reset());

    position_cursor(rect.row + 3, rect.col);
    print!("{frame}└{}┘{}", "─".repeat(inner), Theme::reset());
}
