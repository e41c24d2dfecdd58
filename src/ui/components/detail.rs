//! Recipe detail overlay renderer.

use crate::ui::helpers::{fit, position_cursor, text_width, truncate, wrap_text};
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// One body line of the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DetailLine {
    /// Empty spacer row.
    Blank,
    /// Section title, drawn bold in the accent color.
    Heading(String),
    /// Ingredient or step text.
    Text(String),
    /// Secondary text such as the image reference.
    Dim(String),
}

/// Lays out the overlay body for an inner width of `width` cells.
///
/// Ingredients are bulleted and steps numbered; wrapped lines are indented
/// under their first line.
pub(crate) fn detail_lines(detail: &DetailInfo, width: usize) -> Vec<DetailLine> {
    let mut lines = Vec::new();

    if !detail.image.is_empty() {
        lines.push(DetailLine::Dim(truncate(&format!("Image: {}", detail.image), width)));
        lines.push(DetailLine::Blank);
    }

    lines.push(DetailLine::Heading("Ingredients".to_string()));
    for ingredient in &detail.ingredients {
        push_item(&mut lines, "  • ", ingredient, width);
    }

    lines.push(DetailLine::Blank);
    lines.push(DetailLine::Heading("Steps".to_string()));
    for (idx, step) in detail.steps.iter().enumerate() {
        push_item(&mut lines, &format!("  {}. ", idx + 1), step, width);
    }

    lines
}

/// Appends `text` wrapped to `width`, with `prefix` on the first line and
/// matching indentation on the rest.
fn push_item(lines: &mut Vec<DetailLine>, prefix: &str, text: &str, width: usize) {
    let indent = text_width(prefix);
    let wrapped = wrap_text(text, width.saturating_sub(indent));
    for (idx, part) in wrapped.into_iter().enumerate() {
        let lead = if idx == 0 { prefix.to_string() } else { " ".repeat(indent) };
        lines.push(DetailLine::Text(format!("{lead}{part}")));
    }
}

/// Renders the overlay box centered over the body.
///
/// ```text
/// ┌──────────────────────────────────────────┐
/// │ Classic Apple Pie · 90 minutes       [×] │
/// ├──────────────────────────────────────────┤
/// │ Image: /images/apple-pie.jpg             │
/// │                                          │
/// │ Ingredients                              │
/// │   • 2 pie crusts                         │
/// │ ...                                      │
/// └──────────────────────────────────────────┘
/// ```
///
/// Body lines that do not fit are cut, the last visible line showing `…`.
///
/// # Parameters
///
/// * `detail` - The open recipe's dialog content
/// * `layout` - Screen geometry; supplies the box and close button rectangles
/// * `theme` - Active color theme
pub fn render_detail(detail: &DetailInfo, layout: &ScreenLayout, theme: &Theme) {
    let area = layout.detail_box();
    if area.width < 10 || area.height < 5 {
        return;
    }
    let inner = area.width - 2;
    let frame = Theme::fg(&theme.colors.detail_border);

    position_cursor(area.row, area.col);
    print!("{frame}┌{}┐{}", "─".repeat(inner), Theme::reset());

    let close = layout.close_button();
    let title_width = inner.saturating_sub(close.width + 3);
    let title = truncate(&detail.title, title_width);
    let time = truncate(
        &format!(" · {}", detail.time_label),
        title_width.saturating_sub(text_width(&title) + 1),
    );
    let used = 1 + text_width(&title) + text_width(&time);

    position_cursor(area.row + 1, area.col);
    print!("{frame}│{}", Theme::reset());
    print!(" {}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
    print!("{}{time}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    print!("{}", " ".repeat(inner.saturating_sub(used + close.width + 1)));
    print!("{}[×]{} ", Theme::fg(&theme.colors.focus_border), Theme::reset());
    print!("{frame}│{}", Theme::reset());

    position_cursor(area.row + 2, area.col);
    print!("{frame}├{}┤{}", "─".repeat(inner), Theme::reset());

    let body_rows = area.height.saturating_sub(4);
    let content_width = inner.saturating_sub(2);
    let lines = detail_lines(detail, content_width);
    let overflow = lines.len() > body_rows;

    for slot in 0..body_rows {
        position_cursor(area.row + 3 + slot, area.col);
        print!("{frame}│{} ", Theme::reset());

        let line = if overflow && slot + 1 == body_rows {
            Some(DetailLine::Dim("…".to_string()))
        } else {
            lines.get(slot).cloned()
        };

        match line {
            Some(DetailLine::Heading(text)) => {
                print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.brand_fg));
                print!("{}", fit(&text, content_width));
            }
            Some(DetailLine::Text(text)) => {
                print!("{}{}", Theme::fg(&theme.colors.text_normal), fit(&text, content_width));
            }
            Some(DetailLine::Dim(text)) => {
                print!("{}{}", Theme::fg(&theme.colors.text_dim), fit(&text, content_width));
            }
            Some(DetailLine::Blank) | None => print!("{}", " ".repeat(content_width)),
        }
        print!("{} {frame}│{}", Theme::reset(), Theme::reset());
    }

    position_cursor(area.bottom(), area.col);
    print!("{frame}└{}┘{}", "─".repeat(inner), Theme::reset());
}
