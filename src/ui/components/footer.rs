//! Footer component renderer.
//!
//! One dimmed line of key hints for the focused region.

use crate::ui::helpers::{position_cursor, truncate, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the key hints centered on `row`, truncated to the pane width.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `footer` - Hint text for the focused region
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
///
/// # Layout
///
/// ```text
/// [left padding] keybindings [right padding]
/// ```
///
/// The line is padded to the full width; an odd remainder goes to the right.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = text_width(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}
