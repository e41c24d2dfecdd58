//! Loading and empty-result messages.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders the message (and dimmed subtitle) centered in `area`, a third of
/// the way down.
///
/// # Parameters
///
/// * `status` - Loading or empty-result message
/// * `area` - Rectangle to center in, normally the grid area
/// * `theme` - Active color theme
pub fn render_status(status: &StatusInfo, area: Rect, theme: &Theme) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let row = area.row + area.height / 3;

    print_centered(row, area, &status.message, &Theme::fg(&theme.colors.empty_state_fg));

    if let Some(subtitle) = &status.subtitle {
        if row < area.bottom() {
            let style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
            print_centered(row + 1, area, subtitle, &style);
        }
    }
}

fn print_centered(row: usize, area: Rect, text: &str, style: &str) {
    let text = truncate(text, area.width);
    let padding = area.width.saturating_sub(text_width(&text)) / 2;

    position_cursor(row, area.col + padding);
    print!("{style}{text}{}", Theme::reset());
}
