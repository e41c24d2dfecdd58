//! Shared rendering utilities.
//!
//! Text measurement here counts `char`s. Dataset text is expected to be
//! single-width; wide glyphs may overhang by a cell.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col` (`ESC[{row};{col}H`).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` chars, ending in `…` when shortened.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::ui::helpers::truncate;
///
/// assert_eq!(truncate("Blueberry Pancakes", 10), "Blueberry…");
/// assert_eq!(truncate("Pie", 10), "Pie");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Truncates or right-pads `text` to exactly `width` chars.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let pad = width.saturating_sub(text_width(&cut));
    format!("{cut}{}", " ".repeat(pad))
}

/// Greedy word wrap to lines of at most `width` chars.
///
/// Words longer than a line are split. An empty input yields no lines.
///
/// # Parameters
///
/// * `text` - Text to wrap; runs of whitespace collapse to one space
/// * `width` - Maximum line width in chars; 0 is treated as 1
///
/// # Returns
///
/// The wrapped lines, none of them empty.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }

        let line_width = text_width(&line);
        if line_width > 0 && line_width + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Prints `text` with the char range `highlight` in match colors.
///
/// `base` is the escape sequence of the surrounding style; it is re-applied
/// after the highlighted part. The range is clamped to the text.
///
/// # Parameters
///
/// * `text` - Text to print
/// * `highlight` - Char range `(start, end)` to highlight, end exclusive
/// * `theme` - Supplies the match highlight colors
/// * `base` - Style to restore after the highlighted part
pub fn render_highlighted_text(text: &str, highlight: Option<(usize, usize)>, theme: &Theme, base: &str) {
    let Some((start, end)) = highlight else {
        print!("{text}");
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let end = end.min(chars.len());
    let start = start.min(end);

    let before: String = chars[..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    print!("{before}");
    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
    print!("{matched}");
    print!("{}{base}", Theme::reset());
    print!("{after}");
}
