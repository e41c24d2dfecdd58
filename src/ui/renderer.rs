//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI on stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MainContent, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Called from the plugin's `render` hook after the resize has been recorded
/// on `state`.
///
/// # Parameters
///
/// * `state` - Application state, read only
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
///
/// Panes smaller than 6 x 20 only get the key hints line.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let layout = state.screen_layout(rows, cols);
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &layout, &state.theme);
}

/// Draws every region, then the detail overlay on top.
fn render_viewmodel(vm: &UIViewModel, layout: &ScreenLayout, theme: &Theme) {
    if layout.rows < 6 || layout.cols < 20 {
        components::render_footer(1, &vm.footer, theme, layout.cols);
        return;
    }

    components::render_top_nav(&vm.top_nav, layout, theme);
    components::render_border(4, &theme.colors.border, layout.cols);

    components::render_sidebar(&vm.sidebar, layout, theme);

    match &vm.main {
        MainContent::Loading(status) | MainContent::Empty(status) => {
            components::render_status(status, layout.grid, theme);
        }
        MainContent::Grid(grid) => components::render_grid(grid, layout, theme),
    }

    components::render_border(layout.rows - 1, &theme.colors.border, layout.cols);
    components::render_footer(layout.rows, &vm.footer, theme, layout.cols);

    if let Some(detail) = &vm.detail {
        components::render_detail(detail, layout, theme);
    }
}
