//! Top-level rendering coordinator.
//!
//! Computes the view model for the pane size and hands it to the components.
//! Output goes to stdout, which Zellij paints into the plugin pane.

use crate::app::NodeListState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the pane to stdout.
///
/// Does not clear the screen; every row the layout owns is padded to `cols`.
pub fn render(state: &NodeListState, rows: usize, cols: usize) {
    let now = chrono::Utc::now().timestamp();
    let viewmodel = state.compute_viewmodel(rows, cols, now);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a precomputed view model.
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_pane(vm, theme, cols, rows);
}
