mod charts;
mod help_dialog;
mod nav;
mod overview;
mod welcome;

pub use charts::render_panel;
pub use help_dialog::render_help_dialog;
pub use nav::{render_navigation, render_status_bar};
pub use overview::render_overview;
pub use welcome::render_welcome;

use eframe::egui;

use crate::app::JobScope;
use crate::query;
use crate::state::View;

/// Render whichever view is selected, recomputing its queries from the current table
pub fn render_view(app: &mut JobScope, ui: &mut egui::Ui) {
    profiling::scope!("render_view");

    let Some(table) = app.state.session.table() else {
        render_welcome(ui);
        return;
    };

    let view = app.state.session.view();
    ui.heading(view.heading());
    if let Some(status) = &app.state.ui.status {
        ui.colored_label(egui::Color32::from_rgb(44, 160, 44), status);
    }
    ui.add_space(8.0);

    match view {
        View::DataOverview => render_overview(app, ui, &table),
        _ => {
            let panels = query::evaluate_view(view, &table, &app.state.config);
            for panel in &panels {
                render_panel(app, ui, panel);
            }
        }
    }
}
