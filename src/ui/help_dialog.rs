use crate::app::JobScope;

pub fn render_help_dialog(app: &mut JobScope, ctx: &eframe::egui::Context) {
    if app.state.ui.show_help {
        eframe::egui::Window::new("⌨ Keyboard Shortcuts")
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Navigation");
                ui.label("1 - Data Overview");
                ui.label("2 - Temporal Analysis");
                ui.label("3 - Location & Companies");
                ui.label("4 - Job Titles Analysis");

                ui.separator();
                ui.heading("Display");
                ui.label("T - Toggle dark/light theme");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help");

                ui.separator();
                ui.heading("Data");
                ui.label("Drop a CSV file on the window to replace the current dataset");
                ui.label("📋 next to a chart copies its numbers as a table");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.ui.show_help = false;
                }
            });
    }
}
