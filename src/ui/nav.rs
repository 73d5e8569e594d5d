use eframe::egui;

use crate::app::JobScope;
use crate::constants::layout::NAV_PANEL_WIDTH;
use crate::state::View;

/// Side panel: view selection, uploads and configuration
pub fn render_navigation(app: &mut JobScope, ctx: &egui::Context) {
    egui::SidePanel::left("navigation")
        .default_width(NAV_PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.heading("Navigation");
            ui.label("Select a page:");

            let mut selected = app.state.session.view();
            for view in View::ALL {
                ui.radio_value(&mut selected, view, view.label());
            }
            if selected != app.state.session.view() {
                app.state.session.select_view(selected);
            }

            ui.separator();

            if ui
                .button("📂 Open data file")
                .on_hover_text("CSV or Parquet with a job_posted_date column")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Data Files", &["csv", "parquet"])
                    .pick_file()
                {
                    if let Err(e) = app.load_file(path) {
                        app.report(e);
                    }
                }
            }

            if !app.state.recent_files.is_empty() {
                ui.collapsing("Recent files", |ui| {
                    // Cloned so loading can mutate the list
                    for path in app.state.recent_files.clone() {
                        let Some(name) = path.file_name() else {
                            continue;
                        };
                        if ui
                            .small_button(name.to_string_lossy().to_string())
                            .on_hover_text(path.display().to_string())
                            .clicked()
                        {
                            if let Err(e) = app.load_file(path.clone()) {
                                app.report(e);
                            }
                        }
                    }
                });
            }

            if app.state.has_data() && ui.button("💾 Export view as JSON").clicked() {
                app.export_view();
            }

            ui.separator();
            ui.checkbox(&mut app.state.config.dark_mode, "Dark mode");
            ui.horizontal(|ui| {
                if ui.small_button("Save config").clicked() {
                    app.save_config();
                }
                if ui.small_button("Load config").clicked() {
                    app.load_config();
                }
            });

            ui.separator();
            ui.small("ML Jobs Analysis Dashboard built with egui");
        });
}

/// Bottom bar: current file, table size and the last notice
pub fn render_status_bar(app: &mut JobScope, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(name) = &app.state.current_file {
                ui.label(format!("📁 {}", name));
                ui.separator();
            }
            if let Some(table) = app.state.session.table() {
                ui.label(format!("Rows: {} | Cols: {}", table.height(), table.width()));
                ui.separator();
            }

            let mut dismiss = false;
            if let Some(notice) = &app.state.ui.notice {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, format!("{}: {}", notice.title, notice.message));
                dismiss = ui.small_button("✖").clicked();
            }
            if dismiss {
                app.state.ui.clear_notice();
            }
        });
    });
}
