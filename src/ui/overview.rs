use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::app::JobScope;
use crate::constants::layout::TABLE_ROW_HEIGHT;
use crate::data::{self, DerivedTable};

/// Render a header + rows table of text cells
pub fn text_table(ui: &mut egui::Ui, id: &str, headers: &[String], rows: &[Vec<String>]) {
    profiling::scope!("text_table");

    TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .columns(Column::auto().resizable(true), headers.len())
        .header(TABLE_ROW_HEIGHT, |mut header| {
            for name in headers {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(TABLE_ROW_HEIGHT, |mut table_row| {
                    for cell in row {
                        table_row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}

/// Render the "Data Overview" page
pub fn render_overview(app: &mut JobScope, ui: &mut egui::Ui, table: &DerivedTable) {
    let report = match data::overview(table, app.state.config.sample_rows) {
        Ok(report) => report,
        Err(e) => {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, e.user_message());
            return;
        }
    };

    ui.columns(2, |columns| {
        columns[0].heading("Dataset Information");
        columns[0].label(format!("Total records: {}", report.rows));
        columns[0].label(format!("Number of columns: {}", report.columns));
        if report.invalid_dates > 0 {
            columns[0].label(
                RichText::new(format!("Unparseable posting dates: {}", report.invalid_dates))
                    .weak(),
            );
        }

        columns[1].heading("Missing Values");
        egui::Grid::new("missing_values")
            .striped(true)
            .show(&mut columns[1], |ui| {
                for m in &report.missing {
                    ui.label(&m.column);
                    ui.label(m.missing.to_string());
                    ui.end_row();
                }
            });
    });

    ui.add_space(12.0);
    ui.heading("Sample Data");
    egui::ScrollArea::horizontal()
        .id_salt("sample_scroll")
        .show(ui, |ui| {
            text_table(ui, "sample_data", &report.headers, &report.sample);
        });

    ui.add_space(12.0);
    ui.heading("Data Types");
    egui::Grid::new("data_types").striped(true).show(ui, |ui| {
        for (name, dtype) in &report.dtypes {
            ui.label(name);
            ui.monospace(dtype);
            ui.end_row();
        }
    });
}
