#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::App;
use eframe::egui::{self, CentralPanel};

// Dashboard application object
mod app;

// Dashboard configuration
mod config;

// Application constants
mod constants;

// Ingestion and calendar feature derivation
mod data;

// Error handling
mod error;

// Aggregation queries
mod query;

// Session slots and UI state
mod state;

// egui shell
mod ui;

use app::JobScope;
use config::DashboardConfig;
use state::View;

impl JobScope {
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let number_keys = [
            egui::Key::Num1,
            egui::Key::Num2,
            egui::Key::Num3,
            egui::Key::Num4,
        ];

        ctx.input(|i| {
            for (idx, key) in number_keys.iter().enumerate() {
                if i.key_pressed(*key) {
                    if let Some(view) = View::from_shortcut(idx + 1) {
                        self.state.session.select_view(view);
                    }
                }
            }
            if i.key_pressed(egui::Key::T) {
                self.state.config.dark_mode = !self.state.config.dark_mode;
            }
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                self.state.ui.show_help = !self.state.ui.show_help;
            }
            if i.key_pressed(egui::Key::Escape) {
                self.state.ui.show_help = false;
            }
        });
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.first() else {
            return;
        };

        let result = if let Some(path) = &file.path {
            self.load_file(path.clone())
        } else if let Some(bytes) = &file.bytes {
            self.load_bytes(&file.name, bytes)
        } else {
            return;
        };

        if let Err(e) = result {
            self.report(e);
        }
    }
}

impl App for JobScope {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();

        // Set theme
        if self.state.config.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_shortcuts(ctx);
        self.handle_dropped_files(ctx);

        ui::render_navigation(self, ctx);
        ui::render_status_bar(self, ctx);

        CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui::render_view(self, ui);
            });
        });

        ui::render_help_dialog(self, ctx);
    }
}

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> Option<puffin_http::Server> {
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            puffin::set_scopes_on(true);
            log::info!("puffin server listening on {}", addr);
            Some(server)
        }
        Err(e) => {
            log::warn!("could not start puffin server: {}", e);
            None
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server();

    let config = DashboardConfig::load_default().unwrap_or_default();
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "ML Jobs Analysis Dashboard",
        options,
        Box::new(move |_| Ok(Box::new(JobScope::new(config)))),
    )
}
