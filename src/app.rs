use std::path::PathBuf;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::query::{self, QueryOutput};
use crate::state;

pub struct JobScope {
    pub state: state::AppState,
}

impl Default for JobScope {
    fn default() -> Self {
        Self {
            state: state::AppState::new(DashboardConfig::default()),
        }
    }
}

impl JobScope {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: state::AppState::new(config),
        }
    }

    /// Upload a file from disk, replacing the current table on success
    pub fn load_file(&mut self, path: PathBuf) -> Result<()> {
        let table = self.state.session.upload_path(&path)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        log::info!(
            "loaded {} ({} rows, {} valid dates, {} invalid dates)",
            name,
            table.height(),
            table.valid_date_count(),
            table.invalid_date_count()
        );

        self.state.remember_file(&path);
        self.state.current_file = Some(name);
        self.state.ui.clear_notice();
        self.state.ui.set_status("Data loaded successfully!");
        Ok(())
    }

    /// Upload a CSV dropped as raw bytes (no filesystem path available)
    pub fn load_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let table = self.state.session.upload_bytes(bytes)?;
        log::info!("loaded {} ({} rows)", name, table.height());

        self.state.current_file = Some(name.to_string());
        self.state.ui.clear_notice();
        self.state.ui.set_status("Data loaded successfully!");
        Ok(())
    }

    /// Report a failure without touching the current table
    pub fn report(&mut self, err: DashboardError) {
        log::warn!("{}", err);
        self.state.ui.set_error(&err);
    }

    pub fn save_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(crate::constants::config::CONFIG_FILE)
            .save_file()
        {
            if let Err(e) = self.state.config.save_to(&path) {
                self.report(e);
            }
        }
    }

    pub fn load_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            match DashboardConfig::from_path(&path) {
                Ok(config) => {
                    log::info!("loaded configuration from {}", path.display());
                    self.state.config = config;
                }
                Err(e) => self.report(e),
            }
        }
    }

    /// Write the charted panels of the selected view to a JSON file
    pub fn export_view(&mut self) {
        let Some(table) = self.state.session.table() else {
            return;
        };
        let view = self.state.session.view();
        let panels = query::evaluate_view(view, &table, &self.state.config);

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("view_summary.json")
            .save_file()
        {
            let written = query::export_json(&panels)
                .and_then(|json| std::fs::write(&path, json).map_err(DashboardError::from));
            match written {
                Ok(()) => log::info!("exported {} to {}", view.label(), path.display()),
                Err(e) => self.report(e),
            }
        }
    }

    /// Put a summary table on the clipboard as tab-separated text
    pub fn copy_output(&mut self, output: &QueryOutput) {
        let copied = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(output.to_tsv()))
            .map_err(|e| DashboardError::Clipboard(e.to_string()));
        if let Err(e) = copied {
            self.report(e);
        }
    }
}
