//! Application state management
//!
//! The computational core only ever sees two slots: the current derived table
//! and the selected view. Both live in [`Session`]; everything else here is
//! shell bookkeeping.

mod ui;
mod view;

pub use ui::UiState;
pub use view::View;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::constants::session::MAX_RECENT_FILES;
use crate::data::{self, DerivedTable, JobTable};
use crate::error::Result;

/// Per-session slots for the current dataset and the selected view
#[derive(Debug, Default)]
pub struct Session {
    table: Option<Arc<DerivedTable>>,
    view: View,
}

impl Session {
    pub fn new(view: View) -> Self {
        Self { table: None, view }
    }

    /// Snapshot of the current table; stays valid even if an upload replaces it
    pub fn table(&self) -> Option<Arc<DerivedTable>> {
        self.table.clone()
    }

    pub fn has_data(&self) -> bool {
        self.table.is_some()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn select_view(&mut self, view: View) {
        self.view = view;
    }

    /// Swap in a fully derived table; the previous one is dropped once no reader holds it
    pub fn replace_table(&mut self, table: DerivedTable) -> Arc<DerivedTable> {
        let table = Arc::new(table);
        self.table = Some(Arc::clone(&table));
        table
    }

    /// Load and derive a file; on failure the previous table stays in place
    pub fn upload_path(&mut self, path: &Path) -> Result<Arc<DerivedTable>> {
        let raw = JobTable::load(path)?;
        let derived = data::derive(&raw)?;
        Ok(self.replace_table(derived))
    }

    /// Parse and derive an uploaded CSV buffer; on failure the previous table stays in place
    pub fn upload_bytes(&mut self, bytes: &[u8]) -> Result<Arc<DerivedTable>> {
        let raw = JobTable::from_csv_bytes(bytes)?;
        let derived = data::derive(&raw)?;
        Ok(self.replace_table(derived))
    }
}

/// Main application state container
#[derive(Debug, Default)]
pub struct AppState {
    pub session: Session,

    pub config: DashboardConfig,

    /// UI interaction state
    pub ui: UiState,

    /// Name of the currently loaded upload
    pub current_file: Option<String>,

    /// Recently opened files
    pub recent_files: Vec<PathBuf>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            session: Session::new(config.startup_view),
            ui: UiState::default(),
            current_file: None,
            recent_files: Vec::new(),
            config,
        }
    }

    pub fn has_data(&self) -> bool {
        self.session.has_data()
    }

    /// Move a path to the front of the recent-files list
    pub fn remember_file(&mut self, path: &Path) {
        self.recent_files.retain(|p| p != path);
        self.recent_files.insert(0, path.to_path_buf());
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}
