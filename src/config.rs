//! Dashboard configuration persisted as JSON

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{DashboardError, Result};
use crate::state::View;

/// User-tunable knobs for the aggregation queries and the shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Entries in the location/company/title rankings
    pub top_n: usize,
    /// Entries in the title word-frequency ranking
    pub top_words: usize,
    /// Tokens dropped from job titles before counting
    pub stop_words: Vec<String>,
    /// A heatmap with this many populated cells or fewer is reported as insufficient
    pub heatmap_min_cells: usize,
    /// Rows shown in the overview's sample table
    pub sample_rows: usize,
    pub dark_mode: bool,
    /// View selected when the dashboard starts
    pub startup_view: View,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_n: constants::query::DEFAULT_TOP_N,
            top_words: constants::query::DEFAULT_TOP_WORDS,
            stop_words: constants::query::DEFAULT_STOP_WORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            heatmap_min_cells: constants::query::DEFAULT_HEATMAP_MIN_CELLS,
            sample_rows: constants::overview::DEFAULT_SAMPLE_ROWS,
            dark_mode: false,
            startup_view: View::default(),
        }
    }
}

impl DashboardConfig {
    /// Read a configuration file; missing fields fall back to defaults
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load `jobscope.json` from the working directory if one exists
    pub fn load_default() -> Option<Self> {
        let path = Path::new(constants::config::CONFIG_FILE);
        if !path.exists() {
            return None;
        }
        match Self::from_path(path) {
            Ok(config) => {
                log::info!("loaded configuration from {}", path.display());
                Some(config)
            }
            Err(e) => {
                log::warn!("ignoring {}: {}", path.display(), e);
                None
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(DashboardError::Config("top_n must be at least 1".to_string()));
        }
        if self.top_words == 0 {
            return Err(DashboardError::Config(
                "top_words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
