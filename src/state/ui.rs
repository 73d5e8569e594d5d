//! UI interaction state

use crate::error::{DashboardError, Severity};

/// Transient message shown in the status area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
    pub severity: Severity,
}

impl From<&DashboardError> for Notice {
    fn from(err: &DashboardError) -> Self {
        Self {
            title: err.title(),
            message: err.user_message(),
            severity: err.severity(),
        }
    }
}

/// UI state: dialogs, theme and the last message for the user
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Show keyboard shortcut help
    pub show_help: bool,

    /// Message for the status bar (upload failures, config errors)
    pub notice: Option<Notice>,

    /// Success line after the last upload
    pub status: Option<String>,
}

impl UiState {
    /// Record an error for display
    pub fn set_error(&mut self, err: &DashboardError) {
        self.notice = Some(Notice::from(err));
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}
