//! Application-wide constants and default values
//!
//! This module centralizes column names, calendar orderings and the default
//! knobs used throughout the dashboard.

/// Column names of the job-postings table
pub mod columns {
    /// The only column ingestion cannot do without
    pub const JOB_POSTED_DATE: &str = "job_posted_date";

    pub const JOB_TITLE: &str = "job_title";
    pub const COMPANY_NAME: &str = "company_name";
    pub const COMPANY_LOCALITY: &str = "company_address_locality";
    pub const COMPANY_REGION: &str = "company_address_region";
    pub const SENIORITY_LEVEL: &str = "seniority_level";

    // Derived calendar columns
    pub const YEAR: &str = "year";
    pub const MONTH: &str = "month";
    pub const DAY: &str = "day";
    pub const WEEKDAY: &str = "weekday";
}

/// Fixed calendar orderings
pub mod calendar {
    pub const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    pub const WEEKDAYS: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    /// Highest day-of-month bucket
    pub const DAYS_IN_LONGEST_MONTH: usize = 31;
}

/// Query defaults
pub mod query {
    /// Entries shown in location/company/title rankings
    pub const DEFAULT_TOP_N: usize = 10;

    /// Entries shown in the title word-frequency chart
    pub const DEFAULT_TOP_WORDS: usize = 20;

    /// A heatmap needs more populated cells than this to be worth drawing
    pub const DEFAULT_HEATMAP_MIN_CELLS: usize = 5;

    /// Words dropped from job-title tokens
    pub const DEFAULT_STOP_WORDS: [&str; 8] = ["and", "the", "in", "of", "to", "for", "a", "with"];
}

/// Data overview defaults
pub mod overview {
    /// Rows shown in the sample-data table
    pub const DEFAULT_SAMPLE_ROWS: usize = 5;
}

/// Session bookkeeping
pub mod session {
    /// Maximum number of recent files to track
    pub const MAX_RECENT_FILES: usize = 5;
}

/// UI layout defaults
pub mod layout {
    /// Navigation side panel default width
    pub const NAV_PANEL_WIDTH: f32 = 200.0;

    /// Height of a single bar or line chart
    pub const CHART_HEIGHT: f32 = 260.0;

    /// Heatmap cell size
    pub const HEATMAP_CELL_WIDTH: f32 = 56.0;
    pub const HEATMAP_CELL_HEIGHT: f32 = 26.0;

    /// Width reserved for heatmap row labels
    pub const HEATMAP_LABEL_WIDTH: f32 = 90.0;

    /// Table row height
    pub const TABLE_ROW_HEIGHT: f32 = 20.0;
}

/// Configuration file paths
pub mod config {
    /// Configuration file picked up from the working directory at startup
    pub const CONFIG_FILE: &str = "jobscope.json";
}
