//! Dashboard views and the queries each one needs

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::constants::columns;
use crate::query::Query;

/// The four dashboard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    DataOverview,
    TemporalAnalysis,
    LocationCompanies,
    JobTitles,
}

impl View {
    pub const ALL: [View; 4] = [
        View::DataOverview,
        View::TemporalAnalysis,
        View::LocationCompanies,
        View::JobTitles,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::DataOverview => "Data Overview",
            View::TemporalAnalysis => "Temporal Analysis",
            View::LocationCompanies => "Location & Companies",
            View::JobTitles => "Job Titles Analysis",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            View::DataOverview => "Basic Data Overview",
            View::TemporalAnalysis => "Temporal Analysis of Job Postings",
            View::LocationCompanies => "Top Locations and Companies",
            View::JobTitles => "Job Titles Analysis",
        }
    }

    /// Chart queries rendered on this page, in display order
    ///
    /// The overview page has none; it renders the dataset summary instead.
    pub fn queries(&self, config: &DashboardConfig) -> Vec<Query> {
        match self {
            View::DataOverview => Vec::new(),
            View::TemporalAnalysis => vec![
                Query::MonthCounts,
                Query::WeekdayCounts,
                Query::DayOfMonthCounts,
                Query::MonthWeekdayHeatmap,
                Query::MonthlyTrend,
            ],
            View::LocationCompanies => vec![
                Query::TopValues {
                    column: columns::COMPANY_LOCALITY,
                    n: config.top_n,
                },
                Query::TopValues {
                    column: columns::COMPANY_NAME,
                    n: config.top_n,
                },
                Query::RegionCounts,
            ],
            View::JobTitles => vec![
                Query::TopValues {
                    column: columns::JOB_TITLE,
                    n: config.top_n,
                },
                Query::WordFrequency {
                    column: columns::JOB_TITLE,
                    n: config.top_words,
                },
                Query::SeniorityCounts,
            ],
        }
    }

    /// View bound to a number key (1-4)
    pub fn from_shortcut(index: usize) -> Option<View> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_labels() {
        let labels: Vec<&str> = View::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Data Overview",
                "Temporal Analysis",
                "Location & Companies",
                "Job Titles Analysis"
            ]
        );
    }

    #[test]
    fn test_view_queries_follow_config() {
        let config = DashboardConfig {
            top_n: 4,
            top_words: 12,
            ..DashboardConfig::default()
        };
        assert!(View::DataOverview.queries(&config).is_empty());
        assert_eq!(View::TemporalAnalysis.queries(&config).len(), 5);
        assert!(View::JobTitles.queries(&config).contains(&Query::WordFrequency {
            column: "job_title",
            n: 12
        }));
        assert!(View::LocationCompanies.queries(&config).contains(&Query::TopValues {
            column: "company_name",
            n: 4
        }));
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(View::from_shortcut(1), Some(View::DataOverview));
        assert_eq!(View::from_shortcut(4), Some(View::JobTitles));
        assert_eq!(View::from_shortcut(0), None);
        assert_eq!(View::from_shortcut(5), None);
    }
}
