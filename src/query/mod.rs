//! Aggregation queries feeding the dashboard charts
//!
//! Each query is a pure function of the current [`DerivedTable`]. Dispatch goes
//! through [`Query::run`], which checks that the query's source columns exist
//! before touching the data, so an absent optional column skips one chart
//! instead of failing the whole view.

pub mod calendar;
pub mod ranking;
pub mod words;

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::constants::columns;
use crate::data::DerivedTable;
use crate::error::{DashboardError, Result, Severity};
use crate::state::View;

pub use calendar::{
    count_by_day_of_month, count_by_month, count_by_weekday, month_weekday_heatmap, monthly_trend,
};
pub use ranking::{count_by_region, count_by_seniority, top_n};
pub use words::word_frequency;

/// One labeled category and its tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

/// Weekday (rows) x month (columns) matrix of counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub counts: Vec<Vec<u64>>,
}

impl Heatmap {
    /// Cells with a non-zero count
    pub fn populated_cells(&self) -> usize {
        self.counts.iter().flatten().filter(|&&c| c > 0).count()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    pub fn max(&self) -> u64 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Postings in one calendar month of one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// `YYYY-MM`
    pub period: String,
    pub year: i32,
    pub month: u32,
    pub count: u64,
}

/// Shape of a query result as handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum QueryOutput {
    Counts(Vec<CategoryCount>),
    Heatmap(Heatmap),
    Trend(Vec<TrendPoint>),
}

impl QueryOutput {
    /// Render as tab-separated text with a header row
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        match self {
            QueryOutput::Counts(counts) => {
                out.push_str("label\tcount\n");
                for c in counts {
                    out.push_str(&format!("{}\t{}\n", c.label, c.count));
                }
            }
            QueryOutput::Heatmap(heatmap) => {
                out.push_str(&format!("\t{}\n", heatmap.columns.join("\t")));
                for (label, row) in heatmap.rows.iter().zip(&heatmap.counts) {
                    let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
                    out.push_str(&format!("{}\t{}\n", label, cells.join("\t")));
                }
            }
            QueryOutput::Trend(points) => {
                out.push_str("period\tcount\n");
                for p in points {
                    out.push_str(&format!("{}\t{}\n", p.period, p.count));
                }
            }
        }
        out
    }
}

/// The fixed set of chart queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Query {
    MonthCounts,
    WeekdayCounts,
    DayOfMonthCounts,
    MonthWeekdayHeatmap,
    MonthlyTrend,
    TopValues { column: &'static str, n: usize },
    RegionCounts,
    WordFrequency { column: &'static str, n: usize },
    SeniorityCounts,
}

impl Query {
    /// Columns that must exist for the query to run
    pub fn required_columns(&self) -> Vec<&'static str> {
        match self {
            Query::MonthCounts => vec![columns::MONTH],
            Query::WeekdayCounts => vec![columns::WEEKDAY],
            Query::DayOfMonthCounts => vec![columns::DAY],
            Query::MonthWeekdayHeatmap => vec![columns::MONTH, columns::WEEKDAY],
            Query::MonthlyTrend => vec![columns::YEAR, columns::MONTH],
            Query::TopValues { column, .. } => vec![*column],
            Query::RegionCounts => vec![columns::COMPANY_REGION],
            Query::WordFrequency { column, .. } => vec![*column],
            Query::SeniorityCounts => vec![columns::SENIORITY_LEVEL],
        }
    }

    pub fn title(&self) -> String {
        match self {
            Query::MonthCounts => "Job Postings per Month".to_string(),
            Query::WeekdayCounts => "Job Postings by Day of the Week".to_string(),
            Query::DayOfMonthCounts => "Job Postings per Day of Month".to_string(),
            Query::MonthWeekdayHeatmap => "Job Postings by Weekday and Month".to_string(),
            Query::MonthlyTrend => "Job Posting Trend Over Time".to_string(),
            Query::TopValues { column, .. } => match *column {
                columns::COMPANY_LOCALITY => "Top Job Locations".to_string(),
                columns::COMPANY_NAME => "Top Hiring Companies".to_string(),
                columns::JOB_TITLE => "Top Job Titles".to_string(),
                other => format!("Top values of {}", other),
            },
            Query::RegionCounts => "Jobs by State".to_string(),
            Query::WordFrequency { n, .. } => format!("Top {} Frequent Words in Job Titles", n),
            Query::SeniorityCounts => "Seniority Level Distribution".to_string(),
        }
    }

    /// Check the query's columns against the table, then compute it
    pub fn run(&self, table: &DerivedTable, config: &DashboardConfig) -> Result<QueryOutput> {
        if let Some(column) = self
            .required_columns()
            .into_iter()
            .find(|c| !table.has_column(c))
        {
            return Err(DashboardError::OptionalColumnAbsent {
                column: column.to_string(),
            });
        }

        log::debug!("running {:?} over {} rows", self, table.height());

        let output = match self {
            Query::MonthCounts => QueryOutput::Counts(count_by_month(table)?),
            Query::WeekdayCounts => QueryOutput::Counts(count_by_weekday(table)?),
            Query::DayOfMonthCounts => QueryOutput::Counts(count_by_day_of_month(table)?),
            Query::MonthWeekdayHeatmap => QueryOutput::Heatmap(month_weekday_heatmap(table)?),
            Query::MonthlyTrend => QueryOutput::Trend(monthly_trend(table)?),
            Query::TopValues { column, n } => QueryOutput::Counts(top_n(table, column, *n)?),
            Query::RegionCounts => QueryOutput::Counts(count_by_region(table)?),
            Query::WordFrequency { column, n } => {
                QueryOutput::Counts(word_frequency(table, column, &config.stop_words, *n)?)
            }
            Query::SeniorityCounts => QueryOutput::Counts(count_by_seniority(table)?),
        };
        Ok(output)
    }

    /// Decide whether an output carries enough to be worth charting
    pub fn check_sufficient(&self, output: &QueryOutput, config: &DashboardConfig) -> Result<()> {
        match output {
            QueryOutput::Heatmap(heatmap) => {
                let populated = heatmap.populated_cells();
                if populated <= config.heatmap_min_cells {
                    return Err(DashboardError::InsufficientData {
                        operation: "weekday-month heatmap".to_string(),
                        required: config.heatmap_min_cells,
                        actual: populated,
                    });
                }
            }
            QueryOutput::Trend(points) if points.is_empty() => {
                return Err(DashboardError::InsufficientData {
                    operation: "posting trend".to_string(),
                    required: 0,
                    actual: 0,
                });
            }
            _ => {}
        }
        Ok(())
    }
}

/// One chart slot of a view: its query and either data or the reason it is degraded
#[derive(Debug)]
pub struct Panel {
    pub query: Query,
    pub title: String,
    pub result: Result<QueryOutput>,
}

impl Panel {
    pub fn output(&self) -> Option<&QueryOutput> {
        self.result.as_ref().ok()
    }
}

/// Compute every panel a view needs; a failing panel never affects its siblings
pub fn evaluate_view(view: View, table: &DerivedTable, config: &DashboardConfig) -> Vec<Panel> {
    profiling::scope!("evaluate_view");

    view.queries(config)
        .into_iter()
        .map(|query| {
            let result = query
                .run(table, config)
                .and_then(|output| query.check_sufficient(&output, config).map(|_| output));

            if let Err(e) = &result {
                match e.severity() {
                    Severity::Info => log::info!("{}: {}", query.title(), e),
                    Severity::Warning | Severity::Error => log::warn!("{}: {}", query.title(), e),
                }
            }

            Panel {
                title: query.title(),
                query,
                result,
            }
        })
        .collect()
}

#[derive(Serialize)]
struct ExportedPanel<'a> {
    title: &'a str,
    output: &'a QueryOutput,
}

/// Serialize the charted panels of a view as pretty JSON; degraded panels are left out
pub fn export_json(panels: &[Panel]) -> Result<String> {
    let exported: Vec<ExportedPanel> = panels
        .iter()
        .filter_map(|p| {
            p.output().map(|output| ExportedPanel {
                title: &p.title,
                output,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&exported)?)
}
