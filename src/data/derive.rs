//! Calendar feature derivation
//!
//! Turns an uploaded table into an analysis-ready one: the posting date is
//! coerced to a calendar date (unparseable values become null) and
//! `year`/`month`/`day`/`weekday` columns are added. No row is ever dropped.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;

use super::source::{self, JobTable};
use crate::constants::calendar::{MONTHS, WEEKDAYS};
use crate::constants::columns;
use crate::error::{DashboardError, Result};

const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

/// Best-effort conversion of a posting date; `None` when nothing matches
pub fn parse_posting_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // Compact YYYYMMDD
    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        let year = s[0..4].parse().ok()?;
        let month = s[4..6].parse().ok()?;
        let day = s[6..8].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    for format in &DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    for format in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }

    // Calendar date as seen in the timestamp's own offset
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// English month name for a date
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// English weekday name for a date
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// The uploaded table plus the derived calendar columns
#[derive(Debug, Clone)]
pub struct DerivedTable {
    frame: DataFrame,
    valid_dates: usize,
    invalid_dates: usize,
}

impl DerivedTable {
    pub fn dataframe(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    pub fn column_names(&self) -> Vec<String> {
        source::column_names(&self.frame)
    }

    pub fn has_column(&self, name: &str) -> bool {
        source::has_column(&self.frame, name)
    }

    /// Rows whose posting date was present but could not be parsed
    pub fn invalid_date_count(&self) -> usize {
        self.invalid_dates
    }

    /// Rows whose posting date parsed
    pub fn valid_date_count(&self) -> usize {
        self.valid_dates
    }

    /// Get a column's values as text
    pub fn text_values(&self, name: &str) -> Result<Vec<Option<String>>> {
        source::text_values(&self.frame, name)
    }

}

/// Derive calendar features from the raw table
///
/// Fails only when `job_posted_date` is missing altogether. Re-deriving a
/// derived table reproduces the same calendar columns. Unparseable dates are
/// already null by then, so the re-derived table reports no invalid dates;
/// the count belongs to the upload that produced them.
pub fn derive(raw: &JobTable) -> Result<DerivedTable> {
    derive_frame(raw.dataframe())
}

pub(crate) fn derive_frame(raw: &DataFrame) -> Result<DerivedTable> {
    profiling::scope!("derive");

    if !source::has_column(raw, columns::JOB_POSTED_DATE) {
        return Err(DashboardError::MissingRequiredColumn {
            column: columns::JOB_POSTED_DATE.to_string(),
        });
    }

    let raw_dates = source::text_values(raw, columns::JOB_POSTED_DATE)?;
    let dates: Vec<Option<NaiveDate>> = raw_dates
        .iter()
        .map(|v| v.as_deref().and_then(parse_posting_date))
        .collect();

    let invalid_dates = raw_dates
        .iter()
        .zip(&dates)
        .filter(|(raw, parsed)| raw.is_some() && parsed.is_none())
        .count();

    let normalized: Vec<Option<String>> = dates
        .iter()
        .map(|d| d.map(|d| d.format("%Y-%m-%d").to_string()))
        .collect();
    let years: Vec<Option<i32>> = dates.iter().map(|d| d.map(|d| d.year())).collect();
    let months: Vec<Option<&str>> = dates.iter().map(|d| d.map(month_name)).collect();
    let days: Vec<Option<i32>> = dates.iter().map(|d| d.map(|d| d.day() as i32)).collect();
    let weekdays: Vec<Option<&str>> = dates.iter().map(|d| d.map(weekday_name)).collect();

    // Cheap clone: column buffers are reference counted
    let mut frame = raw.clone();
    frame.with_column(Series::new(columns::JOB_POSTED_DATE.into(), normalized))?;
    frame.with_column(Series::new(columns::YEAR.into(), years))?;
    frame.with_column(Series::new(columns::MONTH.into(), months))?;
    frame.with_column(Series::new(columns::DAY.into(), days))?;
    frame.with_column(Series::new(columns::WEEKDAY.into(), weekdays))?;

    if invalid_dates > 0 {
        log::warn!(
            "{} of {} posting dates could not be parsed",
            invalid_dates,
            frame.height()
        );
    }

    Ok(DerivedTable {
        frame,
        valid_dates: dates.iter().filter(|d| d.is_some()).count(),
        invalid_dates,
    })
}
