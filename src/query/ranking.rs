//! Frequency rankings over categorical columns

use polars::prelude::*;

use super::CategoryCount;
use crate::constants::columns;
use crate::data::{source, DerivedTable};
use crate::error::{DashboardError, Result};

pub(crate) const COUNT: &str = "count";

/// Trimmed text form of a column, whatever its dtype
fn text_key(column: &str) -> Expr {
    col(column)
        .cast(DataType::String)
        .str()
        .strip_chars(lit(" \t\r\n"))
        .alias(column)
}

/// Tally rows per distinct combination of `keys`, most frequent first
///
/// Keys are compared as trimmed text and rows with a null or blank key are
/// skipped. Ties keep the order in which groups were first encountered.
pub(crate) fn count_groups(frame: &DataFrame, keys: &[&str]) -> Result<DataFrame> {
    if let Some(missing) = keys.iter().find(|k| !source::has_column(frame, k)) {
        return Err(DashboardError::OptionalColumnAbsent {
            column: missing.to_string(),
        });
    }

    let present = keys
        .iter()
        .map(|k| col(*k).is_not_null().and(col(*k).neq(lit(""))))
        .reduce(|a, b| a.and(b))
        .unwrap_or(lit(true));

    let counted = frame
        .clone()
        .lazy()
        .select(keys.iter().map(|k| text_key(k)).collect::<Vec<_>>())
        .filter(present)
        .group_by_stable(keys.iter().map(|k| col(*k)).collect::<Vec<_>>())
        .agg([len().alias(COUNT)])
        .sort_by_exprs(
            [col(COUNT)],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .collect()?;
    Ok(counted)
}

/// Read a `label`/`count` frame back out as [`CategoryCount`]s
pub(crate) fn category_counts(counted: &DataFrame, label: &str) -> Result<Vec<CategoryCount>> {
    let labels = counted.column(label)?.as_materialized_series().str()?;
    let counts = counted
        .column(COUNT)?
        .as_materialized_series()
        .cast(&DataType::UInt64)?;
    let counts = counts.u64()?;

    Ok(labels
        .into_iter()
        .zip(counts)
        .map(|(label, count)| CategoryCount {
            label: label.unwrap_or_default().to_string(),
            count: count.unwrap_or(0),
        })
        .collect())
}

fn ranked(table: &DerivedTable, column: &str) -> Result<Vec<CategoryCount>> {
    let counted = count_groups(table.dataframe(), &[column])?;
    category_counts(&counted, column)
}

/// The `n` most frequent values of a column
pub fn top_n(table: &DerivedTable, column: &str, n: usize) -> Result<Vec<CategoryCount>> {
    profiling::scope!("top_n");

    let mut counts = ranked(table, column)?;
    counts.truncate(n);
    Ok(counts)
}

/// Postings per region, most frequent first
pub fn count_by_region(table: &DerivedTable) -> Result<Vec<CategoryCount>> {
    profiling::scope!("count_by_region");
    ranked(table, columns::COMPANY_REGION)
}

/// Postings per seniority level, most frequent first
pub fn count_by_seniority(table: &DerivedTable) -> Result<Vec<CategoryCount>> {
    profiling::scope!("count_by_seniority");
    ranked(table, columns::SENIORITY_LEVEL)
}
