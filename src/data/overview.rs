use polars::prelude::*;
use serde::Serialize;

use super::derive::DerivedTable;
use crate::error::Result;

/// Missing-value total for one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

/// Summary shown on the "Data Overview" page
#[derive(Debug, Clone, Serialize)]
pub struct DatasetOverview {
    pub rows: usize,
    pub columns: usize,
    /// Nulls per column, derived columns included
    pub missing: Vec<MissingCount>,
    /// (column, dtype name)
    pub dtypes: Vec<(String, String)>,
    pub headers: Vec<String>,
    /// First rows rendered as text; missing cells are empty strings
    pub sample: Vec<Vec<String>>,
    pub invalid_dates: usize,
}

/// Display form of one cell
fn cell_text(value: AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::List(inner) => {
            let items: Vec<String> = inner.rechunk().iter().map(cell_text).collect();
            format!("[{}]", items.join(", "))
        }
        other => other.to_string(),
    }
}

/// Build the overview for the current table
pub fn overview(table: &DerivedTable, sample_rows: usize) -> Result<DatasetOverview> {
    profiling::scope!("overview");

    let frame = table.dataframe();
    let headers = table.column_names();

    let missing = frame
        .get_columns()
        .iter()
        .map(|c| MissingCount {
            column: c.name().to_string(),
            missing: c.null_count(),
        })
        .collect();

    let dtypes = frame
        .get_columns()
        .iter()
        .map(|c| (c.name().to_string(), c.dtype().to_string()))
        .collect();

    let head = frame.head(Some(sample_rows));
    let sample = (0..head.height())
        .map(|row| {
            head.get_columns()
                .iter()
                .map(|c| c.get(row).map(cell_text))
                .collect::<PolarsResult<Vec<String>>>()
        })
        .collect::<PolarsResult<Vec<_>>>()?;

    Ok(DatasetOverview {
        rows: table.height(),
        columns: table.width(),
        missing,
        dtypes,
        headers,
        sample,
        invalid_dates: table.invalid_date_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::derive::derive_frame;
    use polars::prelude::*;

    #[test]
    fn test_overview_counts_missing_values() {
        let df = df!(
            "company_name" => &[Some("Acme"), None, Some("Globex")],
            "job_posted_date" => &["2023-01-15", "bad-date", "2023-03-01"]
        )
        .unwrap();
        let table = derive_frame(&df).unwrap();
        let report = overview(&table, 5).unwrap();

        assert_eq!(report.rows, 3);
        assert_eq!(report.columns, 6);
        assert_eq!(report.invalid_dates, 1);

        let missing_of = |name: &str| {
            report
                .missing
                .iter()
                .find(|m| m.column == name)
                .map(|m| m.missing)
        };
        assert_eq!(missing_of("company_name"), Some(1));
        assert_eq!(missing_of("job_posted_date"), Some(1));
        assert_eq!(missing_of("month"), Some(1));
        assert_eq!(missing_of("weekday"), Some(1));
    }

    #[test]
    fn test_overview_sample_rows() {
        let df = df!(
            "company_name" => &["A", "B", "C", "D"],
            "job_posted_date" => &["2023-01-15", "2023-01-16", "2023-01-17", "2023-01-18"]
        )
        .unwrap();
        let table = derive_frame(&df).unwrap();
        let report = overview(&table, 2).unwrap();

        assert_eq!(report.sample.len(), 2);
        assert_eq!(report.sample[0][0], "A");
        assert_eq!(report.sample[1][1], "2023-01-16");
        assert_eq!(report.headers.len(), report.sample[0].len());
    }

    #[test]
    fn test_overview_handles_list_columns() {
        let mut df = df!(
            "job_posted_date" => &["2023-01-15", "2023-01-16"],
            "salary" => &[Some(120_000i64), None]
        )
        .unwrap();
        let tags = Series::new(
            "tags".into(),
            &[
                Series::new("".into(), &["python", "pytorch"]),
                Series::new("".into(), &["sql"]),
            ],
        );
        df.with_column(tags).unwrap();

        let table = derive_frame(&df).unwrap();
        let report = overview(&table, 5).unwrap();

        assert_eq!(report.sample.len(), 2);
        let tags_idx = report.headers.iter().position(|h| h == "tags").unwrap();
        assert_eq!(report.sample[0][tags_idx], "[python, pytorch]");
        let salary_idx = report.headers.iter().position(|h| h == "salary").unwrap();
        assert_eq!(report.sample[0][salary_idx], "120000");
        assert_eq!(report.sample[1][salary_idx], "");
        assert!(report.dtypes.iter().any(|(name, dtype)| name == "tags" && dtype.starts_with("list")));
    }

    #[test]
    fn test_overview_empty_table() {
        let df = df!("job_posted_date" => Vec::<String>::new()).unwrap();
        let table = derive_frame(&df).unwrap();
        let report = overview(&table, 5).unwrap();

        assert_eq!(report.rows, 0);
        assert!(report.sample.is_empty());
        assert!(report.missing.iter().all(|m| m.missing == 0));
    }
}
