use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

use crate::error::{DashboardError, Result};

/// JobTable wraps the raw uploaded table before any calendar features exist
#[derive(Debug, Clone)]
pub struct JobTable {
    frame: DataFrame,
}

impl JobTable {
    /// Load data from a file (CSV or Parquet)
    pub fn load(path: &Path) -> Result<Self> {
        profiling::scope!("JobTable::load");

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| DashboardError::UnsupportedFormat {
                extension: String::new(),
            })?;

        let lazy = match extension.to_lowercase().as_str() {
            "parquet" => LazyFrame::scan_parquet(path, Default::default())?,
            // Every column stays text; date coercion belongs to derivation
            "csv" => LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(0))
                .finish()?,
            ext => {
                return Err(DashboardError::UnsupportedFormat {
                    extension: ext.to_string(),
                });
            }
        };

        let frame = lazy.collect()?;
        log::debug!(
            "read {} rows x {} columns from {}",
            frame.height(),
            frame.width(),
            path.display()
        );
        Ok(Self { frame })
    }

    /// Parse an uploaded CSV that arrived as raw bytes
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        profiling::scope!("JobTable::from_csv_bytes");

        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
            .finish()?;
        Ok(Self { frame })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.frame
    }
}

pub(crate) fn column_names(frame: &DataFrame) -> Vec<String> {
    frame
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub(crate) fn has_column(frame: &DataFrame, name: &str) -> bool {
    frame
        .get_column_names()
        .iter()
        .any(|c| c.as_str() == name)
}

fn series<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Series> {
    frame
        .column(name)
        .map(|c| c.as_materialized_series())
        .map_err(|_| DashboardError::OptionalColumnAbsent {
            column: name.to_string(),
        })
}

/// Get a column's values as text, whatever its dtype
///
/// Nulls and whitespace-only cells both come back as `None`.
pub(crate) fn text_values(frame: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let as_text = series(frame, name)?.cast(&DataType::String)?;
    let ca = as_text.str()?;
    Ok(ca
        .into_iter()
        .map(|opt| {
            opt.filter(|s| !s.trim().is_empty())
                .map(|s| s.to_string())
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_loading_keeps_text() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "job_title,company_name,job_posted_date").unwrap();
        writeln!(file, "ML Engineer,Acme,2023-01-15").unwrap();
        writeln!(file, "Data Scientist,Globex,2023-02-20").unwrap();
        writeln!(file, "AI Researcher,,not a date").unwrap();
        file.flush().unwrap();

        let table = JobTable::load(file.path()).unwrap();
        assert_eq!(table.dataframe().height(), 3);
        assert_eq!(table.dataframe().width(), 3);
        assert_eq!(
            column_names(table.dataframe()),
            vec!["job_title", "company_name", "job_posted_date"]
        );

        let dates = text_values(table.dataframe(), "job_posted_date").unwrap();
        assert_eq!(dates[0].as_deref(), Some("2023-01-15"));
        assert_eq!(dates[2].as_deref(), Some("not a date"));

        let companies = text_values(table.dataframe(), "company_name").unwrap();
        assert_eq!(companies[2], None);
    }

    #[test]
    fn test_csv_bytes() {
        let bytes = b"job_posted_date,company_name\n2023-03-10,Initech\n";
        let table = JobTable::from_csv_bytes(bytes).unwrap();
        assert_eq!(table.dataframe().height(), 1);
        assert!(has_column(table.dataframe(), "company_name"));
        assert!(!has_column(table.dataframe(), "seniority_level"));
    }

    #[test]
    fn test_unsupported_format() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = JobTable::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::UnsupportedFormat { ref extension } if extension == "xlsx"
        ));
    }

    #[test]
    fn test_absent_column_is_reported() {
        let df = df!("company_name" => &["Acme"]).unwrap();
        let err = text_values(&df, "seniority_level").unwrap_err();
        assert!(matches!(err, DashboardError::OptionalColumnAbsent { .. }));
    }

    #[test]
    fn test_whitespace_cells_are_missing() {
        let df = df!("job_title" => &[Some("  "), Some("Engineer"), None]).unwrap();
        let titles = text_values(&df, "job_title").unwrap();
        assert_eq!(titles, vec![None, Some("Engineer".to_string()), None]);
    }

    #[test]
    fn test_parquet_loading_keeps_dtypes() {
        let mut df = df!(
            "job_title" => &["ML Engineer", "Data Scientist"],
            "views" => &[10i64, 25]
        )
        .unwrap();
        let mut file = Builder::new().suffix(".parquet").tempfile().unwrap();
        ParquetWriter::new(&mut file).finish(&mut df).unwrap();

        let table = JobTable::load(file.path()).unwrap();
        assert_eq!(table.dataframe().height(), 2);
        assert_eq!(
            table.dataframe().column("views").unwrap().dtype(),
            &DataType::Int64
        );
        let views = text_values(table.dataframe(), "views").unwrap();
        assert_eq!(views[1].as_deref(), Some("25"));
    }
}
