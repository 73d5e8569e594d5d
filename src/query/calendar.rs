//! Temporal aggregations over the derived calendar columns

use polars::prelude::*;

use super::ranking::{category_counts, count_groups, COUNT};
use super::{CategoryCount, Heatmap, TrendPoint};
use crate::constants::calendar::{DAYS_IN_LONGEST_MONTH, MONTHS, WEEKDAYS};
use crate::constants::columns;
use crate::data::DerivedTable;
use crate::error::Result;

const ORDER: &str = "order";

fn position(order: &[&str], value: &str) -> Option<usize> {
    order.iter().position(|candidate| *candidate == value)
}

/// Tally a column onto a fixed list of categories; every category is reported
///
/// Values outside `order` are dropped by the left join.
fn fixed_grid(table: &DerivedTable, column: &str, order: &[&str]) -> Result<Vec<CategoryCount>> {
    let counted = count_groups(table.dataframe(), &[column])?;
    let grid = df!(
        column => order,
        ORDER => (0..order.len() as u32).collect::<Vec<_>>()
    )?;

    let filled = grid
        .lazy()
        .join(
            counted.lazy(),
            [col(column)],
            [col(column)],
            JoinArgs::new(JoinType::Left),
        )
        .sort_by_exprs([col(ORDER)], SortMultipleOptions::default())
        .select([col(column), col(COUNT).fill_null(lit(0))])
        .collect()?;
    category_counts(&filled, column)
}

/// Postings per calendar month, January through December
pub fn count_by_month(table: &DerivedTable) -> Result<Vec<CategoryCount>> {
    profiling::scope!("count_by_month");
    fixed_grid(table, columns::MONTH, &MONTHS)
}

/// Postings per weekday, Monday through Sunday
pub fn count_by_weekday(table: &DerivedTable) -> Result<Vec<CategoryCount>> {
    profiling::scope!("count_by_weekday");
    fixed_grid(table, columns::WEEKDAY, &WEEKDAYS)
}

/// Histogram of postings over day-of-month 1..=31
pub fn count_by_day_of_month(table: &DerivedTable) -> Result<Vec<CategoryCount>> {
    profiling::scope!("count_by_day_of_month");

    let labels: Vec<String> = (1..=DAYS_IN_LONGEST_MONTH).map(|d| d.to_string()).collect();
    let order: Vec<&str> = labels.iter().map(String::as_str).collect();
    fixed_grid(table, columns::DAY, &order)
}

/// Weekday x month matrix of posting counts, zero-filled
pub fn month_weekday_heatmap(table: &DerivedTable) -> Result<Heatmap> {
    profiling::scope!("month_weekday_heatmap");

    let counted = count_groups(table.dataframe(), &[columns::WEEKDAY, columns::MONTH])?;
    let weekdays = counted.column(columns::WEEKDAY)?.as_materialized_series().str()?;
    let months = counted.column(columns::MONTH)?.as_materialized_series().str()?;
    let tallies = counted
        .column(COUNT)?
        .as_materialized_series()
        .cast(&DataType::UInt64)?;

    let mut counts = vec![vec![0u64; MONTHS.len()]; WEEKDAYS.len()];
    for ((weekday, month), count) in weekdays.into_iter().zip(months).zip(tallies.u64()?) {
        let (Some(weekday), Some(month), Some(count)) = (weekday, month, count) else {
            continue;
        };
        if let (Some(r), Some(c)) = (position(&WEEKDAYS, weekday), position(&MONTHS, month)) {
            counts[r][c] = count;
        }
    }

    Ok(Heatmap {
        rows: WEEKDAYS.iter().map(|s| s.to_string()).collect(),
        columns: MONTHS.iter().map(|s| s.to_string()).collect(),
        counts,
    })
}

/// Postings per (year, month) actually present, oldest first
pub fn monthly_trend(table: &DerivedTable) -> Result<Vec<TrendPoint>> {
    profiling::scope!("monthly_trend");

    let counted = count_groups(table.dataframe(), &[columns::YEAR, columns::MONTH])?;
    let years = counted.column(columns::YEAR)?.as_materialized_series().str()?;
    let months = counted.column(columns::MONTH)?.as_materialized_series().str()?;
    let tallies = counted
        .column(COUNT)?
        .as_materialized_series()
        .cast(&DataType::UInt64)?;

    let mut points: Vec<TrendPoint> = years
        .into_iter()
        .zip(months)
        .zip(tallies.u64()?)
        .filter_map(|((year, month), count)| {
            let year: i32 = year?.parse().ok()?;
            let month = position(&MONTHS, month?)? as u32 + 1;
            Some(TrendPoint {
                period: format!("{:04}-{:02}", year, month),
                year,
                month,
                count: count?,
            })
        })
        .collect();
    points.sort_by_key(|p| (p.year, p.month));
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::derive::derive_frame;
    use polars::prelude::*;

    fn table(dates: &[&str]) -> DerivedTable {
        let df = df!("job_posted_date" => dates).unwrap();
        derive_frame(&df).unwrap()
    }

    fn count_of(counts: &[CategoryCount], label: &str) -> u64 {
        counts
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.count)
            .unwrap()
    }

    fn cell(heatmap: &Heatmap, weekday: &str, month: &str) -> u64 {
        let row = heatmap.rows.iter().position(|r| r == weekday).unwrap();
        let column = heatmap.columns.iter().position(|c| c == month).unwrap();
        heatmap.counts[row][column]
    }

    #[test]
    fn test_count_by_month_scenario() {
        let t = table(&["2023-01-15", "2023-01-20", "bad-date"]);
        let months = count_by_month(&t).unwrap();

        assert_eq!(months.len(), 12);
        assert_eq!(months[0].label, "January");
        assert_eq!(months[11].label, "December");
        assert_eq!(count_of(&months, "January"), 2);
        assert!(months.iter().skip(1).all(|m| m.count == 0));
    }

    #[test]
    fn test_count_by_weekday_fixed_order() {
        // 2024-01-01 was a Monday
        let t = table(&["2024-01-01", "2024-01-07", "2024-01-08", "nope"]);
        let weekdays = count_by_weekday(&t).unwrap();

        assert_eq!(weekdays.len(), 7);
        assert_eq!(weekdays[0].label, "Monday");
        assert_eq!(weekdays[6].label, "Sunday");
        assert_eq!(weekdays[0].count, 2);
        assert_eq!(weekdays[6].count, 1);
        assert_eq!(
            weekdays.iter().map(|w| w.count).sum::<u64>(),
            t.valid_date_count() as u64
        );
    }

    #[test]
    fn test_count_by_day_of_month() {
        let t = table(&["2023-01-01", "2023-03-31", "2023-05-31", "bad"]);
        let days = count_by_day_of_month(&t).unwrap();

        assert_eq!(days.len(), 31);
        assert_eq!(days[0].label, "1");
        assert_eq!(days[0].count, 1);
        assert_eq!(days[30].label, "31");
        assert_eq!(days[30].count, 2);
    }

    #[test]
    fn test_heatmap_is_fully_populated_grid() {
        // Sunday in January, Friday in January, Wednesday in March
        let t = table(&["2023-01-15", "2023-01-20", "2023-03-01", "2023-03-01"]);
        let heatmap = month_weekday_heatmap(&t).unwrap();

        assert_eq!(heatmap.rows.len(), 7);
        assert_eq!(heatmap.columns.len(), 12);
        assert_eq!(heatmap.counts.len(), 7);
        assert!(heatmap.counts.iter().all(|row| row.len() == 12));

        assert_eq!(cell(&heatmap, "Sunday", "January"), 1);
        assert_eq!(cell(&heatmap, "Friday", "January"), 1);
        assert_eq!(cell(&heatmap, "Wednesday", "March"), 2);
        assert_eq!(cell(&heatmap, "Monday", "June"), 0);
        assert_eq!(heatmap.populated_cells(), 3);
        assert_eq!(heatmap.total(), 4);
    }

    #[test]
    fn test_monthly_trend_skips_absent_months() {
        let t = table(&["2023-03-02", "2022-12-31", "2023-03-15", "2023-01-01", "junk"]);
        let trend = monthly_trend(&t).unwrap();

        let periods: Vec<(&str, u64)> = trend.iter().map(|p| (p.period.as_str(), p.count)).collect();
        assert_eq!(
            periods,
            vec![("2022-12", 1), ("2023-01", 1), ("2023-03", 2)]
        );
    }

    #[test]
    fn test_monthly_trend_orders_years_numerically() {
        let t = table(&["2024-02-01", "2023-11-05", "2024-01-09", "2023-11-20"]);
        let trend = monthly_trend(&t).unwrap();

        let periods: Vec<&str> = trend.iter().map(|p| p.period.as_str()).collect();
        assert_eq!(periods, vec!["2023-11", "2024-01", "2024-02"]);
        assert_eq!(trend[0].count, 2);
        assert_eq!((trend[2].year, trend[2].month), (2024, 2));
    }

    #[test]
    fn test_empty_table_gives_zeroes() {
        let t = table(&[]);
        assert!(count_by_month(&t).unwrap().iter().all(|m| m.count == 0));
        assert!(count_by_weekday(&t).unwrap().iter().all(|w| w.count == 0));
        assert!(count_by_day_of_month(&t).unwrap().iter().all(|d| d.count == 0));
        assert_eq!(month_weekday_heatmap(&t).unwrap().total(), 0);
        assert!(monthly_trend(&t).unwrap().is_empty());
    }
}
