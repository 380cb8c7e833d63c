//! Historical price loading from CSV.
//!
//! Accepts the common export shape: a header row with a `close` (or
//! `price`) column, one price per data row, and optionally a `date` column
//! that must be strictly ascending. Column matching is case-insensitive.
//! Everything else in the file is ignored.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use noiselab_core::{PriceSeries, SeriesError};

/// Errors from the price-loading layer. `row` is the 1-based line in the
/// file, counting the header.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no 'close' or 'price' column in header {header:?}")]
    MissingPriceColumn { header: Vec<String> },

    #[error("row {row}: cannot parse price '{value}'")]
    BadPrice { row: usize, value: String },

    #[error("row {row}: cannot parse date '{value}' (expected YYYY-MM-DD)")]
    BadDate { row: usize, value: String },

    #[error("row {row}: date {date} is not after the previous row's date")]
    OutOfOrderDate { row: usize, date: NaiveDate },

    #[error("series error: {0}")]
    Series(#[from] SeriesError),
}

/// Load a close-price series from a CSV file.
pub fn load_close_series(path: &Path) -> Result<PriceSeries, LoadError> {
    let reader = csv::Reader::from_path(path)?;
    parse_close_series(reader)
}

/// Parse a close-price series from any CSV reader.
pub fn parse_close_series<R: Read>(mut reader: csv::Reader<R>) -> Result<PriceSeries, LoadError> {
    let headers = reader.headers()?.clone();
    let lower: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

    let price_col = lower
        .iter()
        .position(|h| h == "close")
        .or_else(|| lower.iter().position(|h| h == "price"))
        .ok_or_else(|| LoadError::MissingPriceColumn {
            header: headers.iter().map(|h| h.to_string()).collect(),
        })?;
    let date_col = lower.iter().position(|h| h == "date");

    let mut values = Vec::new();
    let mut previous_date: Option<NaiveDate> = None;

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = i + 2; // 1-based, after the header line

        if let Some(col) = date_col {
            let raw = record.get(col).unwrap_or("").trim();
            let date =
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| LoadError::BadDate {
                    row,
                    value: raw.to_string(),
                })?;
            if let Some(prev) = previous_date {
                if date <= prev {
                    return Err(LoadError::OutOfOrderDate { row, date });
                }
            }
            previous_date = Some(date);
        }

        let raw = record.get(price_col).unwrap_or("").trim();
        let value: f64 = raw.parse().map_err(|_| LoadError::BadPrice {
            row,
            value: raw.to_string(),
        })?;
        values.push(value);
    }

    Ok(PriceSeries::new(values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(text: &str) -> Result<PriceSeries, LoadError> {
        parse_close_series(csv::Reader::from_reader(text.as_bytes()))
    }

    #[test]
    fn parses_date_close_file() {
        let series = parse(
            "date,close\n\
             2024-01-02,100.0\n\
             2024-01-03,101.5\n\
             2024-01-04,99.25\n",
        )
        .unwrap();
        assert_eq!(series.values(), &[100.0, 101.5, 99.25]);
    }

    #[test]
    fn price_column_is_accepted_as_fallback() {
        let series = parse("price\n10.0\n11.0\n").unwrap();
        assert_eq!(series.values(), &[10.0, 11.0]);
    }

    #[test]
    fn header_matching_is_case_insensitive() {
        let series = parse("Date,Close\n2024-01-02,100.0\n2024-01-03,101.0\n").unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let series = parse(
            "date,open,high,low,close,volume\n\
             2024-01-02,99.0,101.0,98.0,100.0,1000\n\
             2024-01-03,100.0,102.0,99.0,101.0,1200\n",
        )
        .unwrap();
        assert_eq!(series.values(), &[100.0, 101.0]);
    }

    #[test]
    fn missing_price_column_is_rejected() {
        let err = parse("date,open\n2024-01-02,99.0\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingPriceColumn { .. }));
    }

    #[test]
    fn unparseable_price_is_rejected_with_row() {
        let err = parse("close\n100.0\nn/a\n").unwrap_err();
        match err {
            LoadError::BadPrice { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_order_dates_are_rejected() {
        let err = parse(
            "date,close\n\
             2024-01-03,100.0\n\
             2024-01-02,101.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::OutOfOrderDate { row: 3, .. }));
    }

    #[test]
    fn non_positive_price_surfaces_the_series_error() {
        let err = parse("close\n100.0\n-1.0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Series(SeriesError::InvalidPrice { index: 1, .. })
        ));
    }

    #[test]
    fn single_row_is_too_short() {
        let err = parse("close\n100.0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Series(SeriesError::TooShort { len: 1 })
        ));
    }

    #[test]
    fn loads_from_a_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "date,close\n2024-01-02,100.0\n2024-01-03,102.0\n").unwrap();
        let series = load_close_series(file.path()).unwrap();
        assert_eq!(series.values(), &[100.0, 102.0]);
    }
}
