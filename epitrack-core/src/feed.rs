//! Parsing of the row-oriented historical feed text.

use csv::{ReaderBuilder, StringRecord, Trim};
use epitrack_types::{DateKey, EpiError, FeedRow, FeedTable, METADATA_COLUMNS};

fn csv_error(e: csv::Error) -> EpiError {
    EpiError::shape(format!("malformed feed: {e}"))
}

fn cell(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}

/// Parse one metric's CSV blob into a [`FeedTable`].
///
/// The header carries four metadata columns (`Province/State`,
/// `Country/Region`, `Lat`, `Long`) followed by `M/D/YY` date columns. Quoted
/// fields such as `"Korea, South"` are supported; blank lines are skipped.
///
/// # Errors
/// Returns `EpiError::ShapeMismatch` for empty text, a header without date
/// columns, a non-date column after the metadata, or unreadable CSV.
pub fn parse_feed_csv(text: &str) -> Result<FeedTable, EpiError> {
    if text.trim().is_empty() {
        return Err(EpiError::shape("empty feed"));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.len() <= METADATA_COLUMNS {
        return Err(EpiError::shape(format!(
            "feed header has {} columns, expected metadata plus dates",
            headers.len()
        )));
    }

    let date_columns: Vec<String> = headers
        .iter()
        .skip(METADATA_COLUMNS)
        .map(str::to_string)
        .collect();
    for label in &date_columns {
        DateKey::parse_label(label)?;
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(FeedRow {
            province_state: cell(&record, 0),
            country_region: cell(&record, 1),
            lat: cell(&record, 2),
            long: cell(&record, 3),
            values: record
                .iter()
                .skip(METADATA_COLUMNS)
                .map(str::to_string)
                .collect(),
        });
    }

    Ok(FeedTable { date_columns, rows })
}
