//! Tabular column extraction
//!
//! Loads one numeric column from a CSV source, restricted to rows that
//! match a set of equality filters. Empty and non-numeric cells in the
//! value column are dropped, mirroring how callers are expected to strip
//! missing values before testing.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::{StatsError, StatsResult};

/// Equality predicate on one column
#[derive(Debug, Clone)]
pub struct ColumnFilter {
    /// Column to match on
    pub column: String,
    /// Required cell value (exact string match)
    pub equals: String,
}

impl ColumnFilter {
    pub fn new(column: impl Into<String>, equals: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            equals: equals.into(),
        }
    }
}

/// Extract the numeric `value_column` of all rows matching every filter.
///
/// # Errors
///
/// - `MissingColumn` if the value column or a filter column is absent.
/// - `EmptyFilter` if no row survives filtering and value parsing; batch
///   callers treat this as a skipped comparison rather than a failure.
pub fn load_column<R: Read>(
    reader: R,
    value_column: &str,
    filters: &[ColumnFilter],
    label: &str,
) -> StatsResult<Vec<f64>> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let value_idx = column_index(&headers, value_column)?;
    let filter_idxs: Vec<usize> = filters
        .iter()
        .map(|f| column_index(&headers, &f.column))
        .collect::<StatsResult<_>>()?;

    let mut values = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let matches = filters
            .iter()
            .zip(filter_idxs.iter())
            .all(|(f, &idx)| record.get(idx).map(str::trim) == Some(f.equals.as_str()));
        if !matches {
            continue;
        }
        if let Some(cell) = record.get(value_idx) {
            // Empty and non-numeric cells are treated as missing
            if let Ok(v) = cell.trim().parse::<f64>() {
                if v.is_finite() {
                    values.push(v);
                }
            }
        }
    }

    debug!(label, column = value_column, n = values.len(), "loaded column");

    if values.is_empty() {
        return Err(StatsError::EmptyFilter {
            label: label.to_string(),
        });
    }
    Ok(values)
}

/// Convenience wrapper: [`load_column`] from a file path.
pub fn load_column_from_path(
    path: &Path,
    value_column: &str,
    filters: &[ColumnFilter],
    label: &str,
) -> StatsResult<Vec<f64>> {
    let file = std::fs::File::open(path)?;
    load_column(file, value_column, filters, label)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> StatsResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| StatsError::MissingColumn(name.to_string()))
}
