//! CSV feed parsing.

use super::types::FeedError;
use crate::mapping::MappingRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use tracing::warn;

/// Columns a row must carry to describe a usable shelf segment.
const REQUIRED_COLUMNS: [&str; 5] = [
    "libraryName",
    "collectionName",
    "rangeStart",
    "rangeEnd",
    "shelfCode",
];

/// Counters from one feed parse, for the refresh log line and `check-feed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    /// Rows that produced a mapping record.
    pub parsed: usize,
    /// Rows dropped for missing mandatory fields or CSV-level errors.
    pub dropped: usize,
}

/// Parses a header-labeled CSV body into mapping records.
///
/// Column order is determined by header name, not position. A row missing
/// any mandatory field is dropped and logged, never fatal; only a body with
/// no usable header row is an error. All fields are trimmed, and absent
/// optional fields become `None` rather than empty strings.
pub fn parse_feed(body: &[u8]) -> Result<(Vec<MappingRecord>, FeedStats), FeedError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(body);

    let headers = reader
        .headers()
        .map_err(|e| FeedError::Parse(format!("unreadable header row: {}", e)))?;
    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), i))
        .collect();

    for required in REQUIRED_COLUMNS {
        if !columns.contains_key(required) {
            return Err(FeedError::Parse(format!(
                "missing required column '{}'",
                required
            )));
        }
    }

    let mut records = Vec::new();
    let mut stats = FeedStats::default();

    for (row_number, row) in reader.records().enumerate() {
        // Header is line 1; the first data row is line 2.
        let line = row_number + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(line, error = %e, "dropping malformed feed row");
                stats.dropped += 1;
                continue;
            }
        };
        match record_from_row(&row, &columns) {
            Some(record) => {
                records.push(record);
                stats.parsed += 1;
            }
            None => {
                warn!(line, "dropping feed row with missing mandatory fields");
                stats.dropped += 1;
            }
        }
    }

    Ok((records, stats))
}

/// Builds one record from a CSV row, or `None` when a mandatory field is
/// missing or blank.
fn record_from_row(row: &StringRecord, columns: &HashMap<String, usize>) -> Option<MappingRecord> {
    // Blank and absent cells both become None; mandatory fields then fail
    // the row via `?`.
    let field = |name: &str| -> Option<String> {
        let value = row.get(*columns.get(name)?)?;
        (!value.is_empty()).then(|| value.to_string())
    };

    Some(MappingRecord {
        library_name: field("libraryName")?,
        library_name_alt: field("libraryNameAlt"),
        collection_name: field("collectionName")?,
        collection_name_alt: field("collectionNameAlt"),
        range_start: field("rangeStart")?,
        range_end: field("rangeEnd")?,
        shelf_code: field("shelfCode")?,
        floor: field("floor"),
        shelf_label: field("shelfLabel"),
        description: field("description"),
        description_alt: field("descriptionAlt"),
        notes: field("notes"),
    })
}
