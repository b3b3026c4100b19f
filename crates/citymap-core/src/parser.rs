// crates/citymap-core/src/parser.rs

//! # Record Parser
//!
//! Turns the text store format into [`CityRecord`]s and back.
//!
//! Each line is one record:
//!
//! ```text
//! "Nashville, TN", 36.17, -86.78;
//! ```
//!
//! Ingest is lenient: lines that do not match the grammar, or whose
//! coordinates are out of bounds, are dropped without failing the parse.

use crate::geo::is_valid_coordinate;
use crate::model::CityRecord;
use crate::text::ROW;
use serde::Serialize;
use std::fmt;

/// Why a line was left out of the parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The line does not have the `"City, ST", lat, lon;` shape.
    Malformed,
    /// Shape is fine but latitude or longitude is outside Earth bounds.
    OutOfBounds,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Malformed => f.write_str("malformed row"),
            RejectReason::OutOfBounds => f.write_str("coordinates out of bounds"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    /// 1-based line number in the input.
    pub line: usize,
    pub content: String,
    pub reason: RejectReason,
}

/// Accepted records plus the rows that were skipped.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub records: Vec<CityRecord>,
    pub rejected: Vec<RejectedRow>,
}

/// Parses the store format, silently dropping bad rows. Order of the input
/// lines is preserved.
pub fn parse(text: &str) -> Vec<CityRecord> {
    parse_with_report(text).records
}

/// Same as [`parse`] but also reports every rejected, non-blank line.
pub fn parse_with_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                log::debug!("skipping line {}: {} ({:?})", idx + 1, reason, line);
                report.rejected.push(RejectedRow {
                    line: idx + 1,
                    content: line.to_owned(),
                    reason,
                });
            }
        }
    }
    report
}

fn parse_line(line: &str) -> Result<CityRecord, RejectReason> {
    let caps = ROW.captures(line).ok_or(RejectReason::Malformed)?;

    let (lat, lon) = (&caps["lat"], &caps["lon"]);
    if !is_valid_coordinate(lat, lon) {
        return Err(RejectReason::OutOfBounds);
    }
    // The grammar only admits plain decimals, so these cannot fail.
    let latitude = lat.parse::<f64>().map_err(|_| RejectReason::Malformed)?;
    let longitude = lon.parse::<f64>().map_err(|_| RejectReason::Malformed)?;

    Ok(CityRecord::new(&caps["city"], &caps["state"], latitude, longitude))
}

/// Renders one record in the store format.
pub fn format_record(record: &CityRecord) -> String {
    format!(
        "\"{}, {}\", {}, {};",
        record.city, record.state, record.latitude, record.longitude
    )
}

/// Renders records one per line, in order. Inverse of [`parse`] for any
/// record that satisfies the record invariants.
pub fn serialize<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a CityRecord>,
{
    records
        .into_iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n")
}
