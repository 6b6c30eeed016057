//! Project-visit log import.

use super::dates::normalize_date;
use super::{collect_rows, parse_rows, read_text, ImportError, Row, RowResult};
use crate::libs::visit::VisitRecord;
use std::path::Path;

pub const VISIT_HEADER: [&str; 10] = [
    "Sl No",
    "Date",
    "Visitor Name",
    "Department",
    "Designation",
    "Visited Project Name",
    "Entry Time",
    "Out Time",
    "Duration",
    "Formula",
];

fn parse_visit(row: &Row) -> RowResult<VisitRecord> {
    let raw_date = row.required(1, "Date")?;
    let date = normalize_date(raw_date).ok_or_else(|| row.error(format!("invalid date '{}'", raw_date)))?;

    Ok(VisitRecord {
        date,
        visitor_name: row.required(2, "Visitor Name")?.to_string(),
        department: row.required(3, "Department")?.to_string(),
        designation: row.get(4).to_string(),
        project_name: row.get(5).to_string(),
        entry_time: row.get(6).to_string(),
        out_time: row.get(7).to_string(),
        // Unparseable durations count as zero seconds.
        duration: row.get(8).to_string(),
        remarks: row.optional(9),
    })
}

/// Parses visit CSV text into per-row outcomes.
pub fn parse_visits(text: &str) -> Result<Vec<RowResult<VisitRecord>>, ImportError> {
    parse_rows(text, &VISIT_HEADER, parse_visit)
}

pub fn load_visits(text: &str) -> Result<Vec<VisitRecord>, ImportError> {
    collect_rows(parse_visits(text)?)
}

pub fn import_visits(path: &Path) -> Result<Vec<VisitRecord>, ImportError> {
    load_visits(&read_text(path)?)
}
