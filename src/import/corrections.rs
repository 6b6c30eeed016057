//! ERP correction request import.
//!
//! The first nine columns identify the request and must be filled in. The
//! completion columns are only read for completed requests; an empty
//! status means the request is still pending.

use super::dates::normalize_date;
use super::{collect_rows, parse_rows, read_text, ImportError, Row, RowResult};
use crate::libs::correction::{parse_clock_time, CorrectionHeader, CorrectionRecord, CorrectionStatus};
use std::path::Path;

pub const CORRECTION_HEADER: [&str; 15] = [
    "Officer Name",
    "Department",
    "Designation",
    "Project Name",
    "Document Type",
    "Tracking Number",
    "Correction Type",
    "Entry Date",
    "Entry Time",
    "Status",
    "Completed Date",
    "Completed Time",
    "Old Data",
    "New Data",
    "Remarks",
];

const MANDATORY_COLUMNS: usize = 9;

fn date_cell(row: &Row, index: usize) -> RowResult<String> {
    let raw = row.required(index, CORRECTION_HEADER[index])?;
    normalize_date(raw).ok_or_else(|| row.error(format!("invalid {} '{}'", CORRECTION_HEADER[index], raw)))
}

fn time_cell(row: &Row, index: usize) -> RowResult<String> {
    let raw = row.get(index);
    if !raw.is_empty() && parse_clock_time(raw).is_none() {
        return Err(row.error(format!("invalid {} '{}'", CORRECTION_HEADER[index], raw)));
    }
    Ok(raw.to_string())
}

fn parse_correction(row: &Row) -> RowResult<CorrectionRecord> {
    for (index, column) in CORRECTION_HEADER.iter().enumerate().take(MANDATORY_COLUMNS) {
        row.required(index, column)?;
    }

    let header = CorrectionHeader {
        officer: row.get(0).to_string(),
        department: row.get(1).to_string(),
        designation: row.get(2).to_string(),
        project_name: row.get(3).to_string(),
        document_type: row.get(4).to_string(),
        tracking_number: row.get(5).to_string(),
        correction_type: row.get(6).to_string(),
        entry_date: date_cell(row, 7)?,
        entry_time: time_cell(row, 8)?,
    };

    let status: CorrectionStatus = row.get(9).parse().map_err(|e: String| row.error(e))?;
    let completed = if status == CorrectionStatus::Completed && !row.get(10).is_empty() {
        Some((date_cell(row, 10)?, time_cell(row, 11)?))
    } else {
        None
    };

    let mut record = CorrectionRecord::new(header, status, completed);
    record.old_data = row.get(12).to_string();
    record.new_data = row.get(13).to_string();
    record.remarks = row.optional(14);
    Ok(record)
}

pub fn parse_corrections(text: &str) -> Result<Vec<RowResult<CorrectionRecord>>, ImportError> {
    parse_rows(text, &CORRECTION_HEADER, parse_correction)
}

pub fn load_corrections(text: &str) -> Result<Vec<CorrectionRecord>, ImportError> {
    collect_rows(parse_corrections(text)?)
}

pub fn import_corrections(path: &Path) -> Result<Vec<CorrectionRecord>, ImportError> {
    load_corrections(&read_text(path)?)
}
