//! Working-day table import.

use super::{collect_rows, parse_rows, read_text, ImportError, Row, RowResult};
use crate::libs::period::YearMonth;
use crate::libs::working_days::WorkingDays;
use std::path::Path;

pub const WORKING_DAYS_HEADER: [&str; 3] = ["Name", "Month", "Working Days"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDayEntry {
    pub name: String,
    pub month: YearMonth,
    pub days: u32,
}

fn parse_entry(row: &Row) -> RowResult<WorkingDayEntry> {
    let name = row.required(0, "Name")?.to_string();
    let raw_month = row.required(1, "Month")?;
    let month = YearMonth::parse(raw_month).map_err(|e| row.error(e.to_string()))?;
    let raw_days = row.required(2, "Working Days")?;
    let days: u32 = raw_days
        .parse()
        .map_err(|_| row.error(format!("invalid working days '{}'", raw_days)))?;
    if days > 31 {
        return Err(row.error(format!("working days {} exceed a month", days)));
    }

    Ok(WorkingDayEntry { name, month, days })
}

pub fn parse_working_days(text: &str) -> Result<Vec<RowResult<WorkingDayEntry>>, ImportError> {
    parse_rows(text, &WORKING_DAYS_HEADER, parse_entry)
}

/// Builds a working-day table; entries missing from the file fall back to
/// `default_days`.
pub fn load_working_days(text: &str, default_days: u32) -> Result<WorkingDays, ImportError> {
    let mut table = WorkingDays::new(default_days);
    for entry in collect_rows(parse_working_days(text)?)? {
        table.insert(&entry.name, entry.month, entry.days);
    }
    Ok(table)
}

pub fn import_working_days(path: &Path, default_days: u32) -> Result<WorkingDays, ImportError> {
    load_working_days(&read_text(path)?, default_days)
}
