use chrono::{Datelike, NaiveDate};

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d-%b-%y", "%d-%b-%Y", "%d/%m/%Y", "%d-%m-%Y"];

/// Parses a date cell as written by the source spreadsheets.
///
/// Accepts `1-Jul-25`, `1-Jul-2025`, `1/7/2025`, `1-7-2025` and ISO
/// `2025-07-01`. Years before 1900 are rejected, which catches two-digit
/// years in the numeric formats.
pub fn parse_cell_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .filter(|date| date.year() >= 1900)
}

/// Parses a date cell and renders it as `YYYY-MM-DD`.
pub fn normalize_date(value: &str) -> Option<String> {
    parse_cell_date(value).map(|date| date.format("%Y-%m-%d").to_string())
}
