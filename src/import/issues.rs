//! IT issue log import.

use super::dates::normalize_date;
use super::{collect_rows, parse_rows, read_text, ImportError, Row, RowResult};
use crate::libs::issue::{AssignedIssue, IssueStatus};
use std::path::Path;

pub const ISSUE_HEADER: [&str; 7] = [
    "SL No",
    "Date",
    "Project Name",
    "Zone",
    "Status",
    "Assigned Issue",
    "Assigned To",
];

fn parse_issue(row: &Row) -> RowResult<AssignedIssue> {
    let raw_date = row.required(1, "Date")?;
    let reported_at = normalize_date(raw_date).ok_or_else(|| row.error(format!("invalid date '{}'", raw_date)))?;
    let status: IssueStatus = row.required(4, "Status")?.parse().map_err(|e: String| row.error(e))?;

    let id = match row.get(0) {
        "" => row.line().to_string(),
        sl => sl.to_string(),
    };

    Ok(AssignedIssue {
        id,
        issue: row.required(5, "Assigned Issue")?.to_string(),
        reported_at,
        assigned_to: row.get(6).to_string(),
        status,
        project_name: row.required(2, "Project Name")?.to_string(),
        zone: row.get(3).to_string(),
    })
}

pub fn parse_issues(text: &str) -> Result<Vec<RowResult<AssignedIssue>>, ImportError> {
    parse_rows(text, &ISSUE_HEADER, parse_issue)
}

pub fn load_issues(text: &str) -> Result<Vec<AssignedIssue>, ImportError> {
    collect_rows(parse_issues(text)?)
}

pub fn import_issues(path: &Path) -> Result<Vec<AssignedIssue>, ImportError> {
    load_issues(&read_text(path)?)
}
