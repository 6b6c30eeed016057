use crate::libs::period::{parse_iso_date, Dated};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reported state of a site's IT equipment on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueStatus {
    Issue,
    Offline,
}

impl FromStr for IssueStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "issue" => Ok(IssueStatus::Issue),
            "offline" => Ok(IssueStatus::Offline),
            other => Err(format!("unknown status '{}', expected Issue or Offline", other)),
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One daily entry of the IT issue log.
///
/// The same `(issue, project_name)` pair reported on consecutive days is
/// one ongoing occurrence; see [`crate::libs::timeline`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedIssue {
    pub id: String,
    pub issue: String,
    pub reported_at: String,
    pub assigned_to: String,
    pub status: IssueStatus,
    pub project_name: String,
    pub zone: String,
}

impl AssignedIssue {
    pub fn reported_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.reported_at)
    }
}

impl Dated for AssignedIssue {
    fn date_str(&self) -> &str {
        &self.reported_at
    }
}
