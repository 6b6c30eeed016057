use crate::libs::period::{parse_iso_date, Dated};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow state of an ERP correction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CorrectionStatus {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl FromStr for CorrectionStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value.trim().to_lowercase().chars().filter(|c| c.is_alphanumeric()).collect();
        match normalized.as_str() {
            "" | "pending" => Ok(CorrectionStatus::Pending),
            "inprogress" => Ok(CorrectionStatus::InProgress),
            "completed" => Ok(CorrectionStatus::Completed),
            "rejected" => Ok(CorrectionStatus::Rejected),
            _ => Err(format!(
                "unknown status '{}', expected Pending, In Progress, Completed or Rejected",
                value.trim()
            )),
        }
    }
}

impl fmt::Display for CorrectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            CorrectionStatus::Pending => "Pending",
            CorrectionStatus::InProgress => "In Progress",
            CorrectionStatus::Completed => "Completed",
            CorrectionStatus::Rejected => "Rejected",
        };
        write!(f, "{}", text)
    }
}

/// One ERP data-correction request.
///
/// `completed_date` and `completed_time` are only kept when the status is
/// [`CorrectionStatus::Completed`]; use [`CorrectionRecord::new`] to get that
/// guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionRecord {
    pub officer: String,
    pub department: String,
    pub designation: String,
    pub project_name: String,
    pub document_type: String,
    pub tracking_number: String,
    pub correction_type: String,
    pub entry_date: String,
    pub entry_time: String,
    pub status: CorrectionStatus,
    pub completed_date: Option<String>,
    pub completed_time: Option<String>,
    pub old_data: String,
    pub new_data: String,
    pub remarks: Option<String>,
}

/// Mandatory identifying fields of a correction request.
#[derive(Debug, Clone)]
pub struct CorrectionHeader {
    pub officer: String,
    pub department: String,
    pub designation: String,
    pub project_name: String,
    pub document_type: String,
    pub tracking_number: String,
    pub correction_type: String,
    pub entry_date: String,
    pub entry_time: String,
}

impl CorrectionRecord {
    pub fn new(header: CorrectionHeader, status: CorrectionStatus, completed: Option<(String, String)>) -> Self {
        let (completed_date, completed_time) = match (status, completed) {
            (CorrectionStatus::Completed, Some((date, time))) => (Some(date), Some(time)),
            _ => (None, None),
        };

        CorrectionRecord {
            officer: header.officer,
            department: header.department,
            designation: header.designation,
            project_name: header.project_name,
            document_type: header.document_type,
            tracking_number: header.tracking_number,
            correction_type: header.correction_type,
            entry_date: header.entry_date,
            entry_time: header.entry_time,
            status,
            completed_date,
            completed_time,
            old_data: String::new(),
            new_data: String::new(),
            remarks: None,
        }
    }

    pub fn entered_at(&self) -> Option<NaiveDateTime> {
        combine(&self.entry_date, &self.entry_time)
    }

    pub fn completed_at(&self) -> Option<NaiveDateTime> {
        match (&self.completed_date, &self.completed_time) {
            (Some(date), Some(time)) => combine(date, time),
            _ => None,
        }
    }

    /// Time from entry to completion.
    ///
    /// `None` when the request is not completed, a timestamp is missing or
    /// malformed, or completion precedes entry.
    pub fn resolution_duration(&self) -> Option<Duration> {
        if self.status != CorrectionStatus::Completed {
            return None;
        }
        let start = self.entered_at()?;
        let end = self.completed_at()?;
        if end < start {
            return None;
        }
        Some(end - start)
    }
}

impl Dated for CorrectionRecord {
    fn date_str(&self) -> &str {
        &self.entry_date
    }
}

/// Parses a clock time in 24h (`14:05`, `14:05:30`) or 12h (`2:05 PM`) form.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    ["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}

fn combine(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_iso_date(date)?;
    let time = if time.trim().is_empty() {
        NaiveTime::from_hms_opt(0, 0, 0)?
    } else {
        parse_clock_time(time)?
    };
    Some(NaiveDateTime::new(date, time))
}
