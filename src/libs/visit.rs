use crate::libs::formatter::parse_duration_to_seconds;
use crate::libs::period::Dated;
use serde::{Deserialize, Serialize};

/// One row of a project-visit log.
///
/// Records are immutable once imported. `date` holds the normalized
/// `YYYY-MM-DD` string and `duration` the raw `"H:M:S"` cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub date: String,
    pub visitor_name: String,
    pub department: String,
    pub designation: String,
    pub project_name: String,
    pub entry_time: String,
    pub out_time: String,
    pub duration: String,
    pub remarks: Option<String>,
}

impl VisitRecord {
    pub fn new(date: &str, visitor_name: &str, department: &str, designation: &str, project_name: &str, duration: &str) -> Self {
        VisitRecord {
            date: date.to_string(),
            visitor_name: visitor_name.to_string(),
            department: department.to_string(),
            designation: designation.to_string(),
            project_name: project_name.to_string(),
            entry_time: String::new(),
            out_time: String::new(),
            duration: duration.to_string(),
            remarks: None,
        }
    }

    /// Visit length in seconds; `0` when the duration cell is unparseable.
    pub fn duration_seconds(&self) -> u64 {
        parse_duration_to_seconds(&self.duration)
    }
}

impl Dated for VisitRecord {
    fn date_str(&self) -> &str {
        &self.date
    }
}
