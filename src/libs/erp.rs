//! ERP correction analysis per officer.

use crate::libs::context::AnalyticsContext;
use crate::libs::correction::{CorrectionRecord, CorrectionStatus};
use crate::libs::ordering::{sort_rows, OrgRanked};
use crate::libs::period::{filter_by_period, Period};
use crate::libs::stability::percent_of;
use crate::libs::table::{headers, Cell, Tabular};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OfficerCorrectionSummary {
    pub officer: String,
    pub department: String,
    pub designation: String,
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub rejected: usize,
    pub completion_rate: f64,
    /// Mean entry-to-completion time over completed requests with valid
    /// timestamps.
    pub average_resolution_hours: Option<f64>,
    pub by_type: BTreeMap<String, usize>,
}

impl OrgRanked for OfficerCorrectionSummary {
    fn department(&self) -> &str {
        &self.department
    }
    fn designation(&self) -> &str {
        &self.designation
    }
    fn name(&self) -> &str {
        &self.officer
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrectionReport {
    pub period: Option<Period>,
    pub rows: Vec<OfficerCorrectionSummary>,
}

/// Summarizes correction requests per officer.
///
/// With a period, only requests entered inside it are counted.
pub fn build_correction_summary(
    records: &[CorrectionRecord],
    period: Option<&Period>,
    ctx: &AnalyticsContext,
) -> Vec<OfficerCorrectionSummary> {
    let selected: Vec<&CorrectionRecord> = match period {
        Some(period) => filter_by_period(records, period),
        None => records.iter().collect(),
    };

    let mut groups: BTreeMap<&str, (OfficerCorrectionSummary, Vec<f64>)> = BTreeMap::new();
    for record in selected {
        let (summary, resolutions) = groups.entry(record.officer.as_str()).or_insert_with(|| {
            (
                OfficerCorrectionSummary {
                    officer: record.officer.clone(),
                    department: record.department.clone(),
                    designation: record.designation.clone(),
                    ..Default::default()
                },
                vec![],
            )
        });

        summary.total += 1;
        match record.status {
            CorrectionStatus::Pending => summary.pending += 1,
            CorrectionStatus::InProgress => summary.in_progress += 1,
            CorrectionStatus::Completed => summary.completed += 1,
            CorrectionStatus::Rejected => summary.rejected += 1,
        }
        *summary.by_type.entry(record.correction_type.clone()).or_default() += 1;

        if let Some(duration) = record.resolution_duration() {
            resolutions.push(duration.num_seconds() as f64 / 3600.0);
        }
    }

    let rows = groups
        .into_values()
        .map(|(mut summary, resolutions)| {
            summary.completion_rate = percent_of(summary.completed as u64, summary.total as u64);
            summary.average_resolution_hours = if resolutions.is_empty() {
                None
            } else {
                Some(resolutions.iter().sum::<f64>() / resolutions.len() as f64)
            };
            summary
        })
        .collect();

    sort_rows(rows, &ctx.order)
}

impl CorrectionReport {
    pub fn build(records: &[CorrectionRecord], period: Option<Period>, ctx: &AnalyticsContext) -> Self {
        CorrectionReport {
            rows: build_correction_summary(records, period.as_ref(), ctx),
            period,
        }
    }
}

impl Tabular for CorrectionReport {
    fn title(&self) -> String {
        match &self.period {
            Some(period) => format!("ERP corrections: {}", period),
            None => "ERP corrections: all dates".to_string(),
        }
    }

    fn headers(&self) -> Vec<String> {
        headers(&[
            "Officer",
            "Department",
            "Designation",
            "Total",
            "Pending",
            "In Progress",
            "Completed",
            "Rejected",
            "Completion %",
            "Avg Resolution (h)",
            "Types",
        ])
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        self.rows
            .iter()
            .map(|row| {
                let types = row
                    .by_type
                    .iter()
                    .map(|(kind, count)| format!("{} ({})", kind, count))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![
                    Cell::text(&row.officer),
                    Cell::text(&row.department),
                    Cell::text(&row.designation),
                    Cell::count(row.total),
                    Cell::count(row.pending),
                    Cell::count(row.in_progress),
                    Cell::count(row.completed),
                    Cell::count(row.rejected),
                    Cell::Percent(row.completion_rate),
                    row.average_resolution_hours.map(Cell::Decimal).unwrap_or(Cell::Empty),
                    Cell::Text(types),
                ]
            })
            .collect()
    }
}
