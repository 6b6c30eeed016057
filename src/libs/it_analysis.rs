//! IT issue reports: the timeline list and the per-assignee roll-up.

use crate::libs::issue::AssignedIssue;
use crate::libs::table::{headers, Cell, Tabular};
use crate::libs::timeline::{build_timelines, latest_reported_date, IssueTimeline, TimelineState};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssigneeIssueSummary {
    pub assignee: String,
    pub issues: usize,
    pub ongoing: usize,
    pub resolved: usize,
    pub offline_records: usize,
    pub total_active_days: i64,
    pub average_resolution_days: Option<f64>,
}

/// Rolls timelines up by their current assignee, sorted by name.
pub fn summarize_by_assignee(timelines: &[IssueTimeline]) -> Vec<AssigneeIssueSummary> {
    let mut groups: BTreeMap<&str, (AssigneeIssueSummary, Vec<i64>)> = BTreeMap::new();

    for timeline in timelines {
        let (summary, resolutions) = groups.entry(timeline.assigned_to.as_str()).or_insert_with(|| {
            (
                AssigneeIssueSummary {
                    assignee: timeline.assigned_to.clone(),
                    ..Default::default()
                },
                vec![],
            )
        });

        summary.issues += 1;
        match timeline.state {
            TimelineState::Ongoing => summary.ongoing += 1,
            TimelineState::Resolved => summary.resolved += 1,
        }
        summary.offline_records += timeline.offline_records;
        summary.total_active_days += timeline.total_active_days;
        if let Some(days) = timeline.resolution_days {
            resolutions.push(days);
        }
    }

    groups
        .into_values()
        .map(|(mut summary, resolutions)| {
            if !resolutions.is_empty() {
                let total: i64 = resolutions.iter().sum();
                summary.average_resolution_days = Some(total as f64 / resolutions.len() as f64);
            }
            summary
        })
        .collect()
}

/// Timelines plus the assignee roll-up for one IT log.
#[derive(Debug, Clone, Serialize)]
pub struct IssueReport {
    pub latest_date: Option<NaiveDate>,
    pub timelines: Vec<IssueTimeline>,
    pub assignees: Vec<AssigneeIssueSummary>,
}

impl IssueReport {
    pub fn build(issues: &[AssignedIssue]) -> Self {
        let timelines = build_timelines(issues);
        let assignees = summarize_by_assignee(&timelines);
        IssueReport {
            latest_date: latest_reported_date(issues),
            timelines,
            assignees,
        }
    }

    /// The assignee roll-up as its own table.
    pub fn assignee_table(&self) -> AssigneeTable<'_> {
        AssigneeTable(&self.assignees)
    }
}

fn interval_list(timeline: &IssueTimeline) -> String {
    timeline
        .intervals
        .iter()
        .map(|i| {
            if i.start == i.end {
                i.start.to_string()
            } else {
                format!("{}..{}", i.start, i.end)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl Tabular for IssueReport {
    fn title(&self) -> String {
        match self.latest_date {
            Some(date) => format!("IT issue timeline as of {}", date),
            None => "IT issue timeline".to_string(),
        }
    }

    fn headers(&self) -> Vec<String> {
        headers(&[
            "Project",
            "Zone",
            "Issue",
            "Assigned To",
            "State",
            "Active Days",
            "Occurrences",
            "Offline Days",
            "Resolution (days)",
            "Intervals",
        ])
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        self.timelines
            .iter()
            .map(|t| {
                vec![
                    Cell::text(&t.project_name),
                    Cell::text(&t.zone),
                    Cell::text(&t.issue),
                    Cell::text(&t.assigned_to),
                    Cell::text(format!("{:?}", t.state)),
                    Cell::Count(t.total_active_days),
                    Cell::count(t.intervals.len()),
                    Cell::count(t.offline_records),
                    t.resolution_days.map(Cell::Count).unwrap_or(Cell::Empty),
                    Cell::Text(interval_list(t)),
                ]
            })
            .collect()
    }
}

pub struct AssigneeTable<'a>(&'a [AssigneeIssueSummary]);

impl Tabular for AssigneeTable<'_> {
    fn title(&self) -> String {
        "IT issues by assignee".to_string()
    }

    fn headers(&self) -> Vec<String> {
        headers(&["Assigned To", "Issues", "Ongoing", "Resolved", "Offline Days", "Active Days", "Avg Resolution (days)"])
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        self.0
            .iter()
            .map(|a| {
                vec![
                    Cell::text(&a.assignee),
                    Cell::count(a.issues),
                    Cell::count(a.ongoing),
                    Cell::count(a.resolved),
                    Cell::count(a.offline_records),
                    Cell::Count(a.total_active_days),
                    a.average_resolution_days.map(Cell::Decimal).unwrap_or(Cell::Empty),
                ]
            })
            .collect()
    }
}
