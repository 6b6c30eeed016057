//! IT issue timelines.
//!
//! The IT log has one row per site per day while a problem persists. This
//! module folds those daily rows back into occurrences: rows for the same
//! `(issue, project)` on consecutive days form one active interval, and a
//! gap of more than one day starts a new interval.
//!
//! An issue counts as ongoing when its last interval ends on the most
//! recent date found anywhere in the log. Importing a newer row for an
//! unrelated issue therefore turns every issue that was not reported on
//! that newer date into a resolved one.

use crate::libs::issue::{AssignedIssue, IssueStatus};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// A contiguous run of reported days, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    /// Number of days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Merges ascending dates into contiguous intervals.
///
/// Dates exactly one day apart join the same interval and repeated dates
/// are absorbed. The input must be sorted ascending.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use sitewatch::libs::timeline::{merge_intervals, total_active_days};
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let intervals = merge_intervals(&[d(1), d(2), d(5)]);
/// assert_eq!(intervals.len(), 2);
/// assert_eq!(total_active_days(&intervals), 3);
/// ```
pub fn merge_intervals(dates: &[NaiveDate]) -> Vec<DateInterval> {
    let mut merged = vec![];
    let mut iter = dates.iter();

    if let Some(&first) = iter.next() {
        let mut current = DateInterval { start: first, end: first };
        for &next in iter {
            if next <= current.end + Duration::days(1) {
                if next > current.end {
                    current.end = next;
                }
            } else {
                merged.push(current);
                current = DateInterval { start: next, end: next };
            }
        }
        merged.push(current);
    }
    merged
}

/// Sum of inclusive interval lengths.
pub fn total_active_days(intervals: &[DateInterval]) -> i64 {
    intervals.iter().map(DateInterval::days).sum()
}

/// Whether an issue is still open as of the latest log date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimelineState {
    Ongoing,
    Resolved,
}

/// All occurrences of one issue at one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueTimeline {
    pub issue: String,
    pub project_name: String,
    pub zone: String,
    /// Assignee of the most recent row.
    pub assigned_to: String,
    pub intervals: Vec<DateInterval>,
    pub total_active_days: i64,
    pub first_reported: NaiveDate,
    pub last_reported: NaiveDate,
    pub record_count: usize,
    pub offline_records: usize,
    pub state: TimelineState,
    /// Inclusive length of the last interval, for resolved issues only.
    pub resolution_days: Option<i64>,
}

/// The most recent valid report date in the whole log.
pub fn latest_reported_date(issues: &[AssignedIssue]) -> Option<NaiveDate> {
    issues.iter().filter_map(AssignedIssue::reported_date).max()
}

/// Builds one timeline per `(issue, project)` pair.
///
/// Rows with an invalid date are skipped. Ongoing timelines come first,
/// most recently reported first, then by project and issue.
pub fn build_timelines(issues: &[AssignedIssue]) -> Vec<IssueTimeline> {
    let Some(latest) = latest_reported_date(issues) else {
        return vec![];
    };

    let mut groups: BTreeMap<(String, String), Vec<(NaiveDate, &AssignedIssue)>> = BTreeMap::new();
    for issue in issues {
        if let Some(date) = issue.reported_date() {
            groups
                .entry((issue.issue.clone(), issue.project_name.clone()))
                .or_default()
                .push((date, issue));
        }
    }

    let mut timelines: Vec<IssueTimeline> = groups
        .into_iter()
        .filter_map(|((issue, project_name), mut rows)| {
            rows.sort_by_key(|(date, _)| *date);
            let (_, newest) = *rows.last()?;

            let mut dates: Vec<NaiveDate> = rows.iter().map(|(date, _)| *date).collect();
            dates.dedup();
            let intervals = merge_intervals(&dates);
            let last = *intervals.last()?;

            let state = if last.end == latest {
                TimelineState::Ongoing
            } else {
                TimelineState::Resolved
            };

            Some(IssueTimeline {
                issue,
                project_name,
                zone: newest.zone.clone(),
                assigned_to: newest.assigned_to.clone(),
                total_active_days: total_active_days(&intervals),
                first_reported: dates[0],
                last_reported: last.end,
                record_count: rows.len(),
                offline_records: rows.iter().filter(|(_, r)| r.status == IssueStatus::Offline).count(),
                resolution_days: match state {
                    TimelineState::Resolved => Some(last.days()),
                    TimelineState::Ongoing => None,
                },
                state,
                intervals,
            })
        })
        .collect();

    timelines.sort_by(|a, b| {
        let rank = |t: &IssueTimeline| if t.state == TimelineState::Ongoing { 0 } else { 1 };
        rank(a)
            .cmp(&rank(b))
            .then(b.last_reported.cmp(&a.last_reported))
            .then_with(|| a.project_name.cmp(&b.project_name))
            .then_with(|| a.issue.cmp(&b.issue))
    });
    timelines
}
