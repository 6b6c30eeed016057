//! Per-employee performance summary.
//!
//! For every employee seen in either the current or the comparison period
//! the summary reports the daily target, the logged visit time, the
//! achieved percentage of each period and the stability between them.
//!
//! ```text
//! supposed_daily   = display target per day
//! supposed_period  = calc target per day * working days
//! achieved         = actual / supposed_period * 100
//! stability        = achieved(current) - achieved(previous)
//! ```

use crate::libs::aggregate::{aggregate, Aggregate, BucketCounts, DurationBucket};
use crate::libs::context::AnalyticsContext;
use crate::libs::ordering::{sort_rows, OrgRanked};
use crate::libs::period::{filter_by_period, Period};
use crate::libs::rules::DurationRule;
use crate::libs::stability::{achieved_percent, stability};
use crate::libs::table::{headers, Cell, Tabular};
use crate::libs::visit::VisitRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Visit statistics of one employee in one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodStats {
    pub working_days: u32,
    pub supposed_seconds: u64,
    pub actual_seconds: u64,
    pub achieved_percent: f64,
    pub visits: usize,
    pub projects: usize,
    pub days_visited: usize,
    pub buckets: BucketCounts,
}

impl PeriodStats {
    fn new(aggregate: Option<&Aggregate>, rule: DurationRule, working_days: u32) -> Self {
        let aggregate = aggregate.cloned().unwrap_or_default();
        let supposed_seconds = rule.calc_seconds.saturating_mul(u64::from(working_days));
        PeriodStats {
            working_days,
            supposed_seconds,
            actual_seconds: aggregate.total_duration_seconds,
            achieved_percent: achieved_percent(aggregate.total_duration_seconds, working_days, rule.calc_seconds),
            visits: aggregate.visit_count,
            projects: aggregate.distinct_project_count,
            days_visited: aggregate.distinct_day_count,
            buckets: aggregate.bucket_counts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    pub name: String,
    pub department: String,
    pub designation: String,
    pub rule: DurationRule,
    /// Daily target shown in the report.
    pub supposed_daily_seconds: u64,
    pub current: PeriodStats,
    pub previous: PeriodStats,
    pub stability: f64,
}

impl OrgRanked for EmployeeSummary {
    fn department(&self) -> &str {
        &self.department
    }
    fn designation(&self) -> &str {
        &self.designation
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// The employee summary together with the periods it compares.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeReport {
    pub current: Period,
    pub comparison: Period,
    pub rows: Vec<EmployeeSummary>,
}

/// Department and designation of each employee, preferring the first
/// record of the current period.
pub(crate) fn identities<'a>(
    current: &[&'a VisitRecord],
    previous: &[&'a VisitRecord],
) -> BTreeMap<&'a str, (&'a str, &'a str)> {
    let mut identities = BTreeMap::new();
    for record in current.iter().chain(previous.iter()) {
        identities
            .entry(record.visitor_name.as_str())
            .or_insert((record.department.as_str(), record.designation.as_str()));
    }
    identities
}

/// Builds the per-employee summary for `current` against `comparison`.
///
/// Employees missing from one of the periods get zero activity for it.
/// Rows are in org-chart order.
pub fn build_employee_summary(
    records: &[VisitRecord],
    current: &Period,
    comparison: &Period,
    ctx: &AnalyticsContext,
) -> Vec<EmployeeSummary> {
    let current_records = filter_by_period(records, current);
    let previous_records = filter_by_period(records, comparison);

    let by_name = |r: &VisitRecord| r.visitor_name.clone();
    let current_groups = aggregate(current_records.iter().copied(), by_name);
    let previous_groups = aggregate(previous_records.iter().copied(), by_name);

    let rows = identities(&current_records, &previous_records)
        .into_iter()
        .map(|(name, (department, designation))| {
            let rule = ctx.rule_for(department, designation);
            let current_stats = PeriodStats::new(
                current_groups.get(name),
                rule,
                ctx.working_days.for_period(name, current),
            );
            let previous_stats = PeriodStats::new(
                previous_groups.get(name),
                rule,
                ctx.working_days.for_period(name, comparison),
            );

            EmployeeSummary {
                name: name.to_string(),
                department: department.to_string(),
                designation: designation.to_string(),
                rule,
                supposed_daily_seconds: rule.display_seconds,
                stability: stability(current_stats.achieved_percent, previous_stats.achieved_percent),
                current: current_stats,
                previous: previous_stats,
            }
        })
        .collect();

    sort_rows(rows, &ctx.order)
}

impl EmployeeReport {
    pub fn build(records: &[VisitRecord], current: Period, comparison: Period, ctx: &AnalyticsContext) -> Self {
        EmployeeReport {
            rows: build_employee_summary(records, &current, &comparison, ctx),
            current,
            comparison,
        }
    }
}

impl Tabular for EmployeeReport {
    fn title(&self) -> String {
        format!("Employee performance: {} vs {}", self.current, self.comparison)
    }

    fn headers(&self) -> Vec<String> {
        let mut names = headers(&[
            "Name",
            "Department",
            "Designation",
            "Target/Day",
            "WD",
            "Target",
            "Previous",
            "Previous %",
            "Current",
            "Current %",
            "Stability",
            "Visits",
            "Projects",
            "Days",
        ]);
        names.extend(DurationBucket::ALL.iter().map(|b| b.label().to_string()));
        names
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        self.rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    Cell::text(&row.name),
                    Cell::text(&row.department),
                    Cell::text(&row.designation),
                    Cell::Duration(row.supposed_daily_seconds),
                    Cell::Count(i64::from(row.current.working_days)),
                    Cell::Duration(row.current.supposed_seconds),
                    Cell::Duration(row.previous.actual_seconds),
                    Cell::Percent(row.previous.achieved_percent),
                    Cell::Duration(row.current.actual_seconds),
                    Cell::Percent(row.current.achieved_percent),
                    Cell::Stability(row.stability),
                    Cell::count(row.current.visits),
                    Cell::count(row.current.projects),
                    Cell::count(row.current.days_visited),
                ];
                cells.extend(DurationBucket::ALL.iter().map(|b| Cell::count(row.current.buckets.get(*b))));
                cells
            })
            .collect()
    }
}
