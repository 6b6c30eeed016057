//! Department-level roll-up of the employee summary.
//!
//! Each department row sums its employees' logged time and targets, so
//! the department's achieved percentage is weighted by working days
//! rather than being a mean of employee percentages. The average logged
//! time per active employee is compared with [`average_stability`], which
//! reports growth from an idle previous period as `+100%`.

use crate::libs::aggregate::BucketCounts;
use crate::libs::context::AnalyticsContext;
use crate::libs::ordering::{sort_rows, OrgRanked};
use crate::libs::period::Period;
use crate::libs::stability::{average, average_stability, percent_of, stability};
use crate::libs::summary::{build_employee_summary, EmployeeSummary};
use crate::libs::table::{headers, Cell, Tabular};
use crate::libs::visit::VisitRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DepartmentPeriod {
    pub active_employees: usize,
    pub target_seconds: u64,
    pub actual_seconds: u64,
    pub achieved_percent: f64,
    /// Logged seconds per active employee.
    pub average_seconds: f64,
    pub visits: usize,
    pub buckets: BucketCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSummary {
    pub department: String,
    pub employees: usize,
    pub current: DepartmentPeriod,
    pub previous: DepartmentPeriod,
    pub stability: f64,
    pub average_stability: f64,
}

impl OrgRanked for DepartmentSummary {
    fn department(&self) -> &str {
        &self.department
    }
    fn name(&self) -> &str {
        &self.department
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentReport {
    pub current: Period,
    pub comparison: Period,
    pub rows: Vec<DepartmentSummary>,
}

#[derive(Default)]
struct Totals {
    active: usize,
    target: u64,
    actual: u64,
    visits: usize,
    buckets: BucketCounts,
}

impl Totals {
    fn finish(self) -> DepartmentPeriod {
        DepartmentPeriod {
            active_employees: self.active,
            target_seconds: self.target,
            actual_seconds: self.actual,
            achieved_percent: percent_of(self.actual, self.target),
            average_seconds: average(self.actual, self.active),
            visits: self.visits,
            buckets: self.buckets,
        }
    }
}

/// Rolls employee rows up by department.
///
/// An employee counts as active in a period when they logged at least one
/// visit in it. Targets include every employee, active or not.
pub fn roll_up(employees: &[EmployeeSummary], ctx: &AnalyticsContext) -> Vec<DepartmentSummary> {
    let mut groups: BTreeMap<&str, (usize, Totals, Totals)> = BTreeMap::new();

    for employee in employees {
        let (count, current, previous) = groups.entry(employee.department.as_str()).or_default();
        *count += 1;

        current.target = current.target.saturating_add(employee.current.supposed_seconds);
        current.actual = current.actual.saturating_add(employee.current.actual_seconds);
        current.visits += employee.current.visits;
        current.buckets.merge(&employee.current.buckets);
        if employee.current.visits > 0 {
            current.active += 1;
        }

        previous.target = previous.target.saturating_add(employee.previous.supposed_seconds);
        previous.actual = previous.actual.saturating_add(employee.previous.actual_seconds);
        previous.visits += employee.previous.visits;
        previous.buckets.merge(&employee.previous.buckets);
        if employee.previous.visits > 0 {
            previous.active += 1;
        }
    }

    let rows = groups
        .into_iter()
        .map(|(department, (employees, current, previous))| {
            let current = current.finish();
            let previous = previous.finish();
            DepartmentSummary {
                department: department.to_string(),
                employees,
                stability: stability(current.achieved_percent, previous.achieved_percent),
                average_stability: average_stability(current.average_seconds, previous.average_seconds),
                current,
                previous,
            }
        })
        .collect();

    sort_rows(rows, &ctx.order)
}

/// Builds the department summary straight from visit records.
pub fn build_department_summary(
    records: &[VisitRecord],
    current: &Period,
    comparison: &Period,
    ctx: &AnalyticsContext,
) -> Vec<DepartmentSummary> {
    let employees = build_employee_summary(records, current, comparison, ctx);
    roll_up(&employees, ctx)
}

impl DepartmentReport {
    pub fn build(records: &[VisitRecord], current: Period, comparison: Period, ctx: &AnalyticsContext) -> Self {
        DepartmentReport {
            rows: build_department_summary(records, &current, &comparison, ctx),
            current,
            comparison,
        }
    }
}

impl Tabular for DepartmentReport {
    fn title(&self) -> String {
        format!("Department summary: {} vs {}", self.current, self.comparison)
    }

    fn headers(&self) -> Vec<String> {
        headers(&[
            "Department",
            "Employees",
            "Target",
            "Previous",
            "Previous %",
            "Current",
            "Current %",
            "Stability",
            "Avg Previous",
            "Avg Current",
            "Avg Stability",
            "Visits",
        ])
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        self.rows
            .iter()
            .map(|row| {
                vec![
                    Cell::text(&row.department),
                    Cell::count(row.employees),
                    Cell::Duration(row.current.target_seconds),
                    Cell::Duration(row.previous.actual_seconds),
                    Cell::Percent(row.previous.achieved_percent),
                    Cell::Duration(row.current.actual_seconds),
                    Cell::Percent(row.current.achieved_percent),
                    Cell::Stability(row.stability),
                    Cell::AverageDuration(row.previous.average_seconds),
                    Cell::AverageDuration(row.current.average_seconds),
                    Cell::Stability(row.average_stability),
                    Cell::count(row.current.visits),
                ]
            })
            .collect()
    }
}
