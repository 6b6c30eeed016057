//! Duty analysis for security supervisors.
//!
//! Security supervisors log patrol visits to project sites. Their report
//! looks at each duty day separately: how many sites were covered, how
//! long was spent on site, and whether the day reached the daily target.

use crate::libs::aggregate::{aggregate, summarize};
use crate::libs::context::AnalyticsContext;
use crate::libs::ordering::{sort_rows, OrgRanked};
use crate::libs::period::{filter_by_period, Period};
use crate::libs::rules::SECURITY_DEPARTMENT;
use crate::libs::stability::{achieved_percent, average};
use crate::libs::table::{headers, Cell, Tabular};
use crate::libs::visit::VisitRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyDay {
    pub date: String,
    pub visits: usize,
    pub projects: usize,
    pub duration_seconds: u64,
    pub met_target: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutySummary {
    pub officer: String,
    pub department: String,
    pub designation: String,
    pub target_daily_seconds: u64,
    pub working_days: u32,
    pub duty_days: usize,
    pub visits: usize,
    pub projects: usize,
    pub total_seconds: u64,
    pub average_daily_seconds: f64,
    pub days_meeting_target: usize,
    pub achieved_percent: f64,
    pub days: Vec<DutyDay>,
}

impl OrgRanked for DutySummary {
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
pub struct DutyReport {
    pub department: String,
    pub period: Period,
    pub rows: Vec<DutySummary>,
}

/// Builds the duty analysis of one department for a period.
///
/// A day meets the target when its logged time reaches the calculation
/// target of the officer's rule.
pub fn build_duty_summary(
    records: &[VisitRecord],
    period: &Period,
    department: &str,
    ctx: &AnalyticsContext,
) -> Vec<DutySummary> {
    let mut by_officer: BTreeMap<&str, Vec<&VisitRecord>> = BTreeMap::new();
    for record in filter_by_period(records, period) {
        if record.department == department {
            by_officer.entry(record.visitor_name.as_str()).or_default().push(record);
        }
    }

    let rows = by_officer
        .into_iter()
        .map(|(officer, visits)| {
            let designation = visits[0].designation.as_str();
            let rule = ctx.rule_for(department, designation);
            let working_days = ctx.working_days.for_period(officer, period);
            let overall = summarize(visits.iter().copied());

            let days: Vec<DutyDay> = aggregate(visits.iter().copied(), |r| r.date.clone())
                .into_iter()
                .map(|(date, day)| DutyDay {
                    date,
                    visits: day.visit_count,
                    projects: day.distinct_project_count,
                    duration_seconds: day.total_duration_seconds,
                    met_target: day.total_duration_seconds >= rule.calc_seconds,
                })
                .collect();

            DutySummary {
                officer: officer.to_string(),
                department: department.to_string(),
                designation: designation.to_string(),
                target_daily_seconds: rule.display_seconds,
                working_days,
                duty_days: days.len(),
                visits: overall.visit_count,
                projects: overall.distinct_project_count,
                total_seconds: overall.total_duration_seconds,
                average_daily_seconds: average(overall.total_duration_seconds, days.len()),
                days_meeting_target: days.iter().filter(|d| d.met_target).count(),
                achieved_percent: achieved_percent(overall.total_duration_seconds, working_days, rule.calc_seconds),
                days,
            }
        })
        .collect();

    sort_rows(rows, &ctx.order)
}

impl DutyReport {
    pub fn build(records: &[VisitRecord], period: Period, department: Option<&str>, ctx: &AnalyticsContext) -> Self {
        let department = department.unwrap_or(SECURITY_DEPARTMENT).to_string();
        DutyReport {
            rows: build_duty_summary(records, &period, &department, ctx),
            department,
            period,
        }
    }
}

impl Tabular for DutyReport {
    fn title(&self) -> String {
        format!("Duty analysis: {}, {}", self.department, self.period)
    }

    fn headers(&self) -> Vec<String> {
        headers(&[
            "Officer",
            "Designation",
            "Target/Day",
            "WD",
            "Duty Days",
            "Days On Target",
            "Visits",
            "Projects",
            "Total",
            "Avg/Day",
            "Achieved %",
        ])
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        self.rows
            .iter()
            .map(|row| {
                vec![
                    Cell::text(&row.officer),
                    Cell::text(&row.designation),
                    Cell::Duration(row.target_daily_seconds),
                    Cell::Count(i64::from(row.working_days)),
                    Cell::count(row.duty_days),
                    Cell::count(row.days_meeting_target),
                    Cell::count(row.visits),
                    Cell::count(row.projects),
                    Cell::Duration(row.total_seconds),
                    Cell::AverageDuration(row.average_daily_seconds),
                    Cell::Percent(row.achieved_percent),
                ]
            })
            .collect()
    }
}
