//! Month-over-month trend of achieved percentages per employee.

use crate::libs::aggregate::aggregate;
use crate::libs::context::AnalyticsContext;
use crate::libs::ordering::{sort_rows, OrgRanked};
use crate::libs::period::{filter_by_month, YearMonth};
use crate::libs::stability::{achieved_percent, stability};
use crate::libs::summary::identities;
use crate::libs::table::{headers, Cell, Tabular};
use crate::libs::visit::VisitRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: YearMonth,
    pub seconds: u64,
    pub working_days: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub name: String,
    pub department: String,
    pub designation: String,
    pub points: Vec<TrendPoint>,
    /// Achieved percentage of the last month minus the first.
    pub change: f64,
}

impl OrgRanked for TrendRow {
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

/// Builds one row per employee active in any of `months`.
pub fn build_trend(records: &[VisitRecord], months: &[YearMonth], ctx: &AnalyticsContext) -> Vec<TrendRow> {
    let monthly: Vec<(YearMonth, Vec<&VisitRecord>)> =
        months.iter().map(|&m| (m, filter_by_month(records, m))).collect();

    let all: Vec<&VisitRecord> = monthly.iter().flat_map(|(_, r)| r.iter().copied()).collect();
    let people = identities(&all, &[]);

    let totals: Vec<BTreeMap<String, u64>> = monthly
        .iter()
        .map(|(_, recs)| {
            aggregate(recs.iter().copied(), |r| r.visitor_name.clone())
                .into_iter()
                .map(|(name, agg)| (name, agg.total_duration_seconds))
                .collect()
        })
        .collect();

    let rows = people
        .into_iter()
        .map(|(name, (department, designation))| {
            let rule = ctx.rule_for(department, designation);
            let points: Vec<TrendPoint> = monthly
                .iter()
                .zip(&totals)
                .map(|((month, _), totals)| {
                    let seconds = totals.get(name).copied().unwrap_or(0);
                    let working_days = ctx.working_days.for_month(name, *month);
                    TrendPoint {
                        month: *month,
                        seconds,
                        working_days,
                        percent: achieved_percent(seconds, working_days, rule.calc_seconds),
                    }
                })
                .collect();

            let change = match (points.first(), points.last()) {
                (Some(first), Some(last)) => stability(last.percent, first.percent),
                _ => 0.0,
            };

            TrendRow {
                name: name.to_string(),
                department: department.to_string(),
                designation: designation.to_string(),
                points,
                change,
            }
        })
        .collect();

    sort_rows(rows, &ctx.order)
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub months: Vec<YearMonth>,
    pub rows: Vec<TrendRow>,
}

impl TrendReport {
    pub fn build(records: &[VisitRecord], months: Vec<YearMonth>, ctx: &AnalyticsContext) -> Self {
        TrendReport {
            rows: build_trend(records, &months, ctx),
            months,
        }
    }
}

impl Tabular for TrendReport {
    fn title(&self) -> String {
        match (self.months.first(), self.months.last()) {
            (Some(first), Some(last)) if first != last => format!("Trend: {} to {}", first.label(), last.label()),
            (Some(only), _) => format!("Trend: {}", only.label()),
            _ => "Trend".to_string(),
        }
    }

    fn headers(&self) -> Vec<String> {
        let mut names = headers(&["Name", "Department", "Designation"]);
        names.extend(self.months.iter().map(|m| m.prefix()));
        names.push("Change".to_string());
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
                ];
                cells.extend(row.points.iter().map(|p| Cell::Percent(p.percent)));
                cells.push(Cell::Stability(row.change));
                cells
            })
            .collect()
    }
}
