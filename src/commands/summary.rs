//! Employee performance summary command.
//!
//! Imports a visit log and prints, per employee, the daily target, the
//! logged time and achieved percentage for the selected and comparison
//! periods, the stability between them and the visit-length buckets.
//!
//! ```text
//! sitewatch summary visits.csv --month 2024-09 --working-days wd.csv
//! sitewatch summary visits.csv --from 2024-09-01 --to 2024-09-15 -f excel
//! ```

use super::options::{load_context, load_visits, ComparisonArgs, ExportArgs, PeriodArgs};
use crate::{
    libs::{messages::Message, summary::EmployeeReport},
    msg_debug, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Visit log CSV
    file: PathBuf,

    /// Working-day table CSV (Name, Month, Working Days)
    #[arg(short, long)]
    working_days: Option<PathBuf>,

    #[command(flatten)]
    period: PeriodArgs,

    #[command(flatten)]
    comparison: ComparisonArgs,

    #[command(flatten)]
    export: ExportArgs,
}

pub fn cmd(args: SummaryArgs) -> Result<()> {
    let current = args.period.resolve()?;
    let comparison = args.comparison.resolve(&current)?;
    let (_, ctx) = load_context(args.working_days.as_deref())?;
    let visits = load_visits(&args.file)?;

    let report = EmployeeReport::build(&visits, current, comparison, &ctx);
    msg_debug!(Message::ReportGenerated(report.rows.len()));
    if report.rows.is_empty() {
        msg_warning!(Message::NoRecordsInPeriod(report.current.label()));
        return Ok(());
    }

    args.export.emit(&report)
}
