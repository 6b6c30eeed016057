//! Department summary command.

use super::options::{load_context, load_visits, ComparisonArgs, ExportArgs, PeriodArgs};
use crate::{
    libs::{departments::DepartmentReport, messages::Message},
    msg_debug, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DepartmentsArgs {
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

pub fn cmd(args: DepartmentsArgs) -> Result<()> {
    let current = args.period.resolve()?;
    let comparison = args.comparison.resolve(&current)?;
    let (_, ctx) = load_context(args.working_days.as_deref())?;
    let visits = load_visits(&args.file)?;

    let report = DepartmentReport::build(&visits, current, comparison, &ctx);
    msg_debug!(Message::ReportGenerated(report.rows.len()));
    if report.rows.is_empty() {
        msg_warning!(Message::NoRecordsInPeriod(report.current.label()));
        return Ok(());
    }

    args.export.emit(&report)
}
