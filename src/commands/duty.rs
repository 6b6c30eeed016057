//! Security duty analysis command.
//!
//! Defaults to the `HR & Admin (Security)` department; `--department`
//! runs the same analysis for any other department. `--days` adds a
//! per-day table for every officer.

use super::options::{load_context, load_visits, ExportArgs, PeriodArgs};
use crate::{
    libs::{duty::DutyReport, messages::Message, view::View},
    msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DutyArgs {
    /// Visit log CSV
    file: PathBuf,

    /// Department to analyse
    #[arg(short, long)]
    department: Option<String>,

    /// Working-day table CSV (Name, Month, Working Days)
    #[arg(short, long)]
    working_days: Option<PathBuf>,

    /// Show the day-by-day breakdown of each officer
    #[arg(long)]
    days: bool,

    #[command(flatten)]
    period: PeriodArgs,

    #[command(flatten)]
    export: ExportArgs,
}

pub fn cmd(args: DutyArgs) -> Result<()> {
    let period = args.period.resolve()?;
    let (_, ctx) = load_context(args.working_days.as_deref())?;
    let visits = load_visits(&args.file)?;

    let report = DutyReport::build(&visits, period, args.department.as_deref(), &ctx);
    if report.rows.is_empty() {
        msg_warning!(Message::NoRecordsForDepartment(report.department.clone()));
        return Ok(());
    }

    args.export.emit(&report)?;
    if args.days {
        for summary in &report.rows {
            View::duty_days(summary)?;
        }
    }
    Ok(())
}
