//! Multi-month trend command.
//!
//! The month span is capped by `analytics.max_range_months` (6 unless
//! configured otherwise).

use super::options::{load_context, load_visits, parse_month, ExportArgs};
use crate::{
    libs::{messages::Message, period::month_range, table::Tabular, trend::TrendReport},
    msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TrendArgs {
    /// Visit log CSV
    file: PathBuf,

    /// First month (YYYY-MM)
    #[arg(long)]
    start: String,

    /// Last month (YYYY-MM or `current`)
    #[arg(long, default_value = "current")]
    end: String,

    /// Working-day table CSV (Name, Month, Working Days)
    #[arg(short, long)]
    working_days: Option<PathBuf>,

    #[command(flatten)]
    export: ExportArgs,
}

pub fn cmd(args: TrendArgs) -> Result<()> {
    let start = parse_month(&args.start)?;
    let end = parse_month(&args.end)?;
    let (config, ctx) = load_context(args.working_days.as_deref())?;
    let max_months = config.analytics.unwrap_or_default().max_range_months;
    let months = month_range(start, end, max_months)?;
    let visits = load_visits(&args.file)?;

    let report = TrendReport::build(&visits, months, &ctx);
    if report.rows.is_empty() {
        msg_warning!(Message::NoRecordsInPeriod(report.title()));
        return Ok(());
    }

    args.export.emit(&report)
}
