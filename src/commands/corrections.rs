//! ERP correction analysis command.
//!
//! Without a period every request in the file is counted.

use super::options::{load_context, ExportArgs, PeriodArgs};
use crate::{
    import::corrections::import_corrections,
    libs::{erp::CorrectionReport, messages::Message},
    msg_error_anyhow, msg_info, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CorrectionsArgs {
    /// ERP correction CSV
    file: PathBuf,

    #[command(flatten)]
    period: PeriodArgs,

    #[command(flatten)]
    export: ExportArgs,
}

pub fn cmd(args: CorrectionsArgs) -> Result<()> {
    let period = args.period.selected()?;
    let (_, ctx) = load_context(None)?;

    let records =
        import_corrections(&args.file).map_err(|e| msg_error_anyhow!(Message::ImportFailed(e.to_string())))?;
    msg_info!(Message::CorrectionsLoaded(records.len(), args.file.display().to_string()));

    let report = CorrectionReport::build(&records, period, &ctx);
    if report.rows.is_empty() {
        let label = report.period.map(|p| p.label()).unwrap_or_else(|| "all dates".to_string());
        msg_warning!(Message::NoRecordsInPeriod(label));
        return Ok(());
    }

    args.export.emit(&report)
}
