//! IT issue timeline command.
//!
//! Collapses the daily IT log into issue occurrences per project and
//! prints them together with a summary per assignee.

use super::options::ExportArgs;
use crate::{
    import::issues::import_issues,
    libs::{it_analysis::IssueReport, messages::Message, view::View},
    msg_error_anyhow, msg_info, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct IssuesArgs {
    /// IT issue CSV
    file: PathBuf,

    /// Skip the per-assignee summary
    #[arg(long)]
    no_assignees: bool,

    #[command(flatten)]
    export: ExportArgs,
}

pub fn cmd(args: IssuesArgs) -> Result<()> {
    let issues = import_issues(&args.file).map_err(|e| msg_error_anyhow!(Message::ImportFailed(e.to_string())))?;
    msg_info!(Message::IssuesLoaded(issues.len(), args.file.display().to_string()));

    let report = IssueReport::build(&issues);
    if report.timelines.is_empty() {
        msg_warning!(Message::NoIssues);
        return Ok(());
    }

    args.export.emit(&report)?;
    if !args.no_assignees {
        View::render(&report.assignee_table())?;
    }
    Ok(())
}
