//! Arguments and helpers shared by the report commands.

use crate::import::visits::import_visits;
use crate::import::workdays::import_working_days;
use crate::libs::config::Config;
use crate::libs::context::AnalyticsContext;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::period::{parse_iso_date, Period, YearMonth};
use crate::libs::table::Tabular;
use crate::libs::view::View;
use crate::libs::visit::VisitRecord;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_info, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The period a report covers.
///
/// A `--from`/`--to` range takes precedence over `--month`.
#[derive(Debug, Args)]
pub struct PeriodArgs {
    /// Month to report on: `YYYY-MM` or `current`
    #[arg(short, long)]
    pub month: Option<String>,

    /// First day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl PeriodArgs {
    /// The selected period, or `None` when no option was given.
    pub fn selected(&self) -> Result<Option<Period>> {
        if let Some(range) = parse_range(self.from.as_deref(), self.to.as_deref(), Message::IncompleteRange)? {
            return Ok(Some(range));
        }
        self.month
            .as_deref()
            .map(|month| parse_month(month).map(Period::Month))
            .transpose()
    }

    /// The selected period, defaulting to the current month.
    pub fn resolve(&self) -> Result<Period> {
        match self.selected()? {
            Some(period) => Ok(period),
            None => Ok(Period::Month(YearMonth::from_date(Local::now().date_naive()))),
        }
    }
}

/// The period the current one is compared against.
#[derive(Debug, Args)]
pub struct ComparisonArgs {
    /// First day of the comparison range (YYYY-MM-DD)
    #[arg(long)]
    pub compare_from: Option<String>,

    /// Last day of the comparison range (YYYY-MM-DD)
    #[arg(long)]
    pub compare_to: Option<String>,
}

impl ComparisonArgs {
    /// The explicit comparison range, or the period just before `current`.
    pub fn resolve(&self, current: &Period) -> Result<Period> {
        let explicit = parse_range(
            self.compare_from.as_deref(),
            self.compare_to.as_deref(),
            Message::IncompleteComparison,
        )?;
        Ok(explicit.unwrap_or_else(|| current.previous()))
    }
}

/// Optional file export of the displayed report.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Also write the report to a file in this format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file; defaults to a timestamped name
    #[arg(short, long, requires = "format")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Prints the report and exports it when a format was requested.
    pub fn emit<T: Tabular + Serialize>(&self, report: &T) -> Result<()> {
        View::render(report)?;
        if let Some(format) = self.format {
            Exporter::new(format, self.output.clone())
                .export(report)
                .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;
        }
        Ok(())
    }
}

/// Parses `YYYY-MM`, or `current` for the running month.
pub fn parse_month(value: &str) -> Result<YearMonth> {
    if value.eq_ignore_ascii_case("current") {
        return Ok(YearMonth::from_date(Local::now().date_naive()));
    }
    YearMonth::parse(value).map_err(|_| msg_error_anyhow!(Message::InvalidMonth(value.to_string())))
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    parse_iso_date(value).ok_or_else(|| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

fn parse_range(from: Option<&str>, to: Option<&str>, incomplete: Message) -> Result<Option<Period>> {
    match (from, to) {
        (Some(from), Some(to)) => Ok(Some(Period::range(parse_date(from)?, parse_date(to)?)?)),
        (None, None) => Ok(None),
        _ => msg_bail_anyhow!(incomplete),
    }
}

/// Reads the configuration and an optional working-day table into a
/// report context.
pub fn load_context(working_days: Option<&Path>) -> Result<(Config, AnalyticsContext)> {
    let config = Config::read()?;
    for key in config.invalid_overrides() {
        msg_warning!(Message::ConfigOverrideIgnored(key));
    }

    let imported = match working_days {
        Some(path) => {
            let default_days = config.analytics.clone().unwrap_or_default().default_working_days;
            let table = import_working_days(path, default_days)
                .map_err(|e| msg_error_anyhow!(Message::ImportFailed(e.to_string())))?;
            msg_info!(Message::WorkingDaysLoaded(table.len(), path.display().to_string()));
            Some(table)
        }
        None => None,
    };

    let ctx = AnalyticsContext::from_config(&config, imported);
    Ok((config, ctx))
}

pub fn load_visits(path: &Path) -> Result<Vec<VisitRecord>> {
    let visits = import_visits(path).map_err(|e| msg_error_anyhow!(Message::ImportFailed(e.to_string())))?;
    if visits.is_empty() {
        msg_warning!(Message::EmptyFile(path.display().to_string()));
    } else {
        msg_info!(Message::VisitsLoaded(visits.len(), path.display().to_string()));
    }
    Ok(visits)
}
