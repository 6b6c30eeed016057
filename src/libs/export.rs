//! Report export to CSV, JSON and Excel.
//!
//! Every report is exported from its [`Tabular`] description, so the CSV
//! and Excel files carry the same columns and formatting as the console
//! table. JSON exports serialize the report structure itself, keeping raw
//! seconds and percentages for downstream tools.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sitewatch::libs::export::{ExportFormat, Exporter};
//! use sitewatch::libs::it_analysis::IssueReport;
//!
//! let report = IssueReport::build(&[]);
//! Exporter::new(ExportFormat::Csv, None).export(&report)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::libs::table::{Cell, Tabular};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Output formats for `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    /// Pretty-printed report structure with raw values.
    Json,
    /// `.xlsx` workbook with a bold, frozen header row and an autofilter.
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter. Without a path the file is named
    /// `sitewatch_export_YYYYMMDD_HHMMSS.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "sitewatch_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export<T: Tabular + Serialize>(&self, report: &T) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(report)?,
            ExportFormat::Json => self.export_json(report)?,
            ExportFormat::Excel => self.export_excel(report)?,
        }

        tracing::debug!(path = %self.output_path.display(), format = ?self.format, "report exported");
        msg_success!(Message::DataExported(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv<T: Tabular>(&self, report: &T) -> Result<()> {
        let headers = report.headers();
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        let mut title = vec![String::new(); headers.len()];
        if let Some(first) = title.first_mut() {
            *first = report.title();
        }
        wtr.write_record(&title)?;
        wtr.write_record(&headers)?;
        for row in report.rows() {
            wtr.write_record(row.iter().map(|cell| cell.to_string()))?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json<T: Serialize>(&self, report: &T) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(file, report)?;
        Ok(())
    }

    fn export_excel<T: Tabular>(&self, report: &T) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Report")?;

        let title_format = Format::new().set_bold().set_font_size(13);
        let header_format = Format::new()
            .set_bold()
            .set_background_color(Color::RGB(0x4472C4))
            .set_font_color(Color::White)
            .set_border(FormatBorder::Thin);
        let count_format = Format::new().set_num_format("0");
        let decimal_format = Format::new().set_num_format("0.00");
        let percent_format = Format::new().set_num_format("0.00\"%\"");

        worksheet.write_string_with_format(0, 0, report.title(), &title_format)?;

        let headers = report.headers();
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(1, col as u16, header, &header_format)?;
            worksheet.set_column_width(col as u16, (header.chars().count() + 4).max(12) as f64)?;
        }

        let rows = report.rows();
        for (idx, cells) in rows.iter().enumerate() {
            let row = (idx + 2) as u32;
            for (col, cell) in cells.iter().enumerate() {
                let col = col as u16;
                match (cell, cell.numeric()) {
                    (Cell::Count(_), Some(value)) => worksheet.write_number_with_format(row, col, value, &count_format)?,
                    (Cell::Percent(_), Some(value)) => {
                        worksheet.write_number_with_format(row, col, value, &percent_format)?
                    }
                    (_, Some(value)) => worksheet.write_number_with_format(row, col, value, &decimal_format)?,
                    (_, None) => worksheet.write_string(row, col, cell.to_string())?,
                };
            }
        }

        if !rows.is_empty() && !headers.is_empty() {
            worksheet.autofilter(1, 0, (rows.len() + 1) as u32, (headers.len() - 1) as u16)?;
        }
        worksheet.set_freeze_panes(2, 0)?;

        workbook.save(&self.output_path)?;
        Ok(())
    }
}
