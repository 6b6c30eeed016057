use super::duty::DutySummary;
use super::formatter::format_seconds;
use super::table::Tabular;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Cell as TableCell, Row, Table};

pub struct View {}

impl View {
    /// Prints any report as a titled console table.
    pub fn render<T: Tabular>(report: &T) -> Result<()> {
        msg_print!(report.title(), true);
        Self::table(report).printstd();
        Ok(())
    }

    pub fn table<T: Tabular>(report: &T) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::new(report.headers().iter().map(|h| TableCell::new(h)).collect()));
        for cells in report.rows() {
            table.add_row(Row::new(cells.iter().map(|c| TableCell::new(&c.to_string())).collect()));
        }
        table
    }

    /// Per-day breakdown of one officer's duty summary.
    pub fn duty_days(summary: &DutySummary) -> Result<()> {
        msg_print!(Message::DutyDaysHeader(summary.officer.clone()), true);

        let mut table = Table::new();
        table.add_row(row!["DATE", "VISITS", "PROJECTS", "DURATION", "ON TARGET"]);
        for day in &summary.days {
            table.add_row(row![
                day.date,
                day.visits,
                day.projects,
                format_seconds(day.duration_seconds),
                if day.met_target { "yes" } else { "no" }
            ]);
        }
        table.printstd();

        Ok(())
    }
}
