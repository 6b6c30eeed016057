//! Column model shared by the terminal view and the exporters.
//!
//! Every report describes itself once as a title, a header row and typed
//! cells. The console table, the CSV file and the Excel sheet all render
//! from that description, so exported files always mirror what is shown
//! on screen.

use crate::libs::formatter::{format_percent, format_seconds, format_seconds_f64, format_stability};
use std::fmt;

/// A single typed table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Count(i64),
    /// Whole seconds, shown as `HH:MM`.
    Duration(u64),
    /// Fractional seconds (averages), shown as `HH:MM`.
    AverageDuration(f64),
    Percent(f64),
    Stability(f64),
    Decimal(f64),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn count(value: usize) -> Self {
        Cell::Count(value as i64)
    }

    /// Numeric value for spreadsheet output, when the cell has one.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Cell::Count(n) => Some(*n as f64),
            Cell::Percent(v) | Cell::Decimal(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Count(n) => write!(f, "{}", n),
            Cell::Duration(s) => write!(f, "{}", format_seconds(*s)),
            Cell::AverageDuration(s) => write!(f, "{}", format_seconds_f64(*s)),
            Cell::Percent(v) => write!(f, "{}", format_percent(*v)),
            Cell::Stability(v) => write!(f, "{}", format_stability(*v)),
            Cell::Decimal(v) => write!(f, "{:.2}", v),
            Cell::Empty => write!(f, "-"),
        }
    }
}

/// A report that can be rendered as a table.
pub trait Tabular {
    fn title(&self) -> String;
    fn headers(&self) -> Vec<String>;
    fn rows(&self) -> Vec<Vec<Cell>>;
}

pub(crate) fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
