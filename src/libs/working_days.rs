use crate::libs::period::{Period, YearMonth};
use std::collections::HashMap;

/// Working-day counts per employee and month.
///
/// Working days are configured or imported, never derived from a
/// calendar. Lookups that have no entry fall back to `default_days`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingDays {
    entries: HashMap<(String, YearMonth), u32>,
    default_days: u32,
}

impl WorkingDays {
    pub fn new(default_days: u32) -> Self {
        Self {
            entries: HashMap::new(),
            default_days,
        }
    }

    pub fn insert(&mut self, name: &str, month: YearMonth, days: u32) {
        self.entries.insert((name.to_string(), month), days);
    }

    pub fn default_days(&self) -> u32 {
        self.default_days
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Working days of `name` in `month`, or the default.
    pub fn for_month(&self, name: &str, month: YearMonth) -> u32 {
        self.entries
            .get(&(name.to_string(), month))
            .copied()
            .unwrap_or(self.default_days)
    }

    /// Working days of `name` in a period. Custom ranges use the default.
    pub fn for_period(&self, name: &str, period: &Period) -> u32 {
        match period.month() {
            Some(month) => self.for_month(name, month),
            None => self.default_days,
        }
    }
}
