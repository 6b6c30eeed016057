use crate::libs::config::Config;
use crate::libs::ordering::OrgOrder;
use crate::libs::rules::{resolve_duration_with_overrides, DurationRule};
use crate::libs::working_days::WorkingDays;
use std::collections::BTreeMap;

/// Everything a report needs besides the records themselves.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsContext {
    pub working_days: WorkingDays,
    pub overrides: BTreeMap<String, String>,
    pub order: OrgOrder,
}

impl AnalyticsContext {
    pub fn new(working_days: WorkingDays) -> Self {
        Self {
            working_days,
            overrides: BTreeMap::new(),
            order: OrgOrder::default(),
        }
    }

    /// Builds the context from configuration and an optional imported
    /// working-day table. Without a table every employee gets the
    /// configured default.
    pub fn from_config(config: &Config, imported: Option<WorkingDays>) -> Self {
        let analytics = config.analytics.clone().unwrap_or_default();
        let working_days = imported.unwrap_or_else(|| WorkingDays::new(analytics.default_working_days));

        Self {
            working_days,
            overrides: analytics.duration_overrides,
            order: config.ordering.clone().unwrap_or_default(),
        }
    }

    pub fn rule_for(&self, department: &str, designation: &str) -> DurationRule {
        resolve_duration_with_overrides(department, designation, &self.overrides)
    }
}
