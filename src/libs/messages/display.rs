//! Text of every [`Message`].

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleAnalytics => "Analytics settings".to_string(),
            Message::ConfigModuleOverrides => "Daily target overrides per department".to_string(),
            Message::ConfigModuleOrdering => "Department and designation ordering".to_string(),
            Message::ConfigOverrideIgnored(key) => format!("Override '{}' has an invalid hour value and was ignored", key),
            Message::ConfigOrderingReset => "Ordering reset to the built-in org chart".to_string(),

            // === IMPORT MESSAGES ===
            Message::VisitsLoaded(count, path) => format!("Loaded {} visit record(s) from {}", count, path),
            Message::IssuesLoaded(count, path) => format!("Loaded {} IT issue record(s) from {}", count, path),
            Message::CorrectionsLoaded(count, path) => format!("Loaded {} correction request(s) from {}", count, path),
            Message::WorkingDaysLoaded(count, path) => format!("Loaded {} working-day entr(ies) from {}", count, path),
            Message::ImportFailed(error) => format!("Import failed: {}", error),
            Message::EmptyFile(path) => format!("No data rows found in {}", path),

            // === PERIOD MESSAGES ===
            Message::InvalidMonth(value) => format!("Invalid month '{}', expected YYYY-MM or 'current'", value),
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),
            Message::IncompleteRange => "Both --from and --to are required for a custom range".to_string(),
            Message::IncompleteComparison => "Both --compare-from and --compare-to are required".to_string(),

            // === REPORT MESSAGES ===
            Message::NoRecordsInPeriod(period) => format!("No records found for {}", period),
            Message::NoRecordsForDepartment(department) => format!("No visits logged by {}", department),
            Message::NoIssues => "No IT issues to analyse".to_string(),
            Message::DutyDaysHeader(officer) => format!("Duty days of {}", officer),
            Message::ReportGenerated(rows) => format!("Report generated with {} row(s)", rows),

            // === EXPORT MESSAGES ===
            Message::DataExported(path) => format!("Data exported successfully to: {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptDefaultWorkingDays => "Default working days per month".to_string(),
            Message::PromptMaxRangeMonths => "Maximum months in a trend range".to_string(),
            Message::PromptOverrideKey => "Department".to_string(),
            Message::PromptOverrideHours => "Daily target in hours (e.g. 4.5 or 4:30, 0 to disable)".to_string(),
            Message::PromptAddOverride => "Add another override?".to_string(),
            Message::PromptKeepOrdering => "Keep the current ordering?".to_string(),
        };
        write!(f, "{}", text)
    }
}
