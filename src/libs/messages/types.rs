/// Every user-facing message of the application.
///
/// The text of each variant lives in [`display`](super::display).
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleAnalytics,
    ConfigModuleOverrides,
    ConfigModuleOrdering,
    ConfigOverrideIgnored(String), // key
    ConfigOrderingReset,

    // === IMPORT MESSAGES ===
    VisitsLoaded(usize, String), // count, path
    IssuesLoaded(usize, String),
    CorrectionsLoaded(usize, String),
    WorkingDaysLoaded(usize, String),
    ImportFailed(String), // error
    EmptyFile(String),    // path

    // === PERIOD MESSAGES ===
    InvalidMonth(String),
    InvalidDate(String),
    IncompleteRange,
    IncompleteComparison,

    // === REPORT MESSAGES ===
    NoRecordsInPeriod(String), // period label
    NoRecordsForDepartment(String),
    NoIssues,
    DutyDaysHeader(String), // officer
    ReportGenerated(usize), // rows

    // === EXPORT MESSAGES ===
    DataExported(String), // path
    ExportFailed(String),

    // === PROMPTS ===
    PromptSelectModules,
    PromptDefaultWorkingDays,
    PromptMaxRangeMonths,
    PromptOverrideKey,
    PromptOverrideHours,
    PromptAddOverride,
    PromptKeepOrdering,
}
