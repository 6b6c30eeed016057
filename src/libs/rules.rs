//! Visit duration targets per department and designation.
//!
//! Every employee is scored against a daily visit-duration target. The
//! target comes as a pair: the value shown in reports (`display_seconds`)
//! and the value used in percentage math (`calc_seconds`). They differ only
//! for exempt departments, which show no target but are still measured
//! against the four hour baseline so that stability stays meaningful.
//!
//! ## Precedence
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. Exempt department: shown `00:00`, calculated at 4h
//! 2. `Inventory Mgt.` project-side accountants: 4h
//! 3. `Inventory Mgt. (Project Side)` project-side accountants: 6h
//! 4. `HR & Admin (Security)`: 7h
//! 5. Everyone else: 4h
//!
//! A per-department override from the configuration replaces the
//! resolved pair; an override of zero hides the target but keeps the
//! calculation baseline at 4h.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Four hours, the baseline target in seconds.
pub const BASELINE_SECONDS: u64 = 4 * 3600;

/// Departments without an enforced daily target.
pub const EXEMPT_DEPARTMENTS: [&str; 7] = [
    "Internal Audit",
    "Brand Management",
    "Planning & Design (Architectural)",
    "Electro-Mechanical",
    "Information Technology (IT)",
    "Management Information System (MIS)",
    "Material Quality Assurance & Purchase",
];

/// Accountant designations posted at project sites.
pub const PROJECT_SIDE_DESIGNATIONS: [&str; 2] = ["Assistant Project Accountant (CH)", "Site Accountant (CH)"];

pub const INVENTORY_DEPARTMENT: &str = "Inventory Mgt.";
pub const INVENTORY_PROJECT_SIDE_DEPARTMENT: &str = "Inventory Mgt. (Project Side)";
pub const SECURITY_DEPARTMENT: &str = "HR & Admin (Security)";

/// Resolved daily target for one (department, designation) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRule {
    /// Target shown to users, `0` for exempt departments.
    pub display_seconds: u64,
    /// Target used as the denominator in achievement math. Never `0`.
    pub calc_seconds: u64,
}

impl DurationRule {
    fn uniform(seconds: u64) -> Self {
        Self {
            display_seconds: seconds,
            calc_seconds: seconds,
        }
    }

    fn hours(hours: u64) -> Self {
        Self::uniform(hours * 3600)
    }
}

/// Returns `true` when the department has no enforced daily target.
pub fn is_exempt(department: &str) -> bool {
    EXEMPT_DEPARTMENTS.contains(&department)
}

fn is_project_side(designation: &str) -> bool {
    PROJECT_SIDE_DESIGNATIONS.contains(&designation)
}

/// Resolves the built-in target for a department and designation.
///
/// # Examples
///
/// ```rust
/// use sitewatch::libs::rules::resolve_duration;
///
/// let rule = resolve_duration("Internal Audit", "Manager");
/// assert_eq!(rule.display_seconds, 0);
/// assert_eq!(rule.calc_seconds, 4 * 3600);
///
/// let rule = resolve_duration("HR & Admin (Security)", "Security Supervisor");
/// assert_eq!(rule.calc_seconds, 7 * 3600);
/// ```
pub fn resolve_duration(department: &str, designation: &str) -> DurationRule {
    if is_exempt(department) {
        return DurationRule {
            display_seconds: 0,
            calc_seconds: BASELINE_SECONDS,
        };
    }
    if department == INVENTORY_DEPARTMENT && is_project_side(designation) {
        return DurationRule::hours(4);
    }
    if department == INVENTORY_PROJECT_SIDE_DEPARTMENT && is_project_side(designation) {
        return DurationRule::hours(6);
    }
    if department == SECURITY_DEPARTMENT {
        return DurationRule::hours(7);
    }
    DurationRule::uniform(BASELINE_SECONDS)
}

/// Parses a user-entered hours value into seconds.
///
/// Accepts decimal hours (`"5"`, `"4.5"`) and clock notation (`"4:30"`).
/// Returns `None` for empty, negative or malformed input and for values
/// that do not fit in `u64` seconds. Only an exact zero yields `Some(0)`.
pub fn parse_override_hours(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some((hours, minutes)) = value.split_once(':') {
        let hours: u64 = hours.trim().parse().ok()?;
        let minutes: u64 = minutes.trim().parse().ok()?;
        if minutes >= 60 {
            return None;
        }
        return hours.checked_mul(3600)?.checked_add(minutes * 60);
    }

    let hours: f64 = value.parse().ok()?;
    if !hours.is_finite() || hours < 0.0 {
        return None;
    }
    if hours == 0.0 {
        return Some(0);
    }

    let seconds = (hours * 3600.0).round();
    // 2^64 is the first value past u64::MAX.
    if seconds >= 18_446_744_073_709_551_616.0 {
        return None;
    }
    Some((seconds as u64).max(1))
}

/// Resolves the target, applying a per-department override when one is set.
///
/// An override that parses to exactly zero hides the target
/// (`display_seconds == 0`) but keeps `calc_seconds` at the 4h baseline so
/// that achievement percentages never divide by zero. Malformed overrides
/// are ignored.
pub fn resolve_duration_with_overrides(
    department: &str,
    designation: &str,
    overrides: &BTreeMap<String, String>,
) -> DurationRule {
    let resolved = resolve_duration(department, designation);

    let Some(raw) = overrides.get(department) else {
        return resolved;
    };

    match parse_override_hours(raw) {
        Some(0) => DurationRule {
            display_seconds: 0,
            calc_seconds: BASELINE_SECONDS,
        },
        Some(seconds) => DurationRule::uniform(seconds),
        None => {
            tracing::warn!(department, value = raw.as_str(), "ignoring malformed duration override");
            resolved
        }
    }
}
