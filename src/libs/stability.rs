//! Achievement and stability calculations.
//!
//! ## Key Concepts
//!
//! - **Achieved percentage**: logged visit time divided by the time implied
//!   by working days × daily target
//! - **Stability**: percentage-point difference between the current and the
//!   comparison period's achieved percentage
//! - **Average stability**: percent change of a per-employee average
//!   between periods, used by the department summary
//!
//! ## Formulas
//!
//! ```text
//! Achieved  = actual / (working_days * target_per_day) * 100
//! Stability = current_achieved - previous_achieved
//! AvgChange = (current_avg - previous_avg) / previous_avg * 100
//! ```
//!
//! Every division guards its denominator: a zero denominator yields `0`,
//! never `NaN` or infinity, so tables stay stable for empty groups. The one
//! exception is [`average_stability`], where growth from a zero average is
//! reported as exactly `+100`.
//!
//! Nothing here rounds; rounding happens in the formatter.

/// Achieved percentage for a working-day based target.
///
/// # Examples
///
/// ```rust
/// use sitewatch::libs::stability::achieved_percent;
///
/// let percent = achieved_percent(2100, 25, 14400);
/// assert!((percent - 0.5833).abs() < 0.001);
///
/// assert_eq!(achieved_percent(2100, 0, 14400), 0.0);
/// assert_eq!(achieved_percent(2100, 25, 0), 0.0);
/// ```
pub fn achieved_percent(actual_seconds: u64, working_days: u32, target_per_day_seconds: u64) -> f64 {
    let target_total = u64::from(working_days).saturating_mul(target_per_day_seconds);
    percent_of(actual_seconds, target_total)
}

/// `actual / target_total * 100`, or `0` when the target is zero.
pub fn percent_of(actual: u64, target_total: u64) -> f64 {
    if target_total == 0 {
        return 0.0;
    }
    actual as f64 / target_total as f64 * 100.0
}

/// Percentage-point delta between two achieved percentages.
pub fn stability(current_percent: f64, previous_percent: f64) -> f64 {
    current_percent - previous_percent
}

/// Percent change between two period averages.
///
/// A previous average of zero cannot be divided by: growth from zero to a
/// positive average is reported as exactly `100.0`, and zero to zero as
/// `0.0`.
///
/// # Examples
///
/// ```rust
/// use sitewatch::libs::stability::average_stability;
///
/// assert_eq!(average_stability(3600.0, 0.0), 100.0);
/// assert_eq!(average_stability(0.0, 0.0), 0.0);
/// assert_eq!(average_stability(1500.0, 1000.0), 50.0);
/// ```
pub fn average_stability(current_average: f64, previous_average: f64) -> f64 {
    if previous_average == 0.0 {
        return if current_average > 0.0 { 100.0 } else { 0.0 };
    }
    (current_average - previous_average) / previous_average * 100.0
}

/// Mean of `total` over `count` items, `0` for an empty set.
pub fn average(total: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total as f64 / count as f64
}
