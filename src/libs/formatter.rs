//! Duration and percentage formatting utilities for user-friendly display.
//!
//! Visit logs carry durations as `"H:M:S"` strings produced by spreadsheet
//! formulas. This module converts them into second counts for the
//! analytics layer and back into the `"HH:MM"` form used in every table
//! and export.
//!
//! ## Formats
//!
//! ### Duration Format
//! All durations are displayed as `"HH:MM"`:
//! - Hours are zero-padded to at least 2 digits and may exceed 24
//! - Minutes are zero-padded to 2 digits
//! - Seconds are rounded to the nearest minute
//!
//! ### Percentages
//! Percentages are kept at full precision everywhere and rounded to two
//! decimals only here, at display time.
//!
//! ## Examples
//!
//! ```rust
//! use sitewatch::libs::formatter::{format_seconds, parse_duration_to_seconds};
//!
//! let seconds = parse_duration_to_seconds("1:29:40");
//! assert_eq!(seconds, 5380);
//! assert_eq!(format_seconds(seconds), "01:30");
//! ```

/// Parses an `"H:M:S"` (or `"H:M"`) duration string into seconds.
///
/// Every component must be a non-negative integer. Anything else,
/// including an empty cell, yields `0`: an unparseable duration counts as
/// a zero-length visit rather than being dropped.
///
/// # Examples
///
/// ```rust
/// use sitewatch::libs::formatter::parse_duration_to_seconds;
///
/// assert_eq!(parse_duration_to_seconds("0:25:00"), 1500);
/// assert_eq!(parse_duration_to_seconds("2:05"), 7500);
/// assert_eq!(parse_duration_to_seconds("#VALUE!"), 0);
/// ```
pub fn parse_duration_to_seconds(value: &str) -> u64 {
    let parts: Vec<&str> = value.trim().split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return 0;
    }

    let mut numbers = Vec::with_capacity(3);
    for part in &parts {
        match part.trim().parse::<u64>() {
            Ok(n) => numbers.push(n),
            Err(_) => return 0,
        }
    }

    let hours = numbers[0];
    let minutes = numbers[1];
    let seconds = numbers.get(2).copied().unwrap_or(0);

    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

/// Formats a second count as `"HH:MM"`, rounding to the nearest minute.
///
/// # Examples
///
/// ```rust
/// use sitewatch::libs::formatter::format_seconds;
///
/// assert_eq!(format_seconds(0), "00:00");
/// assert_eq!(format_seconds(14400), "04:00");
/// assert_eq!(format_seconds(89), "00:01");
/// assert_eq!(format_seconds(360000), "100:00");
/// ```
pub fn format_seconds(seconds: u64) -> String {
    let total_minutes = (seconds + 30) / 60;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Formats a fractional second count (an average) as `"HH:MM"`.
///
/// Negative and non-finite values are shown as `"00:00"`.
pub fn format_seconds_f64(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return format_seconds(0);
    }
    format_seconds(seconds.round() as u64)
}

/// Formats a percentage with two decimals and a trailing `%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Formats a stability delta with a direction glyph.
///
/// Positive deltas get `▲`, negative deltas `▼` and a flat delta `•`. The
/// number itself is shown unsigned since the glyph carries the sign.
///
/// # Examples
///
/// ```rust
/// use sitewatch::libs::formatter::format_stability;
///
/// assert_eq!(format_stability(12.345), "▲ 12.35%");
/// assert_eq!(format_stability(-3.0), "▼ 3.00%");
/// assert_eq!(format_stability(0.0), "• 0.00%");
/// ```
pub fn format_stability(value: f64) -> String {
    // Compare on the displayed value so -0.001 does not render as "▼ 0.00%".
    let rounded = (value * 100.0).round() / 100.0;
    if rounded > 0.0 {
        format!("▲ {:.2}%", value.abs())
    } else if rounded < 0.0 {
        format!("▼ {:.2}%", value.abs())
    } else {
        "• 0.00%".to_string()
    }
}
