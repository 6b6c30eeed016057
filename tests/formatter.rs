#[cfg(test)]
mod tests {
    use sitewatch::libs::formatter::{
        format_percent, format_seconds, format_seconds_f64, format_stability,
        parse_duration_to_seconds,
    };

    #[test]
    fn test_parse_duration_hms() {
        assert_eq!(parse_duration_to_seconds("0:25:00"), 1500);
        assert_eq!(parse_duration_to_seconds("1:02:03"), 3723);
        assert_eq!(parse_duration_to_seconds("00:00:00"), 0);
        assert_eq!(parse_duration_to_seconds(" 2:00:30 "), 7230);
    }

    #[test]
    fn test_parse_duration_hours_minutes() {
        assert_eq!(parse_duration_to_seconds("2:05"), 7500);
        assert_eq!(parse_duration_to_seconds("0:45"), 2700);
    }

    #[test]
    fn test_parse_duration_invalid_is_zero() {
        assert_eq!(parse_duration_to_seconds(""), 0);
        assert_eq!(parse_duration_to_seconds("abc"), 0);
        assert_eq!(parse_duration_to_seconds("#VALUE!"), 0);
        assert_eq!(parse_duration_to_seconds("-1:00:00"), 0);
        assert_eq!(parse_duration_to_seconds("1:2:3:4"), 0);
        assert_eq!(parse_duration_to_seconds("45"), 0);
        assert_eq!(parse_duration_to_seconds("1.5:00:00"), 0);
    }

    #[test]
    fn test_parse_duration_large_components() {
        assert_eq!(parse_duration_to_seconds("100:00:00"), 360000);
        assert_eq!(parse_duration_to_seconds("0:90:00"), 5400);
        assert_eq!(parse_duration_to_seconds("5124095576030431:0:0"), u64::MAX);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "00:00");
        assert_eq!(format_seconds(60), "00:01");
        assert_eq!(format_seconds(14400), "04:00");
        assert_eq!(format_seconds(2100), "00:35");
        assert_eq!(format_seconds(360000), "100:00");
    }

    #[test]
    fn test_format_seconds_rounds_to_nearest_minute() {
        assert_eq!(format_seconds(29), "00:00");
        assert_eq!(format_seconds(30), "00:01");
        assert_eq!(format_seconds(89), "00:01");
        assert_eq!(format_seconds(90), "00:02");
        assert_eq!(format_seconds(3599), "01:00");
    }

    #[test]
    fn test_parse_format_round_trip() {
        for (h, m, s) in [(0, 0, 0), (1, 2, 3), (3, 59, 29), (3, 59, 30), (12, 0, 59), (0, 7, 31)] {
            let text = format!("{}:{}:{}", h, m, s);
            let seconds = parse_duration_to_seconds(&text);
            let rounded_minutes = (h * 3600 + m * 60 + s + 30) / 60;
            let expected = format!("{:02}:{:02}", rounded_minutes / 60, rounded_minutes % 60);
            assert_eq!(format_seconds(seconds), expected, "round trip of {}", text);
        }
    }

    #[test]
    fn test_format_seconds_f64() {
        assert_eq!(format_seconds_f64(1799.6), "00:30");
        assert_eq!(format_seconds_f64(-5.0), "00:00");
        assert_eq!(format_seconds_f64(f64::NAN), "00:00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.58333), "0.58%");
        assert_eq!(format_percent(100.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_format_stability_glyphs() {
        assert_eq!(format_stability(12.345), "▲ 12.35%");
        assert_eq!(format_stability(-3.0), "▼ 3.00%");
        assert_eq!(format_stability(0.0), "• 0.00%");
    }

    #[test]
    fn test_format_stability_tiny_values_are_flat() {
        assert_eq!(format_stability(0.001), "• 0.00%");
        assert_eq!(format_stability(-0.004), "• 0.00%");
    }
}
