#[cfg(test)]
mod tests {
    use sitewatch::libs::stability::{achieved_percent, average, average_stability, percent_of, stability};

    #[test]
    fn test_achieved_percent() {
        let percent = achieved_percent(2100, 25, 14400);
        assert!((percent - 0.58333).abs() < 0.0001);

        assert_eq!(achieved_percent(14400 * 22, 22, 14400), 100.0);
    }

    #[test]
    fn test_zero_target_is_zero_percent() {
        assert_eq!(achieved_percent(3600, 0, 14400), 0.0);
        assert_eq!(achieved_percent(3600, 22, 0), 0.0);
        assert_eq!(percent_of(3600, 0), 0.0);
    }

    #[test]
    fn test_percent_can_exceed_hundred() {
        assert_eq!(percent_of(300, 100), 300.0);
    }

    #[test]
    fn test_stability_is_point_delta() {
        assert_eq!(stability(12.5, 10.0), 2.5);
        assert_eq!(stability(10.0, 12.5), -2.5);
        assert_eq!(stability(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_average_stability() {
        assert_eq!(average_stability(1500.0, 1000.0), 50.0);
        assert_eq!(average_stability(500.0, 1000.0), -50.0);
        assert_eq!(average_stability(3600.0, 0.0), 100.0);
        assert_eq!(average_stability(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(3600, 2), 1800.0);
        assert_eq!(average(3600, 0), 0.0);
    }
}
