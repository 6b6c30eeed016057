#[cfg(test)]
mod tests {
    use sitewatch::libs::aggregate::DurationBucket;
    use sitewatch::libs::context::AnalyticsContext;
    use sitewatch::libs::period::{Period, YearMonth};
    use sitewatch::libs::summary::{build_employee_summary, EmployeeReport};
    use sitewatch::libs::table::Tabular;
    use sitewatch::libs::visit::VisitRecord;
    use sitewatch::libs::working_days::WorkingDays;

    fn month(year: i32, month: u32) -> Period {
        Period::Month(YearMonth::new(year, month).unwrap())
    }

    fn visit(date: &str, name: &str, department: &str, designation: &str, duration: &str) -> VisitRecord {
        VisitRecord::new(date, name, department, designation, "Lake View", duration)
    }

    #[test]
    fn test_single_employee_end_to_end() {
        let records = vec![
            visit("2024-09-02", "Rahim", "Construction", "Site Engineer", "0:25:00"),
            visit("2024-09-03", "Rahim", "Construction", "Site Engineer", "0:10:00"),
        ];
        let ctx = AnalyticsContext::new(WorkingDays::new(25));

        let rows = build_employee_summary(&records, &month(2024, 9), &month(2024, 8), &ctx);
        assert_eq!(rows.len(), 1);

        let rahim = &rows[0];
        assert_eq!(rahim.current.actual_seconds, 2100);
        assert_eq!(rahim.supposed_daily_seconds, 14400);
        assert_eq!(rahim.current.supposed_seconds, 360000);
        assert!((rahim.current.achieved_percent - 0.5833).abs() < 0.001);
        assert_eq!(rahim.current.visits, 2);
        assert_eq!(rahim.current.days_visited, 2);
        assert_eq!(rahim.current.buckets.get(DurationBucket::TwentyPlus), 1);
        assert_eq!(rahim.current.buckets.get(DurationBucket::TenToNineteen), 1);

        assert_eq!(rahim.previous.actual_seconds, 0);
        assert_eq!(rahim.previous.achieved_percent, 0.0);
        assert!((rahim.stability - rahim.current.achieved_percent).abs() < 1e-9);
    }

    #[test]
    fn test_employee_only_in_comparison_period_is_listed() {
        let records = vec![
            visit("2024-08-05", "Karim", "Legal", "Manager", "1:00:00"),
            visit("2024-09-05", "Rahim", "Construction", "Site Engineer", "1:00:00"),
        ];
        let ctx = AnalyticsContext::new(WorkingDays::new(22));

        let rows = build_employee_summary(&records, &month(2024, 9), &month(2024, 8), &ctx);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Rahim", "Karim"]);

        let karim = &rows[1];
        assert_eq!(karim.current.actual_seconds, 0);
        assert_eq!(karim.previous.actual_seconds, 3600);
        assert!(karim.stability < 0.0);
    }

    #[test]
    fn test_unchanged_activity_has_zero_stability() {
        let records = vec![
            visit("2024-08-05", "Rahim", "Construction", "Site Engineer", "1:30:00"),
            visit("2024-08-06", "Rahim", "Construction", "Site Engineer", "0:45:00"),
            visit("2024-09-05", "Rahim", "Construction", "Site Engineer", "1:30:00"),
            visit("2024-09-06", "Rahim", "Construction", "Site Engineer", "0:45:00"),
        ];
        let ctx = AnalyticsContext::new(WorkingDays::new(22));

        let rows = build_employee_summary(&records, &month(2024, 9), &month(2024, 8), &ctx);
        assert_eq!(rows[0].current.achieved_percent, rows[0].previous.achieved_percent);
        assert_eq!(rows[0].stability, 0.0);
    }

    #[test]
    fn test_out_of_range_override_keeps_rule() {
        let records = vec![visit("2024-09-05", "Rahim", "Construction", "Site Engineer", "4:00:00")];
        let mut ctx = AnalyticsContext::new(WorkingDays::new(22));
        ctx.overrides.insert("Construction".to_string(), "1e16".to_string());

        let rows = build_employee_summary(&records, &month(2024, 9), &month(2024, 8), &ctx);
        assert_eq!(rows[0].rule.calc_seconds, 4 * 3600);
        assert_eq!(rows[0].current.supposed_seconds, 22 * 4 * 3600);
    }

    #[test]
    fn test_huge_durations_saturate() {
        let records = vec![
            visit("2024-09-05", "Rahim", "Construction", "Site Engineer", "5124095576030431:0:0"),
            visit("2024-09-06", "Rahim", "Construction", "Site Engineer", "5124095576030431:0:0"),
        ];
        let mut ctx = AnalyticsContext::new(WorkingDays::new(22));
        ctx.overrides.insert("Construction".to_string(), "5124095576030431:00".to_string());

        let rows = build_employee_summary(&records, &month(2024, 9), &month(2024, 8), &ctx);
        assert_eq!(rows[0].current.actual_seconds, u64::MAX);
        assert_eq!(rows[0].current.supposed_seconds, u64::MAX);
    }

    #[test]
    fn test_exempt_department_shows_no_daily_target() {
        let records = vec![visit("2024-09-05", "Nadia", "Internal Audit", "Auditor", "2:00:00")];
        let ctx = AnalyticsContext::new(WorkingDays::new(20));

        let rows = build_employee_summary(&records, &month(2024, 9), &month(2024, 8), &ctx);
        assert_eq!(rows[0].supposed_daily_seconds, 0);
        assert_eq!(rows[0].current.supposed_seconds, 4 * 3600 * 20);
        assert!((rows[0].current.achieved_percent - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_imported_working_days_apply_per_month() {
        let records = vec![
            visit("2024-08-05", "Rahim", "Construction", "Site Engineer", "4:00:00"),
            visit("2024-09-05", "Rahim", "Construction", "Site Engineer", "4:00:00"),
        ];
        let mut working_days = WorkingDays::new(22);
        working_days.insert("Rahim", YearMonth::new(2024, 9).unwrap(), 10);
        let ctx = AnalyticsContext::new(working_days);

        let rows = build_employee_summary(&records, &month(2024, 9), &month(2024, 8), &ctx);
        assert_eq!(rows[0].current.working_days, 10);
        assert_eq!(rows[0].previous.working_days, 22);
        assert!((rows[0].current.achieved_percent - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_working_days_yields_zero_percent() {
        let records = vec![visit("2024-09-05", "Rahim", "Construction", "Site Engineer", "4:00:00")];
        let ctx = AnalyticsContext::new(WorkingDays::new(0));

        let rows = build_employee_summary(&records, &month(2024, 9), &month(2024, 8), &ctx);
        assert_eq!(rows[0].current.achieved_percent, 0.0);
    }

    #[test]
    fn test_malformed_dates_are_ignored() {
        let records = vec![
            visit("05/09/2024", "Rahim", "Construction", "Site Engineer", "4:00:00"),
            visit("2024-09-06", "Rahim", "Construction", "Site Engineer", "1:00:00"),
        ];
        let ctx = AnalyticsContext::new(WorkingDays::new(22));

        let rows = build_employee_summary(&records, &month(2024, 9), &month(2024, 8), &ctx);
        assert_eq!(rows[0].current.actual_seconds, 3600);
    }

    #[test]
    fn test_report_table_shape() {
        let records = vec![visit("2024-09-02", "Rahim", "Construction", "Site Engineer", "0:25:00")];
        let ctx = AnalyticsContext::new(WorkingDays::new(25));
        let report = EmployeeReport::build(&records, month(2024, 9), month(2024, 8), &ctx);

        assert_eq!(report.title(), "Employee performance: September 2024 vs August 2024");
        let headers = report.headers();
        let rows = report.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), headers.len());
        assert_eq!(rows[0][0].to_string(), "Rahim");
        assert_eq!(rows[0][3].to_string(), "04:00");
        assert_eq!(rows[0][8].to_string(), "00:25");
    }
}
