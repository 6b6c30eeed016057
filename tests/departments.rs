#[cfg(test)]
mod tests {
    use sitewatch::libs::context::AnalyticsContext;
    use sitewatch::libs::departments::{build_department_summary, roll_up, DepartmentReport};
    use sitewatch::libs::period::{Period, YearMonth};
    use sitewatch::libs::summary::build_employee_summary;
    use sitewatch::libs::table::Tabular;
    use sitewatch::libs::visit::VisitRecord;
    use sitewatch::libs::working_days::WorkingDays;

    fn month(m: u32) -> Period {
        Period::Month(YearMonth::new(2024, m).unwrap())
    }

    fn visit(date: &str, name: &str, department: &str, duration: &str) -> VisitRecord {
        VisitRecord::new(date, name, department, "Manager", "Lake View", duration)
    }

    fn sample() -> Vec<VisitRecord> {
        vec![
            visit("2024-08-05", "Rahim", "Construction", "2:00:00"),
            visit("2024-09-05", "Rahim", "Construction", "2:00:00"),
            visit("2024-09-06", "Rahim", "Construction", "1:00:00"),
            visit("2024-09-05", "Karim", "Construction", "1:00:00"),
            visit("2024-09-05", "Nadia", "Legal", "0:30:00"),
        ]
    }

    #[test]
    fn test_roll_up_sums_employees() {
        let ctx = AnalyticsContext::new(WorkingDays::new(10));
        let rows = build_department_summary(&sample(), &month(9), &month(8), &ctx);
        assert_eq!(rows.len(), 2);

        let construction = &rows[0];
        assert_eq!(construction.department, "Construction");
        assert_eq!(construction.employees, 2);
        assert_eq!(construction.current.active_employees, 2);
        assert_eq!(construction.current.actual_seconds, 4 * 3600);
        assert_eq!(construction.current.target_seconds, 2 * 10 * 4 * 3600);
        assert_eq!(construction.current.visits, 3);
        assert!((construction.current.achieved_percent - 5.0).abs() < 1e-9);
        assert_eq!(construction.current.average_seconds, 7200.0);

        assert_eq!(construction.previous.active_employees, 1);
        assert_eq!(construction.previous.average_seconds, 7200.0);
        assert_eq!(construction.average_stability, 0.0);
        assert!((construction.stability - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_idle_previous_period_is_full_growth() {
        let ctx = AnalyticsContext::new(WorkingDays::new(10));
        let rows = build_department_summary(&sample(), &month(9), &month(8), &ctx);

        let legal = rows.iter().find(|r| r.department == "Legal").unwrap();
        assert_eq!(legal.previous.active_employees, 0);
        assert_eq!(legal.previous.average_seconds, 0.0);
        assert_eq!(legal.average_stability, 100.0);
    }

    #[test]
    fn test_unchanged_activity_has_zero_stability() {
        let records = vec![
            visit("2024-08-05", "Rahim", "Construction", "2:00:00"),
            visit("2024-08-05", "Karim", "Construction", "0:40:00"),
            visit("2024-09-05", "Rahim", "Construction", "2:00:00"),
            visit("2024-09-05", "Karim", "Construction", "0:40:00"),
        ];
        let ctx = AnalyticsContext::new(WorkingDays::new(22));
        let employees = build_employee_summary(&records, &month(9), &month(8), &ctx);
        let rows = roll_up(&employees, &ctx);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].stability, 0.0);
        assert_eq!(rows[0].average_stability, 0.0);
    }

    #[test]
    fn test_huge_totals_saturate() {
        let records = vec![
            visit("2024-09-05", "Rahim", "Construction", "5124095576030431:0:0"),
            visit("2024-09-05", "Karim", "Construction", "5124095576030431:0:0"),
        ];
        let mut ctx = AnalyticsContext::new(WorkingDays::new(22));
        ctx.overrides.insert("Construction".to_string(), "5124095576030431:00".to_string());

        let rows = build_department_summary(&records, &month(9), &month(8), &ctx);
        assert_eq!(rows[0].current.actual_seconds, u64::MAX);
        assert_eq!(rows[0].current.target_seconds, u64::MAX);
    }

    #[test]
    fn test_empty_period_gives_no_rows() {
        let ctx = AnalyticsContext::new(WorkingDays::new(10));
        let rows = build_department_summary(&sample(), &month(3), &month(2), &ctx);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_report_rows_match_headers() {
        let ctx = AnalyticsContext::new(WorkingDays::new(10));
        let report = DepartmentReport::build(&sample(), month(9), month(8), &ctx);

        assert!(report.title().starts_with("Department summary: September 2024"));
        let width = report.headers().len();
        for row in report.rows() {
            assert_eq!(row.len(), width);
        }
        assert_eq!(report.rows()[0][0].to_string(), "Construction");
    }
}
