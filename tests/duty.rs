#[cfg(test)]
mod tests {
    use sitewatch::libs::context::AnalyticsContext;
    use sitewatch::libs::duty::{build_duty_summary, DutyReport};
    use sitewatch::libs::period::{Period, YearMonth};
    use sitewatch::libs::rules::SECURITY_DEPARTMENT;
    use sitewatch::libs::table::Tabular;
    use sitewatch::libs::visit::VisitRecord;
    use sitewatch::libs::working_days::WorkingDays;

    fn september() -> Period {
        Period::Month(YearMonth::new(2024, 9).unwrap())
    }

    fn patrol(date: &str, name: &str, project: &str, duration: &str) -> VisitRecord {
        VisitRecord::new(date, name, SECURITY_DEPARTMENT, "Security Supervisor", project, duration)
    }

    fn sample() -> Vec<VisitRecord> {
        vec![
            patrol("2024-09-01", "Jamal", "Lake View", "4:00:00"),
            patrol("2024-09-01", "Jamal", "Green Park", "3:00:00"),
            patrol("2024-09-02", "Jamal", "Lake View", "2:00:00"),
            patrol("2024-09-02", "Habib", "Lake View", "1:00:00"),
            patrol("2024-08-30", "Jamal", "Lake View", "8:00:00"),
            VisitRecord::new("2024-09-01", "Rahim", "Construction", "Site Engineer", "Lake View", "5:00:00"),
        ]
    }

    #[test]
    fn test_duty_days_and_target() {
        let ctx = AnalyticsContext::new(WorkingDays::new(20));
        let rows = build_duty_summary(&sample(), &september(), SECURITY_DEPARTMENT, &ctx);
        assert_eq!(rows.len(), 2);

        let jamal = rows.iter().find(|r| r.officer == "Jamal").unwrap();
        assert_eq!(jamal.target_daily_seconds, 7 * 3600);
        assert_eq!(jamal.duty_days, 2);
        assert_eq!(jamal.visits, 3);
        assert_eq!(jamal.projects, 2);
        assert_eq!(jamal.total_seconds, 9 * 3600);
        assert_eq!(jamal.average_daily_seconds, 4.5 * 3600.0);
        assert_eq!(jamal.days_meeting_target, 1);

        assert_eq!(jamal.days[0].date, "2024-09-01");
        assert!(jamal.days[0].met_target);
        assert_eq!(jamal.days[0].projects, 2);
        assert!(!jamal.days[1].met_target);

        let expected = 9.0 * 3600.0 / (20.0 * 7.0 * 3600.0) * 100.0;
        assert!((jamal.achieved_percent - expected).abs() < 1e-9);
    }

    #[test]
    fn test_other_departments_are_excluded() {
        let ctx = AnalyticsContext::new(WorkingDays::new(20));
        let rows = build_duty_summary(&sample(), &september(), SECURITY_DEPARTMENT, &ctx);
        assert!(rows.iter().all(|r| r.officer != "Rahim"));

        let construction = build_duty_summary(&sample(), &september(), "Construction", &ctx);
        assert_eq!(construction.len(), 1);
        assert_eq!(construction[0].days_meeting_target, 1);
    }

    #[test]
    fn test_report_defaults_to_security() {
        let ctx = AnalyticsContext::new(WorkingDays::new(20));
        let report = DutyReport::build(&sample(), september(), None, &ctx);

        assert_eq!(report.department, SECURITY_DEPARTMENT);
        assert_eq!(report.title(), "Duty analysis: HR & Admin (Security), September 2024");
        assert_eq!(report.rows().len(), 2);
        assert_eq!(report.rows()[0].len(), report.headers().len());
    }
}
