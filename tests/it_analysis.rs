#[cfg(test)]
mod tests {
    use sitewatch::libs::issue::{AssignedIssue, IssueStatus};
    use sitewatch::libs::it_analysis::{summarize_by_assignee, IssueReport};
    use sitewatch::libs::table::Tabular;
    use sitewatch::libs::timeline::build_timelines;
    use std::str::FromStr;

    fn issue(date: &str, name: &str, project: &str, assignee: &str, status: IssueStatus) -> AssignedIssue {
        AssignedIssue {
            id: date.to_string(),
            issue: name.to_string(),
            reported_at: date.to_string(),
            assigned_to: assignee.to_string(),
            status,
            project_name: project.to_string(),
            zone: "South".to_string(),
        }
    }

    fn sample() -> Vec<AssignedIssue> {
        vec![
            issue("2024-03-01", "Router fault", "Lake View", "Tanvir", IssueStatus::Offline),
            issue("2024-03-02", "Router fault", "Lake View", "Tanvir", IssueStatus::Offline),
            issue("2024-03-03", "Router fault", "Lake View", "Tanvir", IssueStatus::Issue),
            issue("2024-03-01", "Printer jam", "Green Park", "Tanvir", IssueStatus::Issue),
            issue("2024-03-05", "CCTV down", "Green Park", "Sabbir", IssueStatus::Issue),
        ]
    }

    #[test]
    fn test_issue_status_from_str() {
        assert_eq!(IssueStatus::from_str(" offline ").unwrap(), IssueStatus::Offline);
        assert_eq!(IssueStatus::from_str("ISSUE").unwrap(), IssueStatus::Issue);
        assert!(IssueStatus::from_str("broken").is_err());
    }

    #[test]
    fn test_summarize_by_assignee() {
        let timelines = build_timelines(&sample());
        let assignees = summarize_by_assignee(&timelines);

        assert_eq!(assignees.len(), 2);
        assert_eq!(assignees[0].assignee, "Sabbir");
        assert_eq!(assignees[0].ongoing, 1);
        assert_eq!(assignees[0].average_resolution_days, None);

        let tanvir = &assignees[1];
        assert_eq!(tanvir.issues, 2);
        assert_eq!(tanvir.resolved, 2);
        assert_eq!(tanvir.offline_records, 2);
        assert_eq!(tanvir.total_active_days, 4);
        assert_eq!(tanvir.average_resolution_days, Some(2.0));
    }

    #[test]
    fn test_report_lists_ongoing_first() {
        let report = IssueReport::build(&sample());
        assert_eq!(report.title(), "IT issue timeline as of 2024-03-05");

        let rows = report.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][2].to_string(), "CCTV down");
        assert_eq!(rows[0][4].to_string(), "Ongoing");
        assert_eq!(rows[0][8].to_string(), "-");
        assert_eq!(rows[1][9].to_string(), "2024-03-01..2024-03-03");
        assert_eq!(rows[1][8].to_string(), "3");
    }

    #[test]
    fn test_assignee_table() {
        let report = IssueReport::build(&sample());
        let table = report.assignee_table();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[1][6].to_string(), "2.00");
    }

    #[test]
    fn test_empty_log() {
        let report = IssueReport::build(&[]);
        assert_eq!(report.latest_date, None);
        assert!(report.rows().is_empty());
        assert_eq!(report.title(), "IT issue timeline");
    }
}
