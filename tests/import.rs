#[cfg(test)]
mod tests {
    use sitewatch::import::corrections::load_corrections;
    use sitewatch::import::dates::{normalize_date, parse_cell_date};
    use sitewatch::import::decode::decode;
    use sitewatch::import::issues::load_issues;
    use sitewatch::import::visits::{import_visits, load_visits, parse_visits};
    use sitewatch::import::workdays::{import_working_days, load_working_days, parse_working_days};
    use sitewatch::import::ImportError;
    use sitewatch::libs::correction::CorrectionStatus;
    use sitewatch::libs::issue::IssueStatus;
    use sitewatch::libs::period::YearMonth;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const VISIT_HEADER_LINE: &str =
        "Sl No,Date,Visitor Name,Department,Designation,Visited Project Name,Entry Time,Out Time,Duration,Formula";

    const CORRECTION_HEADER_LINE: &str = "Officer Name,Department,Designation,Project Name,Document Type,Tracking Number,Correction Type,Entry Date,Entry Time,Status,Completed Date,Completed Time,Old Data,New Data,Remarks";

    #[test]
    fn test_cell_date_formats() {
        assert_eq!(normalize_date("1-Jul-25").as_deref(), Some("2025-07-01"));
        assert_eq!(normalize_date("1-Jul-2025").as_deref(), Some("2025-07-01"));
        assert_eq!(normalize_date("1/7/2025").as_deref(), Some("2025-07-01"));
        assert_eq!(normalize_date("01-07-2025").as_deref(), Some("2025-07-01"));
        assert_eq!(normalize_date("2025-07-01").as_deref(), Some("2025-07-01"));
    }

    #[test]
    fn test_cell_date_rejects_garbage() {
        assert!(parse_cell_date("").is_none());
        assert!(parse_cell_date("yesterday").is_none());
        assert!(parse_cell_date("31/02/2025").is_none());
        assert!(parse_cell_date("01/07/25").is_none());
    }

    #[test]
    fn test_decode_utf8_bom_and_windows_1252() {
        assert_eq!(decode(b"\xEF\xBB\xBFDate"), "Date");
        assert_eq!(decode("Rahim".as_bytes()), "Rahim");
        assert_eq!(decode(b"Caf\xE9"), "Café");
    }

    #[test]
    fn test_load_visits() {
        let text = format!(
            "{}\n1,1-Sep-24,Rahim,Construction,Site Engineer,Lake View,10:00,10:25,0:25:00,\n\
             2,2024-09-03,Rahim,Construction,Site Engineer,Green Park,11:00,11:10,0:10:00,manual\n",
            VISIT_HEADER_LINE
        );

        let visits = load_visits(&text).unwrap();
        assert_eq!(visits.len(), 2);
        assert_eq!(visits[0].date, "2024-09-01");
        assert_eq!(visits[0].duration_seconds(), 1500);
        assert_eq!(visits[0].remarks, None);
        assert_eq!(visits[1].project_name, "Green Park");
        assert_eq!(visits[1].remarks.as_deref(), Some("manual"));
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let text = format!(
            "{}\n,,,,,,,,,\n1,2024-09-01,Rahim,Construction,,,,,#VALUE!,\n\n",
            VISIT_HEADER_LINE
        );
        let visits = load_visits(&text).unwrap();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].duration_seconds(), 0);
    }

    #[test]
    fn test_header_only_file_is_empty() {
        assert!(load_visits(VISIT_HEADER_LINE).unwrap().is_empty());
    }

    #[test]
    fn test_header_mismatch() {
        let err = load_visits("Date,Name,Duration\n2024-09-01,Rahim,0:10:00\n").unwrap_err();
        assert!(matches!(err, ImportError::HeaderMismatch { .. }));
    }

    #[test]
    fn test_header_with_padding_columns() {
        let text = format!("{},,\n1,2024-09-01,Rahim,Construction,,,,,0:10:00,,,\n", VISIT_HEADER_LINE);
        assert_eq!(load_visits(&text).unwrap().len(), 1);
    }

    #[test]
    fn test_row_error_carries_line_number() {
        let text = format!(
            "{}\n1,2024-09-01,Rahim,Construction,,,,,0:10:00,\n2,someday,Karim,Legal,,,,,0:10:00,\n",
            VISIT_HEADER_LINE
        );

        let rows = parse_visits(&text).unwrap();
        assert!(rows[0].is_ok());
        let err = rows[1].as_ref().unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.reason.contains("someday"));

        match load_visits(&text).unwrap_err() {
            ImportError::Row(row) => assert_eq!(row.line, 3),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_required_column() {
        let text = format!("{}\n1,2024-09-01,,Construction,,,,,0:10:00,\n", VISIT_HEADER_LINE);
        let err = load_visits(&text).unwrap_err();
        assert!(err.to_string().contains("Visitor Name"));
    }

    #[test]
    fn test_import_visits_from_windows_1252_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("visits.csv");
        let mut bytes = format!("{}\r\n1,2024-09-01,", VISIT_HEADER_LINE).into_bytes();
        bytes.extend_from_slice(b"Jos\xE9,Construction,,Lake View,,,0:30:00,\r\n");
        fs::write(&path, bytes).unwrap();

        let visits = import_visits(&path).unwrap();
        assert_eq!(visits[0].visitor_name, "José");
    }

    #[test]
    fn test_import_missing_file() {
        let err = import_visits(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
    }

    #[test]
    fn test_load_issues() {
        let text = "SL No,Date,Project Name,Zone,Status,Assigned Issue,Assigned To\n\
                    7,1-Mar-24,Lake View,North,Offline,Router fault,Tanvir\n\
                    ,02/03/2024,Lake View,North,issue,Router fault,Tanvir\n";

        let issues = load_issues(text).unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].id, "7");
        assert_eq!(issues[0].status, IssueStatus::Offline);
        assert_eq!(issues[1].id, "3");
        assert_eq!(issues[1].reported_at, "2024-03-02");
        assert_eq!(issues[1].status, IssueStatus::Issue);
    }

    #[test]
    fn test_issue_with_unknown_status() {
        let text = "SL No,Date,Project Name,Zone,Status,Assigned Issue,Assigned To\n\
                    1,2024-03-01,Lake View,North,Broken,Router fault,Tanvir\n";
        let err = load_issues(text).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_load_corrections() {
        let text = format!(
            "{}\n\
             Sumon,Inventory Mgt.,Manager,Lake View,GRN,GRN-1,Quantity,1-Sep-24,10:00,,,,5,6,\n\
             Sumon,Inventory Mgt.,Manager,Lake View,GRN,GRN-2,Rate,2024-09-02,09:00,Completed,2024-09-02,1:00 PM,10,12,fixed\n\
             Sumon,Inventory Mgt.,Manager,Lake View,GRN,GRN-3,Rate,2024-09-03,09:00,Rejected,2024-09-04,10:00,,,\n",
            CORRECTION_HEADER_LINE
        );

        let records = load_corrections(&text).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].status, CorrectionStatus::Pending);
        assert_eq!(records[0].entry_date, "2024-09-01");
        assert_eq!(records[0].old_data, "5");

        assert_eq!(records[1].status, CorrectionStatus::Completed);
        assert_eq!(records[1].completed_date.as_deref(), Some("2024-09-02"));
        assert_eq!(records[1].resolution_duration().unwrap().num_hours(), 4);
        assert_eq!(records[1].remarks.as_deref(), Some("fixed"));

        assert_eq!(records[2].status, CorrectionStatus::Rejected);
        assert_eq!(records[2].completed_date, None);
    }

    #[test]
    fn test_correction_requires_mandatory_columns() {
        let text = format!(
            "{}\nSumon,Inventory Mgt.,Manager,Lake View,GRN,,Quantity,2024-09-01,10:00,,,,,,\n",
            CORRECTION_HEADER_LINE
        );
        let err = load_corrections(&text).unwrap_err();
        assert!(err.to_string().contains("Tracking Number"));
    }

    #[test]
    fn test_correction_with_bad_time() {
        let text = format!(
            "{}\nSumon,Inventory Mgt.,Manager,Lake View,GRN,GRN-1,Quantity,2024-09-01,soon,,,,,,\n",
            CORRECTION_HEADER_LINE
        );
        assert!(load_corrections(&text).is_err());
    }

    #[test]
    fn test_load_working_days() {
        let text = "Name,Month,Working Days\nRahim,2024-09,20\nKarim,2024-09,18\n";
        let table = load_working_days(text, 22).unwrap();

        let september = YearMonth::new(2024, 9).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.for_month("Rahim", september), 20);
        assert_eq!(table.for_month("Nadia", september), 22);
    }

    #[test]
    fn test_working_days_validation() {
        let text = "Name,Month,Working Days\nRahim,Sep 2024,20\nKarim,2024-09,40\nNadia,2024-09,x\n";
        let rows = parse_working_days(text).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.is_err()));
    }

    #[test]
    fn test_import_working_days_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("working_days.csv");
        fs::write(&path, "\u{FEFF}Name,Month,Working Days\nRahim,2024-10,21\n").unwrap();

        let table = import_working_days(&path, 22).unwrap();
        assert_eq!(table.for_month("Rahim", YearMonth::new(2024, 10).unwrap()), 21);
    }
}
