#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::db::db::Db;
    use worklog::libs::error::WorklogError;
    use worklog::libs::report;

    struct ReportTestContext {
        temp_dir: TempDir,
    }

    impl ReportTestContext {
        fn db(&self) -> Db {
            Db::open(self.temp_dir.path().join("worklog.db")).unwrap()
        }
    }

    impl TestContext for ReportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ReportTestContext { temp_dir }
        }
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_total_is_exact_sum_of_hours(ctx: &mut ReportTestContext) {
        let mut db = ctx.db();

        let project_id = db.insert_project("Sum").unwrap();
        let other_id = db.insert_project("Other").unwrap();
        db.insert_entry("2026-08-17", project_id, "a", 1.25).unwrap();
        db.insert_entry("2026-08-18", project_id, "b", 2.5).unwrap();
        db.insert_entry("2026-08-19", other_id, "noise", 9.0).unwrap();

        let report = db.project_report(project_id).unwrap();
        assert_eq!(report.total_hours, 3.75);
        assert_eq!(report.lines.len(), 2);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_text_format(ctx: &mut ReportTestContext) {
        let mut db = ctx.db();

        let project_id = db.insert_project("Fmt").unwrap();
        db.insert_entry("2026-08-17", project_id, "planning", 1.5).unwrap();
        db.insert_entry("2026-08-18", project_id, "implementation", 6.0).unwrap();

        let text = report::generate(&db, project_id).unwrap();
        assert_eq!(
            text,
            "Total hours: 7.50\n2026-08-17, planning, 1.50\n2026-08-18, implementation, 6.00"
        );
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_lines_in_insertion_order(ctx: &mut ReportTestContext) {
        let mut db = ctx.db();

        let project_id = db.insert_project("Ordered").unwrap();
        db.insert_entry("2026-08-19", project_id, "later date first", 1.0).unwrap();
        db.insert_entry("2026-08-01", project_id, "earlier date second", 1.0).unwrap();

        let report = db.project_report(project_id).unwrap();
        assert_eq!(report.lines[0].desc, "later date first");
        assert_eq!(report.lines[1].desc, "earlier date second");
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_zero_entry_project_is_an_error(ctx: &mut ReportTestContext) {
        let mut db = ctx.db();

        let project_id = db.insert_project("Empty").unwrap();
        let result = db.project_report(project_id);
        assert!(matches!(result, Err(WorklogError::NoTimesBooked)));
    }
}
