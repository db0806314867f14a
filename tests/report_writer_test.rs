/// レポート出力のテスト
///
/// JSONファイルの書式、上書き動作、違反なし時の動作を確認します。

#[cfg(test)]
mod report_writer_tests {
    use schemalint::core::error::{LintReport, Violation};
    use schemalint::services::report_writer::{ReportOutcome, ReportWriterService};
    use std::fs;
    use tempfile::TempDir;

    fn report_with(violations: Vec<Violation>) -> LintReport {
        let mut report = LintReport::new();
        for violation in violations {
            report.add(violation);
        }
        report
    }

    /// 違反がある場合はJSON配列をファイルに書き出す
    #[test]
    fn test_write_report_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("errors.json");
        let report = report_with(vec![
            Violation::InvalidTableName {
                table: "Students".to_string(),
            },
            Violation::InvalidColumnName {
                table: "courses".to_string(),
                column: "CourseID".to_string(),
            },
        ]);

        let service = ReportWriterService::new();
        let outcome = service.write(&report, &path).unwrap();

        assert_eq!(
            outcome,
            ReportOutcome::Written {
                path: path.clone(),
                count: 2,
            }
        );

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "[\n    \"Invalid table name: Students\",\n    \"Invalid column name: courses.CourseID\"\n]"
        );

        let parsed: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report.messages());
    }

    /// 既存のファイルは上書きされる
    #[test]
    fn test_existing_file_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("errors.json");
        fs::write(&path, "[\"stale\", \"entries\", \"from a previous run\"]").unwrap();

        let report = report_with(vec![Violation::EmptyTable {
            table: "students".to_string(),
        }]);
        ReportWriterService::new().write(&report, &path).unwrap();

        let parsed: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, vec!["Table students is empty"]);
    }

    /// 違反がない場合は既存のファイルにも触れない
    #[test]
    fn test_clean_report_leaves_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("errors.json");
        fs::write(&path, "[]").unwrap();

        let outcome = ReportWriterService::new()
            .write(&LintReport::new(), &path)
            .unwrap();

        assert_eq!(outcome, ReportOutcome::Clean);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    /// 非ASCIIの名前もUTF-8のまま書き出される
    #[test]
    fn test_non_ascii_names_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("errors.json");
        let report = report_with(vec![Violation::InvalidTableName {
            table: "студенты".to_string(),
        }]);

        ReportWriterService::new().write(&report, &path).unwrap();

        let parsed: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, vec!["Invalid table name: студенты"]);
    }
}
