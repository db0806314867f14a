// カラム名の検査

use super::naming_helpers::is_lowercase_ascii;
use crate::core::catalog::CatalogColumn;
use crate::core::error::{LintReport, Violation};

/// 小文字ASCIIでないカラム名を検出
///
/// カラムごとに独立して判定するため、あるテーブルの違反が
/// 他のテーブルの判定に影響することはありません。
pub fn check_column_names(columns: &[CatalogColumn]) -> LintReport {
    let mut report = LintReport::new();

    for column in columns {
        if !is_lowercase_ascii(&column.column_name) {
            report.add(Violation::InvalidColumnName {
                table: column.table_name.clone(),
                column: column.column_name.clone(),
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_column_reported_with_table() {
        let columns = vec![
            CatalogColumn::new("courses", "CourseID"),
            CatalogColumn::new("courses", "title"),
        ];
        let report = check_column_names(&columns);

        assert_eq!(
            report.messages(),
            vec!["Invalid column name: courses.CourseID"]
        );
    }

    #[test]
    fn test_columns_checked_independently_across_tables() {
        let columns = vec![
            CatalogColumn::new("Students", "id"),
            CatalogColumn::new("courses", "Name"),
            CatalogColumn::new("teachers", "name"),
        ];
        let report = check_column_names(&columns);

        // テーブル名自体はこのチェッカーの対象外
        assert_eq!(report.messages(), vec!["Invalid column name: courses.Name"]);
    }
}
