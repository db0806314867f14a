// テーブル名の検査

use super::naming_helpers::is_lowercase_ascii;
use crate::core::catalog::CatalogTable;
use crate::core::error::{LintReport, Violation};

/// 小文字ASCIIでないテーブル名を検出
pub fn check_table_names(tables: &[CatalogTable]) -> LintReport {
    let mut report = LintReport::new();

    for table in tables {
        if !is_lowercase_ascii(&table.name) {
            report.add(Violation::InvalidTableName {
                table: table.name.clone(),
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_tables_pass() {
        let tables = vec![CatalogTable::new("students"), CatalogTable::new("course_2")];
        assert!(check_table_names(&tables).is_clean());
    }

    #[test]
    fn test_each_invalid_table_reported_once() {
        let tables = vec![
            CatalogTable::new("Students"),
            CatalogTable::new("courses"),
            CatalogTable::new("öffnungszeiten"),
        ];
        let report = check_table_names(&tables);

        assert_eq!(
            report.messages(),
            vec![
                "Invalid table name: Students",
                "Invalid table name: öffnungszeiten"
            ]
        );
    }
}
