// 行数の検査

use crate::core::catalog::TableRowStat;
use crate::core::error::{LintReport, Violation};

/// 生存行数の推定値が0のテーブルを検出
///
/// 推定値は統計情報から得られるため、直近に更新されたテーブルでは
/// 古い値に基づく結果になることがあります。
pub fn check_row_counts(row_stats: &[TableRowStat]) -> LintReport {
    let mut report = LintReport::new();

    for stat in row_stats {
        if stat.live_row_count == 0 {
            report.add(Violation::EmptyTable {
                table: stat.table_name.clone(),
            });
        }
    }

    report
}
