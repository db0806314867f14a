// スキーマリンターサービス
//
// 取得済みのカタログスナップショットに対して命名規約・構造規約の検査を行います。
// 各チェッカーはスナップショットを読むだけの純粋な関数で、データベースには触れません。

mod column_name_checker;
mod constraint_checker;
mod naming_helpers;
mod row_count_checker;
mod table_name_checker;

use crate::core::catalog::CatalogSnapshot;
use crate::core::error::LintReport;
use tracing::debug;

/// スキーマリンターサービス
#[derive(Debug, Clone)]
pub struct SchemaLinterService {}

impl SchemaLinterService {
    /// 新しいSchemaLinterServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// すべての検査を実行
    ///
    /// 結果はテーブル名、カラム名、制約名、行数の順に連結されます。
    /// 同じスナップショットに対しては常に同じ結果を返します。
    ///
    /// # Arguments
    ///
    /// * `snapshot` - 検査対象のカタログスナップショット
    ///
    /// # Returns
    ///
    /// 検出された違反を含む検査結果
    pub fn lint(&self, snapshot: &CatalogSnapshot) -> LintReport {
        let mut report = LintReport::new();

        report.merge_all([
            self.lint_table_names(snapshot),
            self.lint_column_names(snapshot),
            self.lint_constraints(snapshot),
            self.lint_row_counts(snapshot),
        ]);

        for violation in &report.violations {
            debug!(rule = violation.rule(), "{}", violation);
        }

        report
    }

    /// テーブル名の検査
    pub fn lint_table_names(&self, snapshot: &CatalogSnapshot) -> LintReport {
        table_name_checker::check_table_names(&snapshot.tables)
    }

    /// カラム名の検査
    pub fn lint_column_names(&self, snapshot: &CatalogSnapshot) -> LintReport {
        column_name_checker::check_column_names(&snapshot.columns)
    }

    /// 主キー・外部キー制約名の検査
    pub fn lint_constraints(&self, snapshot: &CatalogSnapshot) -> LintReport {
        constraint_checker::check_constraint_prefixes(&snapshot.constraints)
    }

    /// 空テーブルの検査
    pub fn lint_row_counts(&self, snapshot: &CatalogSnapshot) -> LintReport {
        row_count_checker::check_row_counts(&snapshot.row_stats)
    }
}

impl Default for SchemaLinterService {
    fn default() -> Self {
        Self::new()
    }
}
