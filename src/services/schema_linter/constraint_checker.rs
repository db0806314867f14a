// 制約名の検査

use super::naming_helpers::has_prefix_ignore_ascii_case;
use crate::core::catalog::{CatalogConstraint, ConstraintKind};
use crate::core::error::{LintReport, Violation};
use crate::core::naming::{FOREIGN_KEY_PREFIX, PRIMARY_KEY_PREFIX};

/// 主キー・外部キー制約名のプレフィックスを検査
///
/// 主キーは `pk_`、外部キーは `fk_` で始まる必要があります（大文字・小文字は区別しない）。
/// UNIQUE や CHECK などその他の制約は対象外です。
pub fn check_constraint_prefixes(constraints: &[CatalogConstraint]) -> LintReport {
    let mut report = LintReport::new();

    for constraint in constraints {
        match constraint.kind {
            ConstraintKind::PrimaryKey
                if !has_prefix_ignore_ascii_case(&constraint.name, PRIMARY_KEY_PREFIX) =>
            {
                report.add(Violation::PrimaryKeyPrefix {
                    constraint: constraint.name.clone(),
                });
            }
            ConstraintKind::ForeignKey
                if !has_prefix_ignore_ascii_case(&constraint.name, FOREIGN_KEY_PREFIX) =>
            {
                report.add(Violation::ForeignKeyPrefix {
                    constraint: constraint.name.clone(),
                });
            }
            _ => {}
        }
    }

    report
}
