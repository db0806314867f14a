// エラー型定義
//
// 検査で見つかった違反（Violation）と、実行を中断させる致命的エラー
// （DatabaseError, IoError）を定義します。
// 違反は検査結果として収集されるもので、エラー型ではありません。

use crate::core::naming::{FOREIGN_KEY_PREFIX, PRIMARY_KEY_PREFIX};
use std::fmt;
use thiserror::Error;

/// 命名規約・構造規約の違反
///
/// `Display` の出力がそのままレポートに書き出されるメッセージになります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// テーブル名が小文字ASCIIでない
    InvalidTableName {
        /// テーブル名
        table: String,
    },

    /// カラム名が小文字ASCIIでない
    InvalidColumnName {
        /// テーブル名
        table: String,
        /// カラム名
        column: String,
    },

    /// 主キー制約名に `pk_` プレフィックスがない
    PrimaryKeyPrefix {
        /// 制約名
        constraint: String,
    },

    /// 外部キー制約名に `fk_` プレフィックスがない
    ForeignKeyPrefix {
        /// 制約名
        constraint: String,
    },

    /// テーブルが空（生存行数の推定値が0）
    EmptyTable {
        /// テーブル名
        table: String,
    },
}

impl Violation {
    /// 違反を検出したルール名
    pub fn rule(&self) -> &'static str {
        match self {
            Violation::InvalidTableName { .. } => "table-name",
            Violation::InvalidColumnName { .. } => "column-name",
            Violation::PrimaryKeyPrefix { .. } | Violation::ForeignKeyPrefix { .. } => {
                "constraint-prefix"
            }
            Violation::EmptyTable { .. } => "row-count",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidTableName { table } => write!(f, "Invalid table name: {}", table),
            Violation::InvalidColumnName { table, column } => {
                write!(f, "Invalid column name: {}.{}", table, column)
            }
            Violation::PrimaryKeyPrefix { constraint } => write!(
                f,
                "Primary key constraint without '{}' prefix: {}",
                PRIMARY_KEY_PREFIX, constraint
            ),
            Violation::ForeignKeyPrefix { constraint } => write!(
                f,
                "Foreign key constraint without '{}' prefix: {}",
                FOREIGN_KEY_PREFIX, constraint
            ),
            Violation::EmptyTable { table } => write!(f, "Table {} is empty", table),
        }
    }
}

/// 検査結果
///
/// 検出された違反を検出順に保持します。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// 違反のリスト
    pub violations: Vec<Violation>,
}

impl LintReport {
    /// 新しい検査結果を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 違反を追加
    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// 違反が1件もないかどうか
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// 違反の数を取得
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// 他の検査結果を末尾に連結
    pub fn merge(&mut self, other: LintReport) {
        self.violations.extend(other.violations);
    }

    /// 複数の検査結果を順に連結
    pub fn merge_all(&mut self, others: impl IntoIterator<Item = LintReport>) {
        for other in others {
            self.merge(other);
        }
    }

    /// レポートに書き出すメッセージの一覧
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// データベースエラー
///
/// 接続やカタログ取得の失敗を表現します。どちらも実行を中断します。
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connection error
    #[error("Database connection error: {message} (cause: {cause})")]
    Connection {
        /// エラーメッセージ
        message: String,
        /// エラー原因
        cause: String,
    },

    /// Catalog query error
    #[error("Failed to query catalog '{catalog}': {cause}")]
    CatalogQuery {
        /// 問い合わせたカタログ
        catalog: String,
        /// エラー原因
        cause: String,
    },
}

impl DatabaseError {
    /// 接続エラーかどうか
    pub fn is_connection(&self) -> bool {
        matches!(self, DatabaseError::Connection { .. })
    }

    /// カタログ取得エラーかどうか
    pub fn is_catalog_query(&self) -> bool {
        matches!(self, DatabaseError::CatalogQuery { .. })
    }
}

/// I/Oエラー
///
/// レポートや設定ファイルの出力時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum IoError {
    /// File write error
    #[error("Failed to write file: {path} (cause: {cause})")]
    FileWrite {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },

    /// Serialization error
    #[error("Failed to serialize report: {cause}")]
    Serialize {
        /// エラー原因
        cause: String,
    },
}

impl IoError {
    /// ファイル書き込みエラーかどうか
    pub fn is_file_write(&self) -> bool {
        matches!(self, IoError::FileWrite { .. })
    }
}
