// カタログメタデータモデル
//
// データベースのシステムカタログから読み取ったスナップショットを表現します。
// 1回の検査実行の間だけ存在し、取得後は変更されません。

/// テーブル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTable {
    /// テーブル名
    pub name: String,
}

impl CatalogTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// カラム
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogColumn {
    /// 所属テーブル名
    pub table_name: String,
    /// カラム名
    pub column_name: String,
}

impl CatalogColumn {
    pub fn new(table_name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
        }
    }
}

/// 制約の種類
///
/// `information_schema.table_constraints.constraint_type` の値に対応します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    ForeignKey,
    Unique,
    Check,
    /// 上記以外（NOT NULL など、サーバーのバージョンによって現れる種類）
    Other(String),
}

impl ConstraintKind {
    /// カタログの `constraint_type` 文字列から変換
    pub fn from_catalog(constraint_type: &str) -> Self {
        match constraint_type.trim().to_ascii_uppercase().as_str() {
            "PRIMARY KEY" => ConstraintKind::PrimaryKey,
            "FOREIGN KEY" => ConstraintKind::ForeignKey,
            "UNIQUE" => ConstraintKind::Unique,
            "CHECK" => ConstraintKind::Check,
            _ => ConstraintKind::Other(constraint_type.to_string()),
        }
    }
}

/// テーブル制約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConstraint {
    /// 制約名
    pub name: String,
    /// 所属テーブル名
    pub table_name: String,
    /// 制約の種類
    pub kind: ConstraintKind,
}

impl CatalogConstraint {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>, kind: ConstraintKind) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            kind,
        }
    }
}

/// テーブルの行数統計
///
/// `live_row_count` はデータベースの統計情報による推定値で、
/// 直近に更新されたテーブルでは実際の行数とずれることがあります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowStat {
    /// テーブル名
    pub table_name: String,
    /// 生存行数の推定値
    pub live_row_count: u64,
}

impl TableRowStat {
    pub fn new(table_name: impl Into<String>, live_row_count: u64) -> Self {
        Self {
            table_name: table_name.into(),
            live_row_count,
        }
    }

    /// カタログの符号付き推定値から作成（負値は0として扱う）
    pub fn from_estimate(table_name: impl Into<String>, estimate: i64) -> Self {
        Self::new(table_name, u64::try_from(estimate).unwrap_or(0))
    }
}

/// カタログスナップショット
///
/// 1つのスキーマについて取得したメタデータ一式。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub tables: Vec<CatalogTable>,
    pub columns: Vec<CatalogColumn>,
    pub constraints: Vec<CatalogConstraint>,
    pub row_stats: Vec<TableRowStat>,
}

impl CatalogSnapshot {
    /// 空のスナップショットを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// テーブル数を取得
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// メタデータが1件も含まれていないかどうか
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
            && self.columns.is_empty()
            && self.constraints.is_empty()
            && self.row_stats.is_empty()
    }
}
