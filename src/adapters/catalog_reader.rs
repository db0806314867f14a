// カタログリーダー
//
// データベースのシステムカタログから検査に必要なメタデータを取得する抽象化レイヤー。
// 検査ロジックはここで取得したスナップショットだけを扱います。

use crate::core::catalog::{
    CatalogColumn, CatalogConstraint, CatalogSnapshot, CatalogTable, ConstraintKind, TableRowStat,
};
use crate::core::error::DatabaseError;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};
use tracing::debug;

/// カタログ取得インターフェース
///
/// 4つのカタログ問い合わせを1本の接続上で順に実行します。
/// どれか1つでも失敗した場合はスナップショット全体が失敗となります。
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// テーブル名一覧を取得
    async fn get_tables(
        &self,
        conn: &mut PgConnection,
        schema: &str,
    ) -> Result<Vec<CatalogTable>, DatabaseError>;

    /// (テーブル名, カラム名) の一覧を取得
    async fn get_columns(
        &self,
        conn: &mut PgConnection,
        schema: &str,
    ) -> Result<Vec<CatalogColumn>, DatabaseError>;

    /// 制約の一覧を取得
    async fn get_constraints(
        &self,
        conn: &mut PgConnection,
        schema: &str,
    ) -> Result<Vec<CatalogConstraint>, DatabaseError>;

    /// テーブルごとの生存行数の推定値を取得
    async fn get_row_stats(
        &self,
        conn: &mut PgConnection,
        schema: &str,
    ) -> Result<Vec<TableRowStat>, DatabaseError>;

    /// 4つのカタログをまとめて取得
    async fn fetch_snapshot(
        &self,
        conn: &mut PgConnection,
        schema: &str,
    ) -> Result<CatalogSnapshot, DatabaseError> {
        let tables = self.get_tables(conn, schema).await?;
        let columns = self.get_columns(conn, schema).await?;
        let constraints = self.get_constraints(conn, schema).await?;
        let row_stats = self.get_row_stats(conn, schema).await?;

        Ok(CatalogSnapshot {
            tables,
            columns,
            constraints,
            row_stats,
        })
    }
}

/// PostgreSQL用カタログリーダー
#[derive(Debug, Clone, Default)]
pub struct PostgresCatalogReader;

const TABLES_CATALOG: &str = "information_schema.tables";
const COLUMNS_CATALOG: &str = "information_schema.columns";
const CONSTRAINTS_CATALOG: &str = "information_schema.table_constraints";
const ROW_STATS_CATALOG: &str = "pg_stat_user_tables";

/// スキーマ名を束縛してクエリを実行
async fn fetch_rows(
    conn: &mut PgConnection,
    catalog: &str,
    sql: &str,
    schema: &str,
) -> Result<Vec<PgRow>, DatabaseError> {
    let rows = sqlx::query(sql)
        .bind(schema)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| query_error(catalog, e))?;

    debug!(catalog, schema, rows = rows.len(), "Fetched catalog rows");
    Ok(rows)
}

fn query_error(catalog: &str, error: sqlx::Error) -> DatabaseError {
    DatabaseError::CatalogQuery {
        catalog: catalog.to_string(),
        cause: error.to_string(),
    }
}

fn table_from_row(row: &PgRow) -> Result<CatalogTable, sqlx::Error> {
    Ok(CatalogTable {
        name: row.try_get(0)?,
    })
}

fn column_from_row(row: &PgRow) -> Result<CatalogColumn, sqlx::Error> {
    Ok(CatalogColumn {
        table_name: row.try_get(0)?,
        column_name: row.try_get(1)?,
    })
}

fn constraint_from_row(row: &PgRow) -> Result<CatalogConstraint, sqlx::Error> {
    let constraint_type: String = row.try_get(2)?;
    Ok(CatalogConstraint {
        name: row.try_get(0)?,
        table_name: row.try_get(1)?,
        kind: ConstraintKind::from_catalog(&constraint_type),
    })
}

// n_live_tup は bigint
fn row_stat_from_row(row: &PgRow) -> Result<TableRowStat, sqlx::Error> {
    let table_name: String = row.try_get(0)?;
    let estimate: i64 = row.try_get(1)?;
    Ok(TableRowStat::from_estimate(table_name, estimate))
}

#[async_trait]
impl CatalogReader for PostgresCatalogReader {
    async fn get_tables(
        &self,
        conn: &mut PgConnection,
        schema: &str,
    ) -> Result<Vec<CatalogTable>, DatabaseError> {
        let sql = r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = $1
            ORDER BY table_name
        "#;

        let rows = fetch_rows(conn, TABLES_CATALOG, sql, schema).await?;
        rows.iter()
            .map(table_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| query_error(TABLES_CATALOG, e))
    }

    async fn get_columns(
        &self,
        conn: &mut PgConnection,
        schema: &str,
    ) -> Result<Vec<CatalogColumn>, DatabaseError> {
        let sql = r#"
            SELECT table_name::text, column_name::text
            FROM information_schema.columns
            WHERE table_schema = $1
            ORDER BY table_name, ordinal_position
        "#;

        let rows = fetch_rows(conn, COLUMNS_CATALOG, sql, schema).await?;
        rows.iter()
            .map(column_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| query_error(COLUMNS_CATALOG, e))
    }

    async fn get_constraints(
        &self,
        conn: &mut PgConnection,
        schema: &str,
    ) -> Result<Vec<CatalogConstraint>, DatabaseError> {
        let sql = r#"
            SELECT constraint_name::text, table_name::text, constraint_type::text
            FROM information_schema.table_constraints
            WHERE table_schema = $1
            ORDER BY table_name, constraint_name
        "#;

        let rows = fetch_rows(conn, CONSTRAINTS_CATALOG, sql, schema).await?;
        rows.iter()
            .map(constraint_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| query_error(CONSTRAINTS_CATALOG, e))
    }

    async fn get_row_stats(
        &self,
        conn: &mut PgConnection,
        schema: &str,
    ) -> Result<Vec<TableRowStat>, DatabaseError> {
        let sql = r#"
            SELECT relname::text, n_live_tup
            FROM pg_stat_user_tables
            WHERE schemaname = $1
            ORDER BY relname
        "#;

        let rows = fetch_rows(conn, ROW_STATS_CATALOG, sql, schema).await?;
        rows.iter()
            .map(row_stat_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| query_error(ROW_STATS_CATALOG, e))
    }
}
