// データベース接続アダプター
//
// SQLxを使用したPostgreSQLへの単一接続の管理を行います。
// 接続は検査1回につき1本だけ確立し、成功・失敗にかかわらず必ず閉じます。

use crate::adapters::catalog_reader::CatalogReader;
use crate::adapters::connection_string::{build_connect_options, build_redacted_connection_string};
use crate::core::catalog::CatalogSnapshot;
use crate::core::config::DatabaseConfig;
use crate::core::error::DatabaseError;
use sqlx::{Connection, PgConnection};
use std::time::Duration;
use tracing::{debug, info, warn};

/// 接続タイムアウトの既定値（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// データベース接続サービス
#[derive(Debug, Clone)]
pub struct DatabaseConnectionService {}

impl DatabaseConnectionService {
    /// 新しいDatabaseConnectionServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// 接続タイムアウトを解決
    pub fn connect_timeout(&self, config: &DatabaseConfig) -> Duration {
        Duration::from_secs(config.timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS))
    }

    /// データベースに接続
    ///
    /// # Arguments
    ///
    /// * `config` - データベース設定
    ///
    /// # Returns
    ///
    /// 確立した接続、またはタイムアウトを含む接続エラー
    pub async fn connect(&self, config: &DatabaseConfig) -> Result<PgConnection, DatabaseError> {
        let url = build_redacted_connection_string(config);
        let timeout = self.connect_timeout(config);
        debug!(url = %url, timeout_secs = timeout.as_secs(), "Connecting to database");

        let options = build_connect_options(config);
        let conn = tokio::time::timeout(timeout, PgConnection::connect_with(&options))
            .await
            .map_err(|_| DatabaseError::Connection {
                message: format!("Failed to connect to {}", url),
                cause: format!("timed out after {}s", timeout.as_secs()),
            })?
            .map_err(|e| DatabaseError::Connection {
                message: format!("Failed to connect to {}", url),
                cause: e.to_string(),
            })?;

        info!(url = %url, "Connected to database");
        Ok(conn)
    }

    /// 接続を閉じる
    ///
    /// 終了処理の失敗は検査結果に影響しないため、警告として記録するのみ。
    pub async fn close(&self, conn: PgConnection) {
        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection cleanly: {}", e);
        } else {
            debug!("Database connection closed");
        }
    }

    /// 接続してカタログスナップショットを取得し、接続を閉じる
    ///
    /// カタログ取得が失敗した場合も接続を閉じてからエラーを返します。
    ///
    /// # Arguments
    ///
    /// * `config` - データベース設定（検査対象スキーマを含む）
    /// * `reader` - カタログリーダー
    pub async fn load_snapshot(
        &self,
        config: &DatabaseConfig,
        reader: &dyn CatalogReader,
    ) -> Result<CatalogSnapshot, DatabaseError> {
        let mut conn = self.connect(config).await?;

        let fetched = reader.fetch_snapshot(&mut conn, &config.schema).await;
        self.close(conn).await;

        let snapshot = fetched?;
        info!(
            schema = %config.schema,
            tables = snapshot.tables.len(),
            columns = snapshot.columns.len(),
            constraints = snapshot.constraints.len(),
            "Loaded catalog snapshot"
        );
        Ok(snapshot)
    }
}

impl Default for DatabaseConnectionService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_service() {
        let service = DatabaseConnectionService::new();
        assert!(format!("{:?}", service).contains("DatabaseConnectionService"));
    }

    #[test]
    fn test_connect_timeout() {
        let service = DatabaseConnectionService::new();
        let mut config = DatabaseConfig::for_database("university");
        assert_eq!(service.connect_timeout(&config), Duration::from_secs(30));

        config.timeout = Some(5);
        assert_eq!(service.connect_timeout(&config), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_connect_refused_is_connection_error() {
        let mut config = DatabaseConfig::for_database("university");
        config.host = "127.0.0.1".to_string();
        config.port = 1;
        config.timeout = Some(5);

        let service = DatabaseConnectionService::new();
        match service.connect(&config).await {
            Err(err) => assert!(err.is_connection()),
            Ok(_) => panic!("expected connection to port 1 to fail"),
        }
    }
}
