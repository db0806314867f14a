// データベース設定の解決サービス
//
// 環境変数による上書きをサービス層で扱い、coreは純粋な構造体に保つ。

use crate::core::config::DatabaseConfig;

/// 上書きに使用する環境変数名
pub const ENV_HOST: &str = "DB_HOST";
pub const ENV_PORT: &str = "DB_PORT";
pub const ENV_DATABASE: &str = "DB_DATABASE";
pub const ENV_USER: &str = "DB_USER";
pub const ENV_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_SCHEMA: &str = "DB_SCHEMA";

/// データベース設定の解決ユーティリティ
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfigResolver;

impl DatabaseConfigResolver {
    /// プロセスの環境変数を参照
    pub fn env_lookup(key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    /// 任意の変数ソースによる上書きを適用
    pub fn apply_overrides_with<F>(base: &DatabaseConfig, lookup: F) -> DatabaseConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = base.clone();

        if let Some(host) = lookup(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            match port.parse::<u16>() {
                Ok(port_num) => config.port = port_num,
                Err(_) => tracing::warn!("Ignoring invalid {} value: {}", ENV_PORT, port),
            }
        }
        if let Some(database) = lookup(ENV_DATABASE) {
            config.database = database;
        }
        if let Some(user) = lookup(ENV_USER) {
            config.user = Some(user);
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            config.password = Some(password);
        }
        if let Some(schema) = lookup(ENV_SCHEMA) {
            config.schema = schema;
        }

        config
    }
}
