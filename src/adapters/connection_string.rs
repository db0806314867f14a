// 接続オプションビルダー
//
// DatabaseConfig から PostgreSQL の接続オプションと、ログ表示用の接続文字列を生成する。

use crate::core::config::DatabaseConfig;
use crate::core::naming::APP_NAME;
use sqlx::postgres::PgConnectOptions;

/// ユーザー未指定時の既定ユーザー
const DEFAULT_USER: &str = "postgres";

/// 接続オプションを生成
pub fn build_connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(config.user.as_deref().unwrap_or(DEFAULT_USER))
        .application_name(APP_NAME);

    match config.password.as_deref() {
        Some(password) if !password.is_empty() => options.password(password),
        _ => options,
    }
}

/// 接続文字列を生成（パスワードは伏せ字にする）
pub fn build_redacted_connection_string(config: &DatabaseConfig) -> String {
    let user = config.user.as_deref().unwrap_or(DEFAULT_USER);
    let auth = match config.password.as_deref() {
        Some(password) if !password.is_empty() => format!("{}:***", user),
        _ => user.to_string(),
    };
    format!(
        "postgresql://{}@{}:{}/{}",
        auth, config.host, config.port, config.database
    )
}
