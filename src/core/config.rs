// 設定ファイル管理
//
// プロジェクトの設定ファイル（YAML形式）の構造と検証、
// 環境別のデータベース接続設定の管理を行います。

use crate::core::naming;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

/// プロジェクト設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 設定ファイルのバージョン
    pub version: String,

    /// レポートの出力先
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// 環境別のデータベース設定
    pub environments: HashMap<String, DatabaseConfig>,
}

fn default_output() -> PathBuf {
    PathBuf::from(naming::DEFAULT_OUTPUT_FILE)
}

impl Config {
    /// デフォルトの設定ファイルパス
    pub const DEFAULT_CONFIG_PATH: &'static str = naming::CONFIG_FILE;

    /// 現行の設定ファイルバージョン
    pub const CURRENT_VERSION: &'static str = "1.0";

    /// 単一環境のみを持つ設定を作成
    pub fn single(environment: &str, database: DatabaseConfig) -> Self {
        let mut environments = HashMap::new();
        environments.insert(environment.to_string(), database);

        Self {
            version: Self::CURRENT_VERSION.to_string(),
            output: default_output(),
            environments,
        }
    }

    /// `init` コマンドが書き出すテンプレート設定
    pub fn template() -> Self {
        let database = DatabaseConfig {
            user: Some("postgres".to_string()),
            timeout: Some(30),
            ..DatabaseConfig::for_database("postgres")
        };
        Self::single(naming::DEFAULT_ENVIRONMENT, database)
    }

    /// 指定された環境のデータベース設定を取得
    pub fn get_database_config(&self, environment: &str) -> Result<DatabaseConfig> {
        self.environments.get(environment).cloned().ok_or_else(|| {
            let mut available: Vec<&String> = self.environments.keys().collect();
            available.sort();
            anyhow!(
                "Environment '{}' not found. Available environments: {:?}",
                environment,
                available
            )
        })
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        if self.version.is_empty() {
            return Err(anyhow!("Config file version is not specified"));
        }

        if self.environments.is_empty() {
            return Err(anyhow!(
                "At least one environment configuration is required"
            ));
        }

        for (env_name, db_config) in &self.environments {
            db_config
                .validate()
                .with_context(|| format!("Invalid config for environment '{}'", env_name))?;
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).with_context(|| "Failed to parse config file")
    }
}

/// データベース接続設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// ホスト名
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号
    #[serde(default = "default_port")]
    pub port: u16,

    /// データベース名
    pub database: String,

    /// ユーザー名
    pub user: Option<String>,

    /// パスワード
    pub password: Option<String>,

    /// 検査対象のスキーマ
    #[serde(default = "default_schema")]
    pub schema: String,

    /// 接続タイムアウト（秒）
    pub timeout: Option<u64>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_schema() -> String {
    naming::DEFAULT_SCHEMA.to_string()
}

impl DatabaseConfig {
    /// 既定値でデータベース名のみを指定した設定を作成
    pub fn for_database(database: &str) -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: database.to_string(),
            user: None,
            password: None,
            schema: default_schema(),
            timeout: None,
        }
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.is_empty() {
            return Err(anyhow!("Database name is not specified"));
        }

        if self.schema.is_empty() {
            return Err(anyhow!("Schema name is not specified"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let yaml = r#"
version: "1.0"
environments:
  development:
    database: university
"#;
        let config: Config = yaml.parse().unwrap();
        let db = config.get_database_config("development").unwrap();

        assert_eq!(db.host, "localhost");
        assert_eq!(db.port, 5432);
        assert_eq!(db.schema, "public");
        assert_eq!(db.user, None);
        assert_eq!(config.output, PathBuf::from("errors.json"));
    }

    #[test]
    fn test_template_is_valid() {
        let config = Config::template();
        assert!(config.validate().is_ok());
        assert!(config.environments.contains_key("development"));
    }

    #[test]
    fn test_validate_empty_schema() {
        let mut db = DatabaseConfig::for_database("university");
        db.schema = String::new();
        let config = Config::single("development", db);

        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("Schema name is not specified"));
    }
}
