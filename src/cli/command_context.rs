// コマンド共通コンテキスト
//
// 設定ファイル読み込みやパス解決の重複をCLI層で集約する。

use crate::core::config::{Config, DatabaseConfig};
use crate::core::naming;
use crate::services::config_loader::ConfigLoader;
use crate::services::database_config_resolver::{DatabaseConfigResolver, ENV_DATABASE};
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_path: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// 設定ファイルのパスを解決
    ///
    /// 明示的なパスが相対パスの場合はプロジェクトルートからの相対とみなす。
    pub fn resolve_config_path(project_path: &Path, config_path: Option<&Path>) -> PathBuf {
        match config_path {
            Some(path) => project_path.join(path),
            None => project_path.join(Config::DEFAULT_CONFIG_PATH),
        }
    }

    /// プロセスの環境変数を使って設定を読み込む
    pub fn load(project_path: PathBuf, config_path: Option<&Path>, env: &str) -> Result<Self> {
        Self::load_with_env(project_path, config_path, env, DatabaseConfigResolver::env_lookup)
    }

    /// 設定ファイルを読み込んでコンテキストを作成
    ///
    /// 既定の設定ファイルが存在せず `DB_DATABASE` が設定されている場合は、
    /// 既定値と環境変数だけで `env` の設定を組み立てる。
    pub fn load_with_env<F>(
        project_path: PathBuf,
        config_path: Option<&Path>,
        env: &str,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolved = Self::resolve_config_path(&project_path, config_path);

        if !resolved.exists() {
            if config_path.is_none() {
                if let Some(database) = lookup(ENV_DATABASE) {
                    debug!("Config file not found, using {} from environment", ENV_DATABASE);
                    let config = Config::single(env, DatabaseConfig::for_database(&database));
                    return Ok(Self {
                        project_path,
                        config_path: resolved,
                        config,
                    });
                }
            }

            return Err(anyhow!(
                "Config file not found: {:?}. Create one with `{} init` or set {}.",
                resolved,
                naming::APP_NAME,
                ENV_DATABASE
            ));
        }

        let config =
            ConfigLoader::from_file(&resolved).with_context(|| "Failed to read config file")?;

        Ok(Self {
            project_path,
            config_path: resolved,
            config,
        })
    }

    /// レポート出力先の絶対パス
    pub fn output_path(&self, override_path: Option<&Path>) -> PathBuf {
        let path = override_path.unwrap_or(self.config.output.as_path());
        self.project_path.join(path)
    }
}
