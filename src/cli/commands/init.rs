// initコマンドハンドラー
//
// 設定ファイルのテンプレートを書き出します。

use crate::cli::command_context::CommandContext;
use crate::cli::commands::CommandOutput;
use crate::core::config::Config;
use crate::services::config_loader::ConfigLoader;
use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing::info;

/// initコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct InitCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルのパス（指定されない場合は既定のパス）
    pub config_path: Option<PathBuf>,
    /// 既存の設定ファイルを上書きするか
    pub force: bool,
}

/// initコマンドハンドラー
#[derive(Debug, Clone)]
pub struct InitCommandHandler {}

impl InitCommandHandler {
    /// 新しいInitCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// initコマンドを実行
    pub fn execute(&self, command: &InitCommand) -> Result<CommandOutput> {
        let config_path = CommandContext::resolve_config_path(
            &command.project_path,
            command.config_path.as_deref(),
        );

        if config_path.exists() && !command.force {
            return Err(anyhow!(
                "Config file already exists: {:?}. Use --force to overwrite it.",
                config_path
            ));
        }

        ConfigLoader::write_file(&config_path, &Config::template())?;
        info!(path = %config_path.display(), "Wrote config template");

        Ok(CommandOutput::success(format!(
            "Created {}. Edit the database settings, then run `schemalint check`.",
            config_path.display()
        )))
    }
}

impl Default for InitCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config() {
        let temp_dir = TempDir::new().unwrap();
        let command = InitCommand {
            project_path: temp_dir.path().to_path_buf(),
            config_path: None,
            force: false,
        };

        let output = InitCommandHandler::new().execute(&command).unwrap();

        assert_eq!(output.exit_code, 0);
        assert!(temp_dir.path().join(".schemalint.yaml").exists());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".schemalint.yaml");
        std::fs::write(&path, "existing").unwrap();

        let command = InitCommand {
            project_path: temp_dir.path().to_path_buf(),
            config_path: None,
            force: false,
        };
        let result = InitCommandHandler::new().execute(&command);

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".schemalint.yaml");
        std::fs::write(&path, "existing").unwrap();

        let command = InitCommand {
            project_path: temp_dir.path().to_path_buf(),
            config_path: None,
            force: true,
        };
        InitCommandHandler::new().execute(&command).unwrap();

        assert!(std::fs::read_to_string(&path).unwrap().contains("environments"));
    }
}
