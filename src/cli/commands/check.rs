// checkコマンドハンドラー
//
// スキーマ検査を実装します。
// - 設定の読み込みと環境変数による上書き
// - カタログスナップショットの取得（単一接続）
// - 検査ルールの実行
// - レポートの書き出しと終了コードの決定

use crate::adapters::catalog_reader::{CatalogReader, PostgresCatalogReader};
use crate::adapters::database::DatabaseConnectionService;
use crate::cli::command_context::CommandContext;
use crate::cli::commands::{CommandOutput, EXIT_VIOLATIONS};
use crate::cli::OutputFormat;
use crate::core::catalog::CatalogSnapshot;
use crate::core::config::DatabaseConfig;
use crate::services::database_config_resolver::DatabaseConfigResolver;
use crate::services::report_writer::ReportWriterService;
use crate::services::schema_linter::SchemaLinterService;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// checkコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct CheckCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルのパス（指定されない場合は既定のパス）
    pub config_path: Option<PathBuf>,
    /// 対象環境
    pub env: String,
    /// レポート出力先（指定されない場合は設定ファイルから取得）
    pub output: Option<PathBuf>,
    /// 検査対象スキーマ（指定されない場合は設定ファイルから取得）
    pub schema: Option<String>,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// checkコマンドハンドラー
#[derive(Debug, Clone)]
pub struct CheckCommandHandler {}

impl CheckCommandHandler {
    /// 新しいCheckCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// checkコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - checkコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 表示内容と終了コード。接続・カタログ取得・書き込みの失敗はエラー
    pub async fn execute(&self, command: &CheckCommand) -> Result<CommandOutput> {
        self.execute_with(command, &PostgresCatalogReader).await
    }

    /// 指定したカタログリーダーでcheckコマンドを実行
    pub async fn execute_with(
        &self,
        command: &CheckCommand,
        reader: &dyn CatalogReader,
    ) -> Result<CommandOutput> {
        let context = CommandContext::load(
            command.project_path.clone(),
            command.config_path.as_deref(),
            &command.env,
        )?;
        let db_config = self.resolve_database_config(
            &context,
            command,
            DatabaseConfigResolver::env_lookup,
        )?;

        info!(
            env = %command.env,
            database = %db_config.database,
            schema = %db_config.schema,
            "Linting schema"
        );

        let snapshot = DatabaseConnectionService::new()
            .load_snapshot(&db_config, reader)
            .await
            .with_context(|| {
                format!("Failed to read catalog for schema '{}'", db_config.schema)
            })?;

        if snapshot.table_count() == 0 {
            warn!(
                schema = %db_config.schema,
                "Schema contains no tables; check that the schema name is correct"
            );
        }

        let output_path = context.output_path(command.output.as_deref());
        self.report(&snapshot, &output_path, &command.format)
    }

    /// 対象環境のデータベース設定を解決
    ///
    /// 優先順位は コマンドライン引数 > 環境変数 > 設定ファイル。
    pub fn resolve_database_config<F>(
        &self,
        context: &CommandContext,
        command: &CheckCommand,
        lookup: F,
    ) -> Result<DatabaseConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = context.config.get_database_config(&command.env)?;
        let mut config = DatabaseConfigResolver::apply_overrides_with(&base, lookup);

        if let Some(schema) = &command.schema {
            config.schema = schema.clone();
        }

        config
            .validate()
            .with_context(|| format!("Invalid database config for environment '{}'", command.env))?;

        Ok(config)
    }

    /// スナップショットを検査し、レポートを書き出す
    ///
    /// # Arguments
    ///
    /// * `snapshot` - カタログスナップショット
    /// * `output_path` - レポート出力先
    /// * `format` - 出力フォーマット
    pub fn report(
        &self,
        snapshot: &CatalogSnapshot,
        output_path: &Path,
        format: &OutputFormat,
    ) -> Result<CommandOutput> {
        let report = SchemaLinterService::new().lint(snapshot);

        let writer = ReportWriterService::new();
        let outcome = writer
            .write(&report, output_path)
            .with_context(|| "Failed to write lint report")?;

        let text = match format {
            OutputFormat::Text => writer.format_summary(&outcome),
            OutputFormat::Json => {
                info!("{}", writer.format_summary(&outcome));
                writer.render_json(&report)?
            }
        };

        let exit_code = if report.is_clean() { 0 } else { EXIT_VIOLATIONS };

        Ok(CommandOutput { text, exit_code })
    }
}

impl Default for CheckCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
