// レポート出力サービス
//
// 検査結果をJSON配列（インデント4スペース）としてファイルに書き出し、
// 利用者向けのステータス行を整形します。違反がない場合はファイルを作成しません。

use crate::core::error::{IoError, LintReport};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// レポート出力の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// 違反なし（ファイルは書き出していない）
    Clean,
    /// 違反をファイルに書き出した
    Written {
        /// 出力先
        path: PathBuf,
        /// 違反の数
        count: usize,
    },
}

/// レポート出力サービス
#[derive(Debug, Clone)]
pub struct ReportWriterService {}

impl ReportWriterService {
    /// 新しいReportWriterServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// 違反メッセージをJSON配列に整形
    pub fn render_json(&self, report: &LintReport) -> Result<String, IoError> {
        let messages = report.messages();

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        messages
            .serialize(&mut serializer)
            .map_err(|e| IoError::Serialize {
                cause: e.to_string(),
            })?;

        String::from_utf8(buffer).map_err(|e| IoError::Serialize {
            cause: e.to_string(),
        })
    }

    /// 違反があればファイルに書き出す
    ///
    /// 既存のファイルは上書きされます。書き込みに失敗した場合はエラーを返します。
    ///
    /// # Arguments
    ///
    /// * `report` - 検査結果
    /// * `path` - 出力先ファイル
    pub fn write(&self, report: &LintReport, path: &Path) -> Result<ReportOutcome, IoError> {
        if report.is_clean() {
            return Ok(ReportOutcome::Clean);
        }

        let json = self.render_json(report)?;
        std::fs::write(path, json).map_err(|e| IoError::FileWrite {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;

        info!(
            path = %path.display(),
            count = report.violation_count(),
            "Wrote lint report"
        );

        Ok(ReportOutcome::Written {
            path: path.to_path_buf(),
            count: report.violation_count(),
        })
    }

    /// ステータス行を整形
    pub fn format_summary(&self, outcome: &ReportOutcome) -> String {
        match outcome {
            ReportOutcome::Clean => format!("{} No errors found.", "✓".green()),
            ReportOutcome::Written { path, count } => format!(
                "{} {} error(s) found, written to '{}'",
                "✗".red(),
                count,
                path.display()
            ),
        }
    }
}

impl Default for ReportWriterService {
    fn default() -> Self {
        Self::new()
    }
}
