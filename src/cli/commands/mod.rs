// コマンドハンドラー層
// 各CLIコマンドの実装

pub mod check;
pub mod init;

/// 違反が見つかった場合の終了コード
pub const EXIT_VIOLATIONS: i32 = 1;

/// 致命的エラー時の終了コード
pub const EXIT_FATAL: i32 = 2;

/// コマンドの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// 標準出力に表示する内容
    pub text: String,
    /// プロセスの終了コード
    pub exit_code: i32,
}

impl CommandOutput {
    /// 終了コード0の結果を作成
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: 0,
        }
    }
}
