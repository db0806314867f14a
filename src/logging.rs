// ログ初期化
//
// tracing-subscriber による構造化ログを標準エラー出力に設定します。
// 標準出力はレポート（--format json）用に空けておきます。

use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// 冗長度からログレベルを決定
///
/// `quiet` はエラーのみ、`verbose` は 0=INFO, 1=DEBUG, 2以上=TRACE。
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    }
}

/// ログを初期化
///
/// `RUST_LOG` が設定されている場合はそちらを優先します。
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let level = level_for(verbose, quiet);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
