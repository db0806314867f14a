// Schemalintライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメイン（カタログモデル、設定、エラー型）
// - adapters: データベース接続とカタログ取得
// - services: 検査ルール、レポート出力、設定読み込み
// - logging: 構造化ログの初期化

pub mod adapters;
pub mod cli;
pub mod core;
pub mod logging;
pub mod services;
