// 命名ポリシー
//
// アプリケーション名と関連パス、既定値の単一ソースを提供します。

/// 現行アプリケーション名
pub const APP_NAME: &str = "schemalint";

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".schemalint.yaml";

/// 既定のレポート出力ファイル
pub const DEFAULT_OUTPUT_FILE: &str = "errors.json";

/// 既定の検査対象スキーマ
pub const DEFAULT_SCHEMA: &str = "public";

/// 既定の環境名
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// 主キー制約名に要求されるプレフィックス
pub const PRIMARY_KEY_PREFIX: &str = "pk_";

/// 外部キー制約名に要求されるプレフィックス
pub const FOREIGN_KEY_PREFIX: &str = "fk_";
