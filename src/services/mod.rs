// Services Layer
// ドメインロジックを実行するサービス層

pub mod config_loader;
pub mod database_config_resolver;
pub mod report_writer;
pub mod schema_linter;
