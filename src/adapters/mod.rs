// Adapters
// データベースへのアクセスを抽象化

pub mod catalog_reader;
pub mod connection_string;
pub mod database;
