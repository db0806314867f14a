// Core Domain
// カタログメタデータのモデル、設定、エラー型などの純粋なドメイン定義

pub mod catalog;
pub mod config;
pub mod error;
pub mod naming;
