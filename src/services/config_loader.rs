// 設定ファイル読み込みサービス
//
// core::config の純粋性を保つため、ファイルI/Oはこのサービスに集約する。

use crate::core::config::Config;
use anyhow::{Context, Result};
use std::path::Path;

/// 設定ファイル読み込みサービス
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// YAMLファイルから設定を読み込んで検証する
    pub fn from_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = content.parse()?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// 設定をYAMLファイルに書き出す
    pub fn write_file(path: &Path, config: &Config) -> Result<()> {
        let yaml = serde_saphyr::to_string(config).with_context(|| "Failed to serialize config")?;
        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path))
    }
}
