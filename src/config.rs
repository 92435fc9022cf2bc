//! 設定
//!
//! 優先順位: 既定値 < 設定ファイル（TOML） < 環境変数 < コマンドライン引数
//!
//! ```toml
//! title = "Rabbit Hole"
//! data = "assets/json/links.json"
//! page_size = 24
//! max_render = 100
//!
//! [window]
//! max_visible = 9
//! ```

use crate::catalog::{PagerConfig, WindowConfig};
use crate::env::{EnvVar, DATA_VAR, MAX_RENDER_VAR, PAGE_SIZE_VAR};
use crate::error::{CatalogError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 既定のデータ取得元
pub const DEFAULT_DATA: &str = "assets/json/links.json";
/// カレントディレクトリで自動的に読む設定ファイル
pub const DEFAULT_CONFIG_FILE: &str = "rabbithole.toml";
/// 既定のページタイトル
pub const DEFAULT_TITLE: &str = "Rabbit Hole";

/// カタログ設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// ページタイトル
    pub title: String,
    /// links.json のパスまたは URL
    pub data: String,
    pub page_size: usize,
    pub max_render: usize,
    pub window: WindowConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let pager = PagerConfig::default();
        Self {
            title: DEFAULT_TITLE.to_string(),
            data: DEFAULT_DATA.to_string(),
            page_size: pager.page_size,
            max_render: pager.max_render,
            window: WindowConfig::default(),
        }
    }
}

/// コマンドライン引数による上書き
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub data: Option<String>,
    pub page_size: Option<usize>,
    pub max_render: Option<usize>,
}

impl CatalogConfig {
    /// 全レイヤーを重ねて設定を確定する
    ///
    /// `config_path` が指定されていればそのファイルを必須とし、
    /// 未指定ならカレントディレクトリの `rabbithole.toml` があれば読む。
    pub fn resolve(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::load_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_env()?;
        config.apply_overrides(overrides);
        config.validate()?;

        tracing::debug!(
            data = %config.data,
            page_size = config.page_size,
            max_render = config.max_render,
            "config resolved"
        );
        Ok(config)
    }

    /// TOML ファイルを読み込む
    pub fn load_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading config file");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 環境変数で上書き
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(data) = EnvVar::get(DATA_VAR) {
            self.data = data;
        }
        if let Some(page_size) =
            EnvVar::get_parsed(PAGE_SIZE_VAR).map_err(CatalogError::InvalidConfig)?
        {
            self.page_size = page_size;
        }
        if let Some(max_render) =
            EnvVar::get_parsed(MAX_RENDER_VAR).map_err(CatalogError::InvalidConfig)?
        {
            self.max_render = max_render;
        }
        Ok(())
    }

    /// コマンドライン引数で上書き
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(data) = &overrides.data {
            self.data = data.clone();
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if let Some(max_render) = overrides.max_render {
            self.max_render = max_render;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.max_render == 0 {
            return Err(CatalogError::InvalidConfig(
                "max_render must be at least 1".to_string(),
            ));
        }
        self.window.validate().map_err(CatalogError::InvalidConfig)?;
        if self.data.trim().is_empty() {
            return Err(CatalogError::InvalidConfig(
                "data must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn pager(&self) -> PagerConfig {
        PagerConfig {
            page_size: self.page_size,
            max_render: self.max_render,
        }
    }
}

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
    /// 5xx / 通信エラー時の試行回数
    pub attempts: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "rabbithole-cli".to_string(),
            attempts: 3,
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
