use thiserror::Error;

/// カタログ統一エラー型
///
/// クエリエンジン（`catalog`）自体は失敗しない。
/// ここに並ぶのはデータ取得・設定・TUI といった周辺処理のエラーのみ。
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to load {url}: {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("TUI error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// リトライ可能なエラーかどうか
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Network(_) => true,
            CatalogError::HttpStatus { status, .. } => {
                // 5xx エラーはリトライ可能
                *status >= 500 && *status < 600
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
