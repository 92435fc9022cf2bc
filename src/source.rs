//! リンクデータの取得元
//!
//! ## 使い方
//!
//! ```ignore
//! let source = parse_source("assets/json/links.json", &HttpConfig::default());
//! let db = source.load().await?;
//! ```

mod file_source;
mod http_source;

pub use file_source::FileSource;
pub use http_source::HttpSource;

use crate::catalog::LinkDb;
use crate::config::HttpConfig;
use crate::error::Result;
use std::future::Future;
use std::pin::Pin;

/// リンクデータ取得元の抽象化
///
/// ファイル / HTTP の各取得元がこの trait を実装する。
pub trait LinkSource: Send + Sync {
    /// 取得元の表示名（ログとエラー表示用）
    fn describe(&self) -> String;

    /// links.json を読み込む
    fn load(&self) -> Pin<Box<dyn Future<Output = Result<LinkDb>> + Send + '_>>;
}

/// `http://` / `https://` で始まれば HTTP、それ以外はファイルパス
pub fn parse_source(input: &str, http: &HttpConfig) -> Box<dyn LinkSource> {
    let input = input.trim();
    if is_url(input) {
        Box::new(HttpSource::new(input, http.clone()))
    } else {
        Box::new(FileSource::new(input))
    }
}

fn is_url(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// JSON バイト列を LinkDb に変換
pub fn parse_links(bytes: &[u8]) -> Result<LinkDb> {
    let db: LinkDb = serde_json::from_slice(bytes)?;
    tracing::debug!(
        categories = db.categories.len(),
        links = db.links.len(),
        "links parsed"
    );
    Ok(db)
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
