//! 共通HTTPヘルパー

use crate::error::{CatalogError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// リトライ間隔の基準値
const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

/// プログレス表示付きで本文を取得
///
/// キャッシュは使わない（`Cache-Control: no-store`）。
/// 2xx 以外は `HttpStatus` エラー。
pub async fn fetch_with_progress(client: &Client, url: &str) -> Result<Vec<u8>> {
    let mut response = client
        .get(url)
        .header(CACHE_CONTROL, "no-store")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(CatalogError::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let total_size = response.content_length().unwrap_or(0);

    let pb = if total_size > 0 {
        let pb = ProgressBar::new(total_size);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} Loading links...") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let mut body = Vec::with_capacity(total_size as usize);
    let read = async {
        while let Some(chunk) = response.chunk().await? {
            pb.inc(chunk.len() as u64);
            body.extend_from_slice(&chunk);
        }
        Ok::<_, CatalogError>(())
    }
    .await;
    pb.finish_and_clear();
    read?;

    Ok(body)
}

/// リトライ可能なエラーの間だけ `attempts` 回まで再試行する
pub async fn with_retry<F, Fut, T>(mut op: F, attempts: u32) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts && e.is_retryable() => {
                tracing::warn!(attempt, error = %e, "request failed, retrying");
                tokio::time::sleep(RETRY_BASE_DELAY * attempt).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
