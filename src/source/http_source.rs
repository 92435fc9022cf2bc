use super::{parse_links, LinkSource};
use crate::catalog::LinkDb;
use crate::config::HttpConfig;
use crate::error::Result;
use crate::http::{fetch_with_progress, with_retry};
use std::future::Future;
use std::pin::Pin;

/// HTTP(S) で公開された links.json
pub struct HttpSource {
    url: String,
    config: HttpConfig,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, config: HttpConfig) -> Self {
        Self {
            url: url.into(),
            config,
        }
    }
}

impl LinkSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn load(&self) -> Pin<Box<dyn Future<Output = Result<LinkDb>> + Send + '_>> {
        Box::pin(async move {
            tracing::debug!(url = %self.url, "fetching links");
            let client = self.config.build_client();
            let bytes = with_retry(
                || fetch_with_progress(&client, &self.url),
                self.config.attempts,
            )
            .await?;
            parse_links(&bytes)
        })
    }
}
