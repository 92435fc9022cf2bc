use super::{parse_links, LinkSource};
use crate::catalog::LinkDb;
use crate::error::Result;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

/// ローカルファイルの links.json
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LinkSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Pin<Box<dyn Future<Output = Result<LinkDb>> + Send + '_>> {
        Box::pin(async move {
            tracing::debug!(path = %self.path.display(), "reading links file");
            let bytes = tokio::fs::read(&self.path).await?;
            parse_links(&bytes)
        })
    }
}
