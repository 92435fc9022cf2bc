//! ターミナル出力の整形
//!
//! ページ送りの行（`« ‹ 1 [2] 3 … 20 › »`）と件数サマリを組み立てる。

use crate::catalog::{CatalogView, PageEntry};
use owo_colors::OwoColorize;

/// ページ送りコントロールの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerControls {
    /// first / prev が押せるか
    pub back_enabled: bool,
    /// next / last が押せるか
    pub forward_enabled: bool,
    pub entries: Vec<PageEntry>,
    pub current: usize,
}

impl PagerControls {
    pub fn from_view(view: &CatalogView<'_>) -> Self {
        Self {
            back_enabled: !view.page.at_first(),
            forward_enabled: !view.page.at_last(),
            entries: view.window.clone(),
            current: view.page.page,
        }
    }

    /// 装飾なしの 1 行表現（現在ページは `[n]`）
    pub fn plain(&self) -> String {
        let mut parts: Vec<String> = vec!["«".to_string(), "‹".to_string()];
        parts.extend(self.entries.iter().map(|e| match e {
            PageEntry::Page(n) if *n == self.current => format!("[{n}]"),
            other => other.to_string(),
        }));
        parts.push("›".to_string());
        parts.push("»".to_string());
        parts.join(" ")
    }

    /// 色付きの 1 行表現（無効なコントロールは暗く表示）
    pub fn colored(&self) -> String {
        let control = |symbol: &str, enabled: bool| {
            if enabled {
                symbol.bold().to_string()
            } else {
                symbol.dimmed().to_string()
            }
        };

        let mut parts = vec![
            control("«", self.back_enabled),
            control("‹", self.back_enabled),
        ];
        parts.extend(self.entries.iter().map(|e| match e {
            PageEntry::Page(n) if *n == self.current => format!("[{n}]").green().bold().to_string(),
            PageEntry::Page(n) => n.to_string(),
            PageEntry::Ellipsis => e.to_string().dimmed().to_string(),
        }));
        parts.push(control("›", self.forward_enabled));
        parts.push(control("»", self.forward_enabled));
        parts.join(" ")
    }
}

/// 件数サマリ（キャップ時は到達可能な件数を添える）
pub fn summary_line(view: &CatalogView<'_>, color: bool) -> String {
    let mut line = view.summary();
    if view.page.is_capped() {
        line.push_str(&format!(" (showing first {})", view.page.total_rendered));
    }
    if color {
        line.dimmed().to_string()
    } else {
        line
    }
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
