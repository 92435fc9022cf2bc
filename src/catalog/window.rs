//! ページ番号ウィンドウ
//!
//! ページ送り UI に並べるページ番号の一覧を生成する。
//! ページ数が多い場合は省略記号（`…`）を挟んで表示数を抑える。
//!
//! ## ウィンドウの形（既定値の場合）
//!
//! - 9 ページ以下: `1..=total`
//! - 先頭付近（current <= 5）: `1..=9 … total`
//! - 末尾付近（current >= total - 4）: `1 … (total-7)..=total`
//! - 中間: `1 … (current-3)..=(current+3) … total`

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 省略記号の表示文字
pub const ELLIPSIS: &str = "…";

/// ウィンドウの閾値
///
/// 既定値は従来の UI と同じ並びを再現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// 省略なしで並べる最大ページ数
    pub max_visible: usize,
    /// このページ以下なら「先頭付近」
    pub near_start: usize,
    /// 末尾からこのページ数以内なら「末尾付近」
    pub near_end: usize,
    /// 中間表示で現在ページの前後に並べる数
    pub middle_radius: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_visible: 9,
            near_start: 5,
            near_end: 4,
            middle_radius: 3,
        }
    }
}

/// ウィンドウの 1 要素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(usize),
    Ellipsis,
}

impl PageEntry {
    pub fn page(self) -> Option<usize> {
        match self {
            PageEntry::Page(n) => Some(n),
            PageEntry::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Page(n) => write!(f, "{n}"),
            PageEntry::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

/// ページ番号は数値、省略記号は文字列としてシリアライズ
impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageEntry::Page(n) => serializer.serialize_u64(*n as u64),
            PageEntry::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

impl WindowConfig {
    /// 閾値の整合性を確認
    ///
    /// どの分岐でも現在ページを含み、ページ番号が `max_visible + 1` 個を超えないこと。
    pub fn validate(&self) -> Result<(), String> {
        if self.max_visible < 2 {
            return Err("window.max_visible must be at least 2".to_string());
        }
        if self.near_start > self.max_visible {
            return Err("window.near_start must not exceed window.max_visible".to_string());
        }
        if self.near_end + 2 > self.max_visible {
            return Err("window.near_end must be at most window.max_visible - 2".to_string());
        }
        if 2 * self.middle_radius + 2 > self.max_visible {
            return Err(
                "window.middle_radius must satisfy 2 * middle_radius + 2 <= max_visible".to_string(),
            );
        }
        Ok(())
    }
}

/// ページ番号ウィンドウを生成
///
/// 閾値が不整合でも現在ページは必ず含まれる。
pub fn page_window(total_pages: usize, current: usize, config: &WindowConfig) -> Vec<PageEntry> {
    let total = total_pages.max(1);
    let current = current.clamp(1, total);
    let max_visible = config.max_visible.max(1);

    if total <= max_visible {
        return (1..=total).map(PageEntry::Page).collect();
    }

    let mut entries = Vec::with_capacity(max_visible + 4);

    if current <= config.near_start {
        let end = max_visible.max(current).min(total - 1);
        entries.extend((1..=end).map(PageEntry::Page));
        entries.push(PageEntry::Ellipsis);
        entries.push(PageEntry::Page(total));
    } else if current + config.near_end >= total {
        let start = (total + 2).saturating_sub(max_visible).min(current).max(2);
        entries.push(PageEntry::Page(1));
        entries.push(PageEntry::Ellipsis);
        entries.extend((start..=total).map(PageEntry::Page));
    } else {
        let start = current.saturating_sub(config.middle_radius).max(2);
        let end = (current + config.middle_radius).min(total - 1);
        entries.push(PageEntry::Page(1));
        entries.push(PageEntry::Ellipsis);
        entries.extend((start..=end).map(PageEntry::Page));
        entries.push(PageEntry::Ellipsis);
        entries.push(PageEntry::Page(total));
    }

    entries
}

#[cfg(test)]
#[path = "window_test.rs"]
mod tests;
