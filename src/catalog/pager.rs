//! ページング
//!
//! 絞り込み結果を `max_render` 件で打ち切り（キャップ）、
//! `page_size` 件ずつのページに分割する。
//! 範囲外のページ要求はエラーにせず、`[1, total_pages]` にクランプする。

use super::model::LinkRecord;
use super::query::QueryResult;
use serde::{Deserialize, Serialize};

/// 1 ページあたりのカード数
pub const DEFAULT_PAGE_SIZE: usize = 24;
/// 描画する最大件数
pub const DEFAULT_MAX_RENDER: usize = 100;

/// ページング設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    pub page_size: usize,
    pub max_render: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_render: DEFAULT_MAX_RENDER,
        }
    }
}

/// 現在ページの内容と付随情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPage<'a> {
    /// 現在ページのリンク
    pub items: Vec<&'a LinkRecord>,
    /// 絞り込み後の件数（キャップ前）
    pub total_matched: usize,
    /// 絞り込み前の総件数
    pub total_all: usize,
    /// キャップ後の件数（ページングで到達できる件数）
    pub total_rendered: usize,
    /// 総ページ数（0 件でも 1）
    pub total_pages: usize,
    /// クランプ済みの現在ページ
    pub page: usize,
}

impl ResultPage<'_> {
    /// 現在ページの表示件数
    pub fn shown(&self) -> usize {
        self.items.len()
    }

    /// 先頭ページか（first/prev を無効化）
    pub fn at_first(&self) -> bool {
        self.page <= 1
    }

    /// 最終ページか（next/last を無効化）
    pub fn at_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// キャップにより到達できないリンクがあるか
    pub fn is_capped(&self) -> bool {
        self.total_matched > self.total_rendered
    }
}

/// 件数とページサイズから総ページ数を求める（最低 1）
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// ページ番号を `[1, total_pages]` に収める
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.max(1).min(total_pages.max(1))
}

/// 絞り込み結果をキャップしてページを切り出す
pub fn paginate<'a>(
    result: &QueryResult<'a>,
    requested_page: usize,
    config: PagerConfig,
) -> ResultPage<'a> {
    let page_size = config.page_size.max(1);
    let capped = &result.records[..result.records.len().min(config.max_render)];

    let total_pages = page_count(capped.len(), page_size);
    let page = clamp_page(requested_page, total_pages);

    let start = ((page - 1) * page_size).min(capped.len());
    let end = (start + page_size).min(capped.len());

    ResultPage {
        items: capped[start..end].to_vec(),
        total_matched: result.total_matched(),
        total_all: result.total_all,
        total_rendered: capped.len(),
        total_pages,
        page,
    }
}

/// ページ移動操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    First,
    Prev,
    Next,
    Last,
    Page(usize),
}

impl Navigation {
    /// 移動先のページ番号
    ///
    /// `Next` / `Page` は範囲外の値を返しうる。次回の `paginate` でクランプされる。
    pub fn target(self, current: usize, total_pages: usize) -> usize {
        match self {
            Navigation::First => 1,
            Navigation::Prev => current.saturating_sub(1).max(1),
            Navigation::Next => current.saturating_add(1),
            Navigation::Last => total_pages.max(1),
            Navigation::Page(n) => n,
        }
    }
}

#[cfg(test)]
#[path = "pager_test.rs"]
mod tests;
