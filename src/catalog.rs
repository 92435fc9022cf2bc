//! リンクカタログのクエリエンジン
//!
//! リンク一覧とクエリ状態（カテゴリ・検索語・ページ）から、
//! 表示するページとページ番号ウィンドウを求める純粋なロジック。
//!
//! ## モジュール構成
//!
//! - `model`: データモデル（LinkRecord, Category, LinkDb, QueryState）
//! - `normalize`: 正規化と自然順比較
//! - `predicate`: カテゴリ / 検索語の述語
//! - `query`: 絞り込み + ソート
//! - `pager`: キャップ + ページ切り出し + クランプ
//! - `window`: ページ番号ウィンドウ

pub mod model;
pub mod normalize;
pub mod pager;
pub mod predicate;
pub mod query;
pub mod window;

pub use model::{Category, CategoryFilter, LinkDb, LinkRecord, QueryState};
pub use pager::{paginate, Navigation, PagerConfig, ResultPage};
pub use query::{filter_and_sort, query, QueryResult};
pub use window::{page_window, PageEntry, WindowConfig};

use serde::Serialize;

/// 1 回の描画に必要なものをまとめたビュー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView<'a> {
    #[serde(flatten)]
    pub page: ResultPage<'a>,
    pub window: Vec<PageEntry>,
}

impl CatalogView<'_> {
    /// 「{shown} shown • {matched} matched • {total} total」
    pub fn summary(&self) -> String {
        format!(
            "{} shown • {} matched • {} total",
            self.page.shown(),
            self.page.total_matched,
            self.page.total_all
        )
    }

    /// 「Page {page} / {total_pages}」
    pub fn page_info(&self) -> String {
        format!("Page {} / {}", self.page.page, self.page.total_pages)
    }
}

/// 絞り込み → ページング → ウィンドウ生成を一度に行う
pub fn view<'a>(
    links: &'a [LinkRecord],
    state: &QueryState,
    pager: PagerConfig,
    window: &WindowConfig,
) -> CatalogView<'a> {
    let result = query(links, &state.category, &state.search);
    let page = paginate(&result, state.page, pager);
    let window = page_window(page.total_pages, page.page, window);
    CatalogView { page, window }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

#[cfg(test)]
#[path = "catalog_proptests.rs"]
mod proptests;
