//! クエリパイプライン
//!
//! 絞り込み → タイトル順ソートまでを行う。
//! 件数の上限（キャップ）とページ分割は `pager` の責務。

use super::model::{CategoryFilter, LinkRecord};
use super::normalize::{natural_cmp, normalize};
use super::predicate::matches;

/// 絞り込み結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    /// 絞り込み・ソート済みのリンク（キャップ前）
    pub records: Vec<&'a LinkRecord>,
    /// 絞り込み前の総件数
    pub total_all: usize,
}

impl QueryResult<'_> {
    /// 絞り込み後の件数（キャップ前）
    pub fn total_matched(&self) -> usize {
        self.records.len()
    }
}

/// カテゴリと検索語で絞り込み、タイトルの自然順に並べる
///
/// ソートは安定ソート。タイトルが同順位のリンクは元の並びを保つ。
pub fn filter_and_sort<'a>(
    links: &'a [LinkRecord],
    category: &CategoryFilter,
    search_text: &str,
) -> Vec<&'a LinkRecord> {
    let query = normalize(search_text);

    let mut filtered: Vec<&LinkRecord> = links
        .iter()
        .filter(|l| matches(l, category, &query))
        .collect();

    filtered.sort_by(|a, b| natural_cmp(&a.title, &b.title));
    filtered
}

/// `filter_and_sort` に総件数を添えて返す
pub fn query<'a>(
    links: &'a [LinkRecord],
    category: &CategoryFilter,
    search_text: &str,
) -> QueryResult<'a> {
    QueryResult {
        records: filter_and_sort(links, category, search_text),
        total_all: links.len(),
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
