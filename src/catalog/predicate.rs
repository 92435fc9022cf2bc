//! 絞り込み条件
//!
//! カテゴリ一致と検索語一致の 2 つの述語。どちらも純粋関数で、AND で合成する。

use super::model::{CategoryFilter, LinkRecord};
use super::normalize::normalize;

/// カテゴリ条件に一致するか
///
/// - `All` なら常に一致（`categories` が空のリンクも含む）
/// - それ以外はリンクの `categories` に ID が含まれるときのみ一致
pub fn matches_category(link: &LinkRecord, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Only(id) => link.has_category(id),
    }
}

/// 検索語に一致するか
///
/// `normalized_query` は `normalize` 済みであること。空なら常に一致。
/// タイトルと説明文を連結して正規化した文字列に対する部分一致で判定する。
pub fn matches_search(link: &LinkRecord, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }

    let haystack = format!(
        "{} {}",
        link.title,
        link.description.as_deref().unwrap_or_default()
    );
    normalize(haystack.as_str()).contains(normalized_query)
}

/// 両方の条件に一致するか
pub fn matches(link: &LinkRecord, category: &CategoryFilter, normalized_query: &str) -> bool {
    matches_category(link, category) && matches_search(link, normalized_query)
}

#[cfg(test)]
#[path = "predicate_test.rs"]
mod tests;
