//! カタログのデータモデル
//!
//! links.json の構造（`meta` / `categories` / `links`）と、
//! クエリエンジンに渡すセッション状態（`QueryState`）を定義する。
//!
//! 読み込みは寛容に行う:
//! - `categories` / `links` が欠落・配列以外なら空として扱う
//! - オブジェクトとして解釈できないエントリはスキップ（warn ログ）
//! - リンクの任意フィールドは欠落・`null` なら空値

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// 「カテゴリで絞り込まない」ことを表す予約済み ID
pub const ALL_CATEGORIES: &str = "all";

/// カテゴリ定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

/// リンク 1 件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// 所属カテゴリ ID（集合として扱う。順序は表示用にのみ保持）
    #[serde(default, deserialize_with = "lenient_ids")]
    pub categories: Vec<String>,
}

impl LinkRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// 指定カテゴリに属するか
    pub fn has_category(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c == id)
    }
}

/// links.json のルート構造
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLinkDb")]
pub struct LinkDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    pub categories: Vec<Category>,
    pub links: Vec<LinkRecord>,
}

impl LinkDb {
    pub fn new(categories: Vec<Category>, links: Vec<LinkRecord>) -> Self {
        Self {
            meta: None,
            categories,
            links,
        }
    }

    /// カテゴリ ID から表示ラベルを取得
    pub fn category_label(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.label.as_str())
    }

    /// ラベルが無ければ ID をそのまま返す
    pub fn label_or_id<'a>(&'a self, id: &'a str) -> &'a str {
        self.category_label(id).unwrap_or(id)
    }

    /// カテゴリごとのリンク件数（`categories` の定義順）
    pub fn category_counts(&self) -> Vec<(&Category, usize)> {
        self.categories
            .iter()
            .map(|c| {
                let count = self.links.iter().filter(|l| l.has_category(&c.id)).count();
                (c, count)
            })
            .collect()
    }
}

/// デシリアライズ用の生の構造
#[derive(Deserialize)]
struct RawLinkDb {
    #[serde(default)]
    meta: Option<Value>,
    #[serde(default)]
    categories: Option<Value>,
    #[serde(default)]
    links: Option<Value>,
}

impl From<RawLinkDb> for LinkDb {
    fn from(raw: RawLinkDb) -> Self {
        Self {
            meta: raw.meta.filter(|m| !m.is_null()),
            categories: lenient_seq(raw.categories, "categories"),
            links: lenient_seq(raw.links, "links"),
        }
    }
}

/// 配列を要素ごとに解釈し、失敗した要素はスキップする
fn lenient_seq<T: DeserializeOwned>(value: Option<Value>, field: &str) -> Vec<T> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Vec::new(),
        Some(other) => {
            tracing::warn!(field, kind = value_kind(&other), "expected an array, using empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(field, index, error = %e, "skipping malformed entry");
                None
            }
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(text_of(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(text_of(Value::deserialize(deserializer)?))
}

fn lenient_ids<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().filter_map(text_of).collect()),
        _ => Ok(Vec::new()),
    }
}

// ============================================================================
// CategoryFilter
// ============================================================================

/// アクティブなカテゴリ
///
/// テキスト表現では `"all"` が `All` に対応する。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(id: &str) -> Self {
        if id == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id.to_string())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(id) => id,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

// ============================================================================
// QueryState
// ============================================================================

/// UI 側が保持するセッション状態
///
/// カテゴリや検索語が変わったときは 1 ページ目に戻る。
/// `page` は範囲外でもよく、ページング時にクランプされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub category: CategoryFilter,
    pub search: String,
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new(category: CategoryFilter, search: impl Into<String>, page: usize) -> Self {
        Self {
            category,
            search: search.into(),
            page,
        }
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
