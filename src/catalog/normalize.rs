//! テキスト比較の基本関数
//!
//! - `normalize`: 小文字化 + 前後空白の除去（検索語とハックステイの両方に使う）
//! - `natural_cmp`: タイトル並び替え用の比較（大文字小文字・アクセントを無視、数字は数値順）

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 比較用にテキストを正規化する
///
/// `None` は空文字列として扱う。
pub fn normalize<'a>(text: impl Into<Option<&'a str>>) -> String {
    text.into().unwrap_or_default().trim().to_lowercase()
}

/// 自然順比較
///
/// 連続する ASCII 数字は数値として比較する（`item2` < `item10`）。
/// それ以外は基底文字に畳み込んだ文字単位で比較する（`É` と `e` は同順位）。
/// 文字の種類は 空白 < 記号 < 数字 < 文字 の順に並ぶ。
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare_chunks(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn compare_chunks(x: Chunk<'_>, y: Chunk<'_>) -> Ordering {
    match (x, y) {
        (Chunk::Digits(a), Chunk::Digits(b)) => compare_numeric(a, b),
        (Chunk::Text(a), Chunk::Text(b)) => compare_folded(a, b),
        (Chunk::Digits(_), Chunk::Text(t)) => DIGIT_RANK.cmp(&first_rank(t)),
        (Chunk::Text(t), Chunk::Digits(_)) => first_rank(t).cmp(&DIGIT_RANK),
    }
}

/// 桁数 → 辞書順で比較（先頭の 0 は無視）
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    fold(a)
        .map(|c| (rank(c), c))
        .cmp(fold(b).map(|c| (rank(c), c)))
}

/// 分解してダイアクリティカルマークを落とし、小文字化する
fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

const DIGIT_RANK: u8 = 2;

fn rank(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        DIGIT_RANK
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

/// 畳み込み後に空なら最小
fn first_rank(s: &str) -> u8 {
    fold(s).next().map_or(0, rank)
}

/// 数字列と非数字列に分割するイテレータ
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;

        Some(if digits {
            Chunk::Digits(head)
        } else {
            Chunk::Text(head)
        })
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
