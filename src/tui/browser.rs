//! カタログブラウザの Elm Architecture ベースの状態管理
//!
//! - `Model`: データ + クエリ状態 + フォーカス
//! - `Msg`: キー入力から変換されるメッセージ
//! - `update`: メッセージに応じて状態を更新
//!
//! 入力のたびにクエリエンジンを同期的に再実行する。

use crate::catalog::{self, CatalogView, CategoryFilter, LinkDb, Navigation, QueryState};
use crate::config::CatalogConfig;
use crossterm::event::KeyCode;

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 検索欄にフォーカス移動
    SearchFocus,
    /// 検索欄からフォーカス解除
    SearchUnfocus,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
    /// 次のカテゴリへ
    NextCategory,
    /// 前のカテゴリへ
    PrevCategory,
    /// ページ移動
    Navigate(Navigation),
    /// カード選択を上へ
    SelectPrev,
    /// カード選択を下へ
    SelectNext,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    pub db: LinkDb,
    pub config: CatalogConfig,
    pub state: QueryState,
    /// 検索欄にフォーカスしているか
    pub search_focused: bool,
    /// 現在ページ内の選択位置
    pub selected: usize,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    pub fn new(db: LinkDb, config: CatalogConfig) -> Self {
        Self {
            db,
            config,
            state: QueryState::default(),
            search_focused: false,
            selected: 0,
            should_quit: false,
        }
    }

    /// 現在の状態でクエリを実行
    pub fn view(&self) -> CatalogView<'_> {
        catalog::view(
            &self.db.links,
            &self.state,
            self.config.pager(),
            &self.config.window,
        )
    }

    /// カテゴリバーの並び（先頭は All）
    pub fn category_tabs(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                self.db
                    .categories
                    .iter()
                    .map(|c| CategoryFilter::Only(c.id.clone())),
            )
            .collect()
    }

    /// アクティブなカテゴリのカテゴリバー上の位置
    pub fn category_index(&self) -> usize {
        self.category_tabs()
            .iter()
            .position(|c| *c == self.state.category)
            .unwrap_or(0)
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.search_focused {
            // 検索欄にフォーカス中のキー処理
            match key {
                KeyCode::Esc if !self.state.search.is_empty() => Some(Msg::SearchClear),
                KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(Msg::SearchUnfocus),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                _ => None,
            }
        } else {
            match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Char('/') => Some(Msg::SearchFocus),
                KeyCode::Tab => Some(Msg::NextCategory),
                KeyCode::BackTab => Some(Msg::PrevCategory),
                KeyCode::Left => Some(Msg::Navigate(Navigation::Prev)),
                KeyCode::Right => Some(Msg::Navigate(Navigation::Next)),
                KeyCode::Home => Some(Msg::Navigate(Navigation::First)),
                KeyCode::End => Some(Msg::Navigate(Navigation::Last)),
                KeyCode::Up => Some(Msg::SelectPrev),
                KeyCode::Down => Some(Msg::SelectNext),
                KeyCode::Char(c @ '1'..='9') => c
                    .to_digit(10)
                    .map(|n| Msg::Navigate(Navigation::Page(n as usize))),
                _ => None,
            }
        }
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::SearchFocus => {
            model.search_focused = true;
        }
        Msg::SearchUnfocus => {
            model.search_focused = false;
        }
        Msg::SearchInput(c) => {
            let mut search = std::mem::take(&mut model.state.search);
            search.push(c);
            model.state.set_search(search);
            model.selected = 0;
        }
        Msg::SearchBackspace => {
            let mut search = std::mem::take(&mut model.state.search);
            search.pop();
            model.state.set_search(search);
            model.selected = 0;
        }
        Msg::SearchClear => {
            model.state.set_search(String::new());
            model.selected = 0;
        }
        Msg::NextCategory => {
            let tabs = model.category_tabs();
            let next = (model.category_index() + 1) % tabs.len();
            model.state.select_category(tabs[next].clone());
            model.selected = 0;
        }
        Msg::PrevCategory => {
            let tabs = model.category_tabs();
            let prev = (model.category_index() + tabs.len() - 1) % tabs.len();
            model.state.select_category(tabs[prev].clone());
            model.selected = 0;
        }
        Msg::Navigate(nav) => {
            let (current, total_pages) = {
                let view = model.view();
                (view.page.page, view.page.total_pages)
            };
            model.state.go_to_page(nav.target(current, total_pages));
            model.selected = 0;
        }
        Msg::SelectPrev => {
            model.selected = model.selected.saturating_sub(1);
        }
        Msg::SelectNext => {
            model.selected += 1;
        }
    }

    reconcile(model);
}

/// 要求ページと選択位置を実際の結果に合わせる
fn reconcile(model: &mut Model) {
    let (page, shown) = {
        let view = model.view();
        (view.page.page, view.page.shown())
    };
    model.state.page = page;
    model.selected = model.selected.min(shown.saturating_sub(1));
}

#[cfg(test)]
#[path = "browser_test.rs"]
mod tests;
