//! TUI (Terminal User Interface) ブラウザ
//!
//! ratatui/crossterm を使用したリンクカタログの対話的な閲覧画面。
//!
//! ## モジュール構成
//!
//! - `browser`: Model / Msg / update（状態と更新）
//! - `view`: 画面描画

mod browser;
mod view;

pub use browser::Model;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};

/// TUI を実行
pub fn run(model: &mut Model) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    let result = stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| event_loop(model));

    // ターミナルを復元（どの段階で失敗しても両方戻す）
    first_error([result, restore_terminal()])
}

fn restore_terminal() -> io::Result<()> {
    first_error([
        terminal::disable_raw_mode(),
        stdout().execute(LeaveAlternateScreen).map(drop),
    ])
}

/// 評価済みの結果のうち最初のエラーを返す
fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results
        .into_iter()
        .find(Result::is_err)
        .unwrap_or(Ok(()))
}

fn event_loop(model: &mut Model) -> io::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // メインループ
    while !model.should_quit {
        terminal.draw(|f| view::draw(f, model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = model.key_to_msg(key.code) {
                    browser::update(model, msg);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tui_test.rs"]
mod tests;
