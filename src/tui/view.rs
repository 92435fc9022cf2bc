//! カタログブラウザの描画

use super::browser::Model;
use crate::catalog::{CatalogView, CategoryFilter, LinkRecord, PageEntry};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs};

/// 画面を描画
pub fn draw(f: &mut Frame, model: &Model) {
    let view = model.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タイトル
            Constraint::Length(1), // カテゴリバー
            Constraint::Length(3), // 検索欄
            Constraint::Min(1),    // カード一覧
            Constraint::Length(1), // 件数
            Constraint::Length(1), // ページ送り
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    let title = Paragraph::new(model.config.title.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    draw_category_bar(f, model, chunks[1]);
    draw_search(f, model, chunks[2]);
    draw_cards(f, model, &view, chunks[3]);

    let summary = Paragraph::new(view.summary()).style(Style::default().fg(Color::DarkGray));
    f.render_widget(summary, chunks[4]);

    f.render_widget(Paragraph::new(pager_line(&view)), chunks[5]);

    let help = if model.search_focused {
        " type to search | Esc: clear/leave | Enter: done"
    } else {
        " Tab: category | /: search | left/right: page | Home/End: first/last | 1-9: page | q: quit"
    };
    let help = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[6]);
}

/// カテゴリバー（All + 各カテゴリのラベル）
fn draw_category_bar(f: &mut Frame, model: &Model, area: Rect) {
    let titles: Vec<String> = model
        .category_tabs()
        .iter()
        .map(|c| match c {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(id) => model.db.label_or_id(id).to_string(),
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(model.category_index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, area);
}

fn draw_search(f: &mut Frame, model: &Model, area: Rect) {
    let border_style = if model.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = if model.search_focused { "_" } else { "" };

    let search = Paragraph::new(format!("{}{}", model.state.search, cursor)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(search, area);
}

fn draw_cards(f: &mut Frame, model: &Model, view: &CatalogView<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", view.page_info()))
        .borders(Borders::ALL);

    if view.page.items.is_empty() {
        let message = if view.page.total_all == 0 {
            "No links available"
        } else {
            "No links matched"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .page
        .items
        .iter()
        .map(|link| card_item(model, link))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(model.selected));
    f.render_stateful_widget(list, area, &mut state);
}

/// カード 1 枚（タイトル + URL / 説明 / カテゴリ）
fn card_item<'a>(model: &'a Model, link: &'a LinkRecord) -> ListItem<'a> {
    let mut lines = vec![Line::from(vec![
        Span::styled(link.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(link.url.as_str(), Style::default().fg(Color::Cyan)),
    ])];

    if let Some(description) = link.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(format!("  {description}")));
    }

    if !link.categories.is_empty() {
        let pills: Vec<Span> = link
            .categories
            .iter()
            .map(|id| {
                Span::styled(
                    format!(" {} ", model.db.label_or_id(id)),
                    Style::default().fg(Color::Black).bg(Color::Blue),
                )
            })
            .flat_map(|pill| [Span::raw(" "), pill])
            .collect();
        lines.push(Line::from(pills));
    }

    ListItem::new(lines)
}

/// ページ送りの行（無効なコントロールと省略記号は暗く表示）
fn pager_line(view: &CatalogView<'_>) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let control = |symbol: &'static str, enabled: bool| {
        if enabled {
            Span::raw(symbol)
        } else {
            Span::styled(symbol, dim)
        }
    };
    let back = !view.page.at_first();
    let forward = !view.page.at_last();

    let mut spans = vec![control("«", back), Span::raw(" "), control("‹", back)];
    for entry in &view.window {
        spans.push(Span::raw(" "));
        spans.push(match entry {
            PageEntry::Page(n) if *n == view.page.page => Span::styled(
                format!("[{n}]"),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            PageEntry::Page(n) => Span::raw(n.to_string()),
            PageEntry::Ellipsis => Span::styled(entry.to_string(), dim),
        });
    }
    spans.extend([
        Span::raw(" "),
        control("›", forward),
        Span::raw(" "),
        control("»", forward),
    ]);

    Line::from(spans)
}
