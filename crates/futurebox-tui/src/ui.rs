//! UI rendering.
//!
//! All layout and drawing for the four pages, the detail modal, and the
//! toast overlay. Rendering reads the app state and never mutates it,
//! except for ratatui's stateful list cursor.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table,
    Tabs, Wrap,
};
use ratatui::Frame;

use futurebox_core::selection::MAX_SELECTED;
use futurebox_core::types::Capsule;

use crate::app::{App, FormField, Page, PAGE_SIZE};
use crate::notify::ToastLevel;

const GRID_COLS: usize = 4;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // tabs
            Constraint::Min(8),    // page content
            Constraint::Length(3), // action/status bar
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    match app.page {
        Page::Capsules => render_capsule_grid(frame, app, chunks[1]),
        Page::Leaderboard => render_leaderboard(frame, app, chunks[1]),
        Page::Gallery => render_gallery(frame, app, chunks[1]),
        Page::Submit => render_submit_form(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
    render_key_hints(frame, app, chunks[3]);

    if let Some(capsule) = &app.modal {
        render_modal(frame, app, capsule);
    }
    render_toasts(frame, app);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .map(|page| Line::from(page.title()))
        .collect();
    let selected = Page::ALL.iter().position(|p| *p == app.page).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" FutureBox ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(tabs, area);
}

fn render_capsule_grid(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = banner_text(app.capsules_loading, &app.capsules_error, &app.capsules) {
        frame.render_widget(centered_message(&message), area);
        return;
    }

    let cards = app.current_cards();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); GRID_COLS])
            .split(*row_area);
        for (col_index, col_area) in cols.iter().enumerate() {
            let index = row_index * GRID_COLS + col_index;
            if let Some(capsule) = cards.get(index) {
                render_card(frame, app, capsule, index, *col_area);
            }
        }
    }
}

fn render_card(frame: &mut Frame, app: &App, capsule: &Capsule, index: usize, area: Rect) {
    let selected = app.selection.contains(&capsule.id);
    let under_cursor = index == app.cursor;

    let border_style = if under_cursor {
        Style::default().fg(Color::Yellow)
    } else if selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let marker = if selected { "●" } else { "○" };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(
            truncate(&capsule.name, area.width.saturating_sub(6) as usize),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];
    if capsule.has_text() {
        lines.push(Line::from(truncate(
            &capsule.text_content,
            (area.width.saturating_sub(4) as usize) * 2,
        )));
    }
    if capsule.has_image() {
        lines.push(Line::from(Span::styled(
            "[image]",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("Votes: {}", capsule.votes_num),
        Style::default().fg(Color::Cyan),
    )));

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    frame.render_widget(card, area);
}

fn render_leaderboard(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = banner_text(app.capsules_loading, &app.capsules_error, &app.capsules) {
        frame.render_widget(centered_message(&message), area);
        return;
    }

    let ranked = app.leaderboard();
    let rows: Vec<Row> = ranked
        .iter()
        .enumerate()
        .map(|(index, capsule)| {
            let rank_style = match index {
                0 => Style::default().fg(Color::Yellow),
                1 | 2 => Style::default().fg(Color::LightYellow),
                _ => Style::default(),
            };
            Row::new(vec![
                Cell::from(format!("{}", index + 1)).style(rank_style),
                Cell::from(capsule.name.clone()),
                Cell::from(truncate_address(&capsule.owner_address)),
                Cell::from(capsule.votes_num.clone())
                    .style(Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Rank", "Title", "Owner", "Votes"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(" Vote Leaderboard "));
    frame.render_widget(table, area);
}

fn render_gallery(frame: &mut Frame, app: &App, area: Rect) {
    let block = || Block::default().borders(Borders::ALL).title(" My NFTs ");

    if app.nfts_loading {
        frame.render_widget(centered_message("Loading...").block(block()), area);
        return;
    }
    if let Some(error) = &app.nfts_error {
        frame.render_widget(
            centered_message(&format!("Error: {error}"))
                .style(Style::default().fg(Color::Red))
                .block(block()),
            area,
        );
        return;
    }
    if app.nfts.is_empty() {
        frame.render_widget(
            centered_message("No NFTs yet. Deposit capsule content to earn one.").block(block()),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .nfts
        .iter()
        .map(|nft| {
            let mut lines = vec![Line::from(Span::styled(
                nft.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            if nft.has_text() {
                lines.push(Line::from(truncate(&nft.text_content, 70)));
            }
            if nft.has_image() {
                lines.push(Line::from(Span::styled(
                    truncate(&nft.image_url, 70),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(Span::styled(
                nft.id.short(),
                Style::default().fg(Color::DarkGray),
            )));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ")
        .block(block());
    let mut state = ListState::default().with_selected(Some(app.gallery_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_submit_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(5),    // text
            Constraint::Length(3), // image url
            Constraint::Length(3), // checklist
        ])
        .split(area);

    render_input(frame, app, chunks[0], " Title ", &app.form.title, FormField::Title);
    render_input(frame, app, chunks[1], " Text ", &app.form.text, FormField::Text);
    render_input(frame, app, chunks[2], " Image URL ", &app.form.image, FormField::Image);

    let check = |ok: bool| if ok { "✓" } else { "○" };
    let checklist = Line::from(vec![
        Span::styled(
            format!("{} text", check(!app.form.text.trim().is_empty())),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} image url", check(!app.form.image.trim().is_empty())),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled(
            if app.submitting { "Uploading..." } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(checklist).block(Block::default().borders(Borders::ALL)),
        chunks[3],
    );
}

fn render_input(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    value: &str,
    field: FormField,
) {
    let focused = app.form.focus == Some(field);
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let shown = if focused {
        format!("{value}▏")
    } else {
        value.to_string()
    };
    let input = Paragraph::new(shown).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(style),
    );
    frame.render_widget(input, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let account = app
        .account
        .as_ref()
        .map_or_else(|| "not connected".to_string(), |addr| addr.short());

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.config.network),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw("│ "),
        Span::raw(format!("account: {account} ")),
    ];

    if app.page == Page::Capsules {
        spans.push(Span::raw("│ "));
        spans.push(Span::raw(format!(
            "page {}/{} ",
            app.grid_page,
            app.total_pages()
        )));
        spans.push(Span::raw("│ "));
        let deposit_label = if app.depositing {
            "Depositing...".to_string()
        } else {
            format!("Deposit ({}/{} selected)", app.selection.len(), MAX_SELECTED)
        };
        let deposit_style = if app.vote_enabled() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(deposit_label, deposit_style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.page {
        Page::Capsules => {
            "↑↓ move · ←→ page · space select · enter details · v deposit · tab next · q quit"
        }
        Page::Leaderboard => "tab next page · r refresh · q quit",
        Page::Gallery => "↑↓ move · d deposit · r refresh · tab next · q quit",
        Page::Submit => "tab next field · enter upload · esc back · ctrl-c quit",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_modal(frame: &mut Frame, app: &App, capsule: &Capsule) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let selected = app.selection.contains(&capsule.id);
    let mut lines = Vec::new();
    if capsule.has_text() {
        lines.push(Line::from(capsule.text_content.clone()));
        lines.push(Line::from(""));
    }
    if capsule.has_image() {
        lines.push(Line::from(Span::styled(
            format!("image: {}", capsule.image_url),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(format!("Votes: {}", capsule.votes_num)));
    lines.push(Line::from(format!(
        "Owner: {}",
        truncate_address(&capsule.owner_address)
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if selected {
            "enter: deselect this capsule · esc: close"
        } else {
            "enter: select this capsule · esc: close"
        },
        Style::default().fg(Color::Yellow),
    )));

    let modal = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(format!(" {} ", capsule.name)),
    );
    frame.render_widget(modal, area);
}

fn render_toasts(frame: &mut Frame, app: &App) {
    let toasts: Vec<_> = app.toasts.iter().collect();
    if toasts.is_empty() {
        return;
    }

    let frame_area = frame.area();
    let width = frame_area.width.min(48);
    for (index, toast) in toasts.iter().rev().enumerate() {
        let y = frame_area
            .height
            .saturating_sub(2 + index as u16);
        let area = Rect {
            x: frame_area.width.saturating_sub(width),
            y,
            width,
            height: 1,
        };
        let color = match toast.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Success => Color::Green,
            ToastLevel::Error => Color::Red,
        };
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(truncate(&toast.message, width.saturating_sub(2) as usize))
                .style(Style::default().fg(color))
                .alignment(Alignment::Right),
            area,
        );
    }
}

// ---- helpers ----

fn banner_text(loading: bool, error: &Option<String>, items: &[Capsule]) -> Option<String> {
    if loading && items.is_empty() {
        return Some("Loading...".to_string());
    }
    if let Some(error) = error {
        return Some(format!("Error: {error}"));
    }
    if items.is_empty() {
        return Some(format!(
            "No capsules yet. Showing {PAGE_SIZE} per page once submitted."
        ));
    }
    None
}

fn centered_message(message: &str) -> Paragraph<'static> {
    Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

fn truncate_address(address: &str) -> String {
    if address.len() <= 12 {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("abc", 5), "abc");
    }

    #[test]
    fn truncate_marks_cut_strings() {
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn address_truncation_shows_ends() {
        let address = "0x1234567890abcdef";
        let short = truncate_address(address);
        assert!(short.starts_with("0x1234"));
        assert!(short.ends_with("cdef"));
    }

    #[test]
    fn short_addresses_pass_through() {
        assert_eq!(truncate_address("0xabc"), "0xabc");
    }
}
