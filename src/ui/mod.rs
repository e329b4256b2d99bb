use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, Focus, InputMode, UserMenuItem};
use crate::config;
use crate::core::{Module, NotifyLevel};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());
    let snapshot = app.store.snapshot();

    app.sidebar.render(
        f,
        areas.sidebar_nav,
        app.focus == Focus::Sidebar,
        &app.ctx,
        &snapshot,
    );
    draw_user_footer(f, areas.sidebar_footer, app);
    app.list
        .render(f, areas.inset, app.focus == Focus::List, &app.ctx, &snapshot);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.user_menu.is_some() {
        draw_user_menu(f, areas.sidebar_footer, app);
    }
    if app.help_open {
        draw_help_popup(f, areas.size);
    }
    if app.settings_open {
        draw_settings_popup(f, areas.size, app);
    }
}

/// Parse a `#rrggbb` accent; anything else yields `None`
pub fn accent_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn draw_user_footer(f: &mut Frame, area: Rect, app: &App) {
    let avatar = if app.user.avatar_url.is_some() {
        "◐".to_string()
    } else {
        app.user.initial()
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {avatar} "),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ),
            Span::raw(" "),
            Span::styled(
                app.user.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(app.user.email.clone(), Style::default().fg(Color::DarkGray)),
        ]),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("u: account"));
    f.render_widget(paragraph, area);
}

fn draw_user_menu(f: &mut Frame, anchor: Rect, app: &App) {
    let height = UserMenuItem::ALL.len() as u16 + 2;
    let area = Rect {
        x: anchor.x,
        y: anchor.y.saturating_sub(height),
        width: anchor.width,
        height: height.min(anchor.y),
    };
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = UserMenuItem::ALL
        .iter()
        .map(|item| {
            let style = if *item == UserMenuItem::LogOut {
                Style::default().fg(Color::LightRed)
            } else {
                Style::default()
            };
            ListItem::new(item.title()).style(style)
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(app.user_menu);
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.store.snapshot();
    let mut spans = vec![
        Span::styled("Route ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.route())),
        Span::styled("Filter ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", snapshot.selected_category())),
        Span::styled("Focus ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.focus_label()),
    ];
    let uncategorized = snapshot.count_uncategorized();
    if uncategorized > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Uncategorized ",
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(uncategorized.to_string()));
    }
    if let Some((text, level)) = app.status_text() {
        let color = match level {
            NotifyLevel::Info => Color::Green,
            NotifyLevel::Warn => Color::Yellow,
            NotifyLevel::Error => Color::Red,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(text.to_string(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => Line::from(vec![
            Span::styled(": ", Style::default().fg(Color::Yellow)),
            Span::raw(app.command.input.clone()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        InputMode::Normal => Line::from(Span::styled(
            "Tab focus  j/k move  Enter open  f favorite  1-3 routes  : command  ? help  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(content), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  Tab / h / l Cycle focus"),
        Line::from("  j / k       Move selection"),
        Line::from("  c           Jump between nav and categories"),
        Line::from("  1 / 2 / 3   All locations / Favorites / Recents"),
        Line::from("  Enter       Follow link / select category / open"),
        Line::from("  Esc / Bksp  Back"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  f           Toggle favorite"),
        Line::from("  a           Show all categories"),
        Line::from("  u           Account menu"),
        Line::from("  s           Settings"),
        Line::from("  :           Command line"),
        Line::from("  ?           Toggle help"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :go /favorites   :cat parks   :fav loc-01   :open loc-02"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

fn draw_settings_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(70, 40, area);
    f.render_widget(Clear, popup_area);

    let config_path = app
        .config_path
        .clone()
        .or_else(config::config_path)
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(unknown)".to_string());
    let log_path = config::log_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(disabled)".to_string());
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![label("Config       "), Span::raw(config_path)]),
        Line::from(vec![label("Data         "), Span::raw(app.data_source.clone())]),
        Line::from(vec![label("Log          "), Span::raw(log_path)]),
        Line::from(vec![
            label("Recent limit "),
            Span::raw(app.store.recent_limit().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Settings").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_color() {
        assert_eq!(accent_color("#16a34a"), Some(Color::Rgb(0x16, 0xa3, 0x4a)));
        assert_eq!(accent_color("16a34a"), None);
        assert_eq!(accent_color("#fff"), None);
        assert_eq!(accent_color("#zzzzzz"), None);
        assert_eq!(accent_color(""), None);
    }
}
