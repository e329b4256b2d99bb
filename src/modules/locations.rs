//! Location list module - the main panel next to the sidebar

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::icons::FAVORITE_GLYPH;
use crate::domain::{glyph_for, CategoryFilter, Location, LocationId, DEFAULT_GLYPH};
use crate::nav::{route, NAV_ITEMS};
use crate::store::Snapshot;

#[derive(Debug, Clone, Default)]
pub struct LocationList {
    cursor: usize,
}

impl LocationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_id<'a>(&self, ctx: &'a Context) -> Option<&'a LocationId> {
        ctx.visible.get(self.cursor)
    }

    pub fn move_down(&mut self, ctx: &Context) {
        if self.cursor + 1 < ctx.visible.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn go_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn go_to_bottom(&mut self, ctx: &Context) {
        self.cursor = ctx.visible.len().saturating_sub(1);
    }

    pub fn clamp(&mut self, ctx: &Context) {
        self.cursor = self.cursor.min(ctx.visible.len().saturating_sub(1));
    }
}

impl Module for LocationList {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down(ctx);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.go_to_top();
                Action::None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.go_to_bottom(ctx);
                Action::None
            }
            KeyCode::Enter => self
                .selected_id(ctx)
                .map(|id| Action::Open(id.clone()))
                .unwrap_or(Action::None),
            KeyCode::Char('f') => self
                .selected_id(ctx)
                .map(|id| Action::ToggleFavorite(id.clone()))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, ctx: &Context, snapshot: &Snapshot<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(area);

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(list_title(ctx.route(), snapshot))
            .border_style(border_style);

        let locations: Vec<&Location> = ctx
            .visible
            .iter()
            .filter_map(|id| snapshot.location(id))
            .collect();

        if locations.is_empty() {
            let message = if route::scope_for(ctx.route()).is_none() {
                format!("Nothing at {}", ctx.route())
            } else {
                "No locations".to_string()
            };
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, chunks[0]);
        } else {
            let items: Vec<ListItem> = locations
                .iter()
                .map(|location| location_item(location, snapshot))
                .collect();
            let highlight_style = if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let list = List::new(items)
                .block(block)
                .highlight_style(highlight_style)
                .highlight_symbol(">> ");
            let mut state = ListState::default();
            state.select(Some(self.cursor.min(locations.len() - 1)));
            frame.render_stateful_widget(list, chunks[0], &mut state);
        }

        let selected = self.selected_id(ctx).and_then(|id| snapshot.location(id));
        let mut lines = selected
            .map(|location| detail_lines(location, snapshot))
            .unwrap_or_default();
        if lines.is_empty() {
            lines.push(Line::from("No selection"));
        }
        let details = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title("Details"))
            .wrap(Wrap { trim: true });
        frame.render_widget(details, chunks[1]);
    }
}

fn list_title(current_route: &str, snapshot: &Snapshot<'_>) -> String {
    let base = NAV_ITEMS
        .iter()
        .find(|item| item.href == current_route)
        .map(|item| item.title)
        .unwrap_or("Not found");
    match snapshot.selected_category() {
        CategoryFilter::All => base.to_string(),
        CategoryFilter::Category(id) => {
            let name = snapshot
                .category(id)
                .map(|category| category.name.as_str())
                .unwrap_or(id.as_str());
            format!("{base} · {name}")
        }
    }
}

fn category_glyph<'a>(location: &Location, snapshot: &Snapshot<'a>) -> (&'static str, &'a str) {
    match snapshot.category(&location.category_id) {
        Some(category) => (glyph_for(&category.icon), category.name.as_str()),
        None => (DEFAULT_GLYPH, "Uncategorized"),
    }
}

fn location_item<'a>(location: &'a Location, snapshot: &Snapshot<'_>) -> ListItem<'a> {
    let (glyph, category) = category_glyph(location, snapshot);
    let favorite = if location.is_favorite { FAVORITE_GLYPH } else { " " };
    ListItem::new(Line::from(vec![
        Span::styled(favorite, Style::default().fg(Color::LightRed)),
        Span::raw(format!(" {glyph} ")),
        Span::raw(location.name.as_str()),
        Span::styled(format!("  {category}"), Style::default().fg(Color::DarkGray)),
    ]))
}

fn detail_lines(location: &Location, snapshot: &Snapshot<'_>) -> Vec<Line<'static>> {
    let (glyph, category) = category_glyph(location, snapshot);
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(Span::styled(
            location.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![label("Id        "), Span::raw(location.id.to_string())]),
        Line::from(vec![label("Category  "), Span::raw(format!("{glyph} {category}"))]),
    ];
    if !location.address.is_empty() {
        lines.push(Line::from(vec![
            label("Address   "),
            Span::raw(location.address.clone()),
        ]));
    }
    if let (Some(lat), Some(lng)) = (location.latitude, location.longitude) {
        lines.push(Line::from(vec![
            label("Coords    "),
            Span::raw(format!("{lat:.4}, {lng:.4}")),
        ]));
    }
    lines.push(Line::from(vec![
        label("Favorite  "),
        Span::raw(if location.is_favorite { "yes" } else { "no" }),
    ]));
    let viewed = location
        .last_viewed_at
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "never".to_string());
    lines.push(Line::from(vec![label("Viewed    "), Span::raw(viewed)]));
    lines
}
