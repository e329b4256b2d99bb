//! Sidebar module - primary navigation and category filter

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::DEFAULT_GLYPH;
use crate::store::Snapshot;
use crate::ui::{accent_color, widgets::NavRow};

pub const APP_TITLE: &str = "Waypoint - Maps";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSection {
    Primary,
    Categories,
}

/// Keyboard cursor over the two sidebar lists
#[derive(Debug, Clone)]
pub struct Sidebar {
    section: SidebarSection,
    primary_cursor: usize,
    category_cursor: usize,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self {
            section: SidebarSection::Primary,
            primary_cursor: 0,
            category_cursor: 0,
        }
    }

    pub fn section(&self) -> SidebarSection {
        self.section
    }

    pub fn cursor(&self) -> usize {
        match self.section {
            SidebarSection::Primary => self.primary_cursor,
            SidebarSection::Categories => self.category_cursor,
        }
    }

    /// Moves down through the primary list, then on into the categories
    pub fn move_down(&mut self, ctx: &Context) {
        match self.section {
            SidebarSection::Primary => {
                if self.primary_cursor + 1 < ctx.sidebar.primary.len() {
                    self.primary_cursor += 1;
                } else if !ctx.sidebar.categories.is_empty() {
                    self.section = SidebarSection::Categories;
                    self.category_cursor = 0;
                }
            }
            SidebarSection::Categories => {
                if self.category_cursor + 1 < ctx.sidebar.categories.len() {
                    self.category_cursor += 1;
                }
            }
        }
    }

    pub fn move_up(&mut self, ctx: &Context) {
        match self.section {
            SidebarSection::Primary => {
                self.primary_cursor = self.primary_cursor.saturating_sub(1);
            }
            SidebarSection::Categories => {
                if self.category_cursor > 0 {
                    self.category_cursor -= 1;
                } else {
                    self.section = SidebarSection::Primary;
                    self.primary_cursor = ctx.sidebar.primary.len().saturating_sub(1);
                }
            }
        }
    }

    pub fn toggle_section(&mut self) {
        self.section = match self.section {
            SidebarSection::Primary => SidebarSection::Categories,
            SidebarSection::Categories => SidebarSection::Primary,
        };
    }

    /// Action for the entry under the cursor
    pub fn activate(&self, ctx: &Context) -> Action {
        match self.section {
            SidebarSection::Primary => ctx
                .sidebar
                .primary
                .get(self.primary_cursor)
                .map(|entry| Action::Navigate(entry.href.to_string()))
                .unwrap_or(Action::None),
            SidebarSection::Categories => ctx
                .sidebar
                .categories
                .get(self.category_cursor)
                .map(|entry| Action::SelectCategory(entry.id.clone()))
                .unwrap_or(Action::None),
        }
    }

    /// Keep cursors inside the lists after the model was rebuilt
    pub fn clamp(&mut self, ctx: &Context) {
        self.primary_cursor = self
            .primary_cursor
            .min(ctx.sidebar.primary.len().saturating_sub(1));
        self.category_cursor = self
            .category_cursor
            .min(ctx.sidebar.categories.len().saturating_sub(1));
    }
}

impl Module for Sidebar {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down(ctx);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up(ctx);
                Action::None
            }
            KeyCode::Char('c') => {
                self.toggle_section();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(ctx),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, ctx: &Context, _snapshot: &Snapshot<'_>) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut y = inner.y;
        let bottom = inner.y + inner.height;
        let row = |y: u16| Rect::new(inner.x, y, inner.width, 1);

        let title = Line::from(vec![
            Span::styled(
                format!(" {DEFAULT_GLYPH} "),
                Style::default().fg(Color::Black).bg(Color::White),
            ),
            Span::raw(" "),
            Span::styled(APP_TITLE, Style::default().add_modifier(Modifier::BOLD)),
        ]);
        if y < bottom {
            frame.render_widget(Paragraph::new(title), row(y));
            y += 2;
        }

        for (index, entry) in ctx.sidebar.primary.iter().enumerate() {
            if y >= bottom {
                return;
            }
            let cursor = focused && self.section == SidebarSection::Primary && self.primary_cursor == index;
            let nav_row = NavRow::new(entry.glyph, entry.title)
                .badge(entry.badge())
                .active(entry.is_active)
                .cursor(cursor);
            frame.render_widget(nav_row, row(y));
            y += 1;
        }

        y += 1;
        if y >= bottom {
            return;
        }
        let label = Paragraph::new(Line::from(Span::styled(
            "CATEGORIES",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(label, row(y));
        y += 1;

        for (index, entry) in ctx.sidebar.categories.iter().enumerate() {
            if y >= bottom {
                return;
            }
            let cursor =
                focused && self.section == SidebarSection::Categories && self.category_cursor == index;
            let glyph_style = accent_color(&entry.color)
                .map(|color| Style::default().fg(color))
                .unwrap_or_default();
            let nav_row = NavRow::new(entry.glyph, &entry.name)
                .badge(entry.badge())
                .active(entry.is_selected)
                .cursor(cursor)
                .glyph_style(glyph_style);
            frame.render_widget(nav_row, row(y));
            y += 1;
        }
    }
}
