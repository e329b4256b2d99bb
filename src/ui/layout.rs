use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub sidebar_nav: Rect,
    pub sidebar_footer: Rect,
    pub inset: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

/// Dashboard layout: sidebar on the left, content inset on the right,
/// status and command lines along the bottom
pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width(size.width)), Constraint::Min(0)])
        .split(vertical[0]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(main_chunks[0]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[1]);

    UiAreas {
        size,
        sidebar_nav: sidebar_chunks[0],
        sidebar_footer: sidebar_chunks[1],
        inset: main_chunks[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

fn sidebar_width(total: u16) -> u16 {
    (total / 4).clamp(24, 34).min(total)
}
