//! Single sidebar row: cursor marker, glyph, label and right-aligned badge

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

pub struct NavRow<'a> {
    glyph: &'a str,
    label: &'a str,
    badge: Option<usize>,
    active: bool,
    cursor: bool,
    glyph_style: Style,
}

impl<'a> NavRow<'a> {
    pub fn new(glyph: &'a str, label: &'a str) -> Self {
        Self {
            glyph,
            label,
            badge: None,
            active: false,
            cursor: false,
            glyph_style: Style::default(),
        }
    }

    pub fn badge(mut self, badge: Option<usize>) -> Self {
        self.badge = badge;
        self
    }

    /// Entry matches the current route or selection
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Keyboard cursor is on this row
    pub fn cursor(mut self, cursor: bool) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn glyph_style(mut self, style: Style) -> Self {
        self.glyph_style = style;
        self
    }
}

impl<'a> Widget for NavRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let row = Rect { height: 1, ..area };

        let mut style = if self.active {
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if self.cursor {
            style = style.bg(Color::DarkGray);
        }
        buf.set_style(row, style);

        let right = row.x + row.width;
        let marker = if self.cursor { "> " } else { "  " };
        let (x, _) = buf.set_stringn(row.x, row.y, marker, row.width as usize, style);
        let (x, _) = buf.set_stringn(
            x,
            row.y,
            self.glyph,
            right.saturating_sub(x) as usize,
            style.patch(self.glyph_style),
        );
        let (x, _) = buf.set_stringn(x, row.y, " ", right.saturating_sub(x) as usize, style);

        let badge = self.badge.map(|count| count.to_string()).unwrap_or_default();
        let badge_width = badge.len() as u16;
        let label_room = right.saturating_sub(x).saturating_sub(badge_width + 1);
        buf.set_stringn(x, row.y, self.label, label_room as usize, style);

        if !badge.is_empty() && right.saturating_sub(x) > badge_width {
            let badge_style = style.fg(Color::Gray).remove_modifier(Modifier::BOLD);
            buf.set_string(right - badge_width, row.y, badge, badge_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf.get(x, 0).symbol().to_string()).collect()
    }

    #[test]
    fn test_badge_right_aligned() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        NavRow::new("*", "Parks").badge(Some(12)).render(area, &mut buf);
        let text = line(&buf, 20);
        assert!(text.starts_with("  * Parks"));
        assert!(text.ends_with("12"));
    }

    #[test]
    fn test_no_badge() {
        let area = Rect::new(0, 0, 16, 1);
        let mut buf = Buffer::empty(area);
        NavRow::new("*", "Recents").cursor(true).render(area, &mut buf);
        let text = line(&buf, 16);
        assert!(text.starts_with("> * Recents"));
        assert_eq!(text.trim_end(), "> * Recents");
    }
}
