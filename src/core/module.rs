//! Module trait for extensible UI components

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};
use crate::store::Snapshot;

/// Trait for UI panels that can handle input and draw themselves
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, ctx: &Context, snapshot: &Snapshot<'_>);
}
