//! Layout calculations for the catalog TUI

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use dex_core::Action;

/// Main layout areas
pub struct AppLayout {
    pub title_area: Rect,
    pub card_area: Rect,
    pub stats_area: Rect,
    pub previous_button: Rect,
    pub random_button: Rect,
    pub next_button: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(10),   // Card + stats
                Constraint::Length(3), // Buttons
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
            ])
            .split(area);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[1]);

        let button_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(main_chunks[2]);

        Self {
            title_area: main_chunks[0],
            card_area: content_chunks[0],
            stats_area: content_chunks[1],
            previous_button: button_chunks[0],
            random_button: button_chunks[1],
            next_button: button_chunks[2],
            status_bar: main_chunks[3],
            hotkey_bar: main_chunks[4],
        }
    }

    /// Which control, if any, covers a terminal cell
    pub fn control_at(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        [
            (self.previous_button, Action::Previous),
            (self.random_button, Action::Random),
            (self.next_button, Action::Next),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, action)| action)
    }
}

/// Fixed-size popup centered in `area`, shrunk to fit
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
