//! Previous / Random / Next buttons

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use dex_core::Action;

use crate::ui::layout::AppLayout;
use crate::ui::theme::DexTheme;

/// Button caption, with its hotkey
pub fn button_caption(action: Action) -> &'static str {
    match action {
        Action::Previous => "◀ Previous [h]",
        Action::Random => "Random [r]",
        Action::Next => "Next [l] ▶",
    }
}

/// The three navigation buttons, drawn into the rects from [`AppLayout`]
pub struct ControlsWidget<'a> {
    layout: &'a AppLayout,
    theme: &'a DexTheme,
    busy: bool,
}

impl<'a> ControlsWidget<'a> {
    pub fn new(layout: &'a AppLayout, theme: &'a DexTheme) -> Self {
        Self {
            layout,
            theme,
            busy: false,
        }
    }

    /// Dim the buttons while a fetch is outstanding. They stay clickable.
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }
}

impl Widget for ControlsWidget<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let buttons = [
            (self.layout.previous_button, Action::Previous),
            (self.layout.random_button, Action::Random),
            (self.layout.next_button, Action::Next),
        ];

        for (rect, action) in buttons {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border_style(!self.busy));
            let caption = Line::from(Span::styled(
                button_caption(action),
                self.theme.button_style(self.busy),
            ));
            Paragraph::new(caption)
                .alignment(Alignment::Center)
                .block(block)
                .render(rect, buf);
        }
    }
}
