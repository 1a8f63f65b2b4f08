//! Status and hotkey bars

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dex_core::{Phase, ResponseOrdering};

use crate::ui::theme::DexTheme;

/// Cycle phase, position in the catalog and the latest status message
pub struct StatusBarWidget<'a> {
    phase: Phase,
    current_id: u32,
    max_id: u32,
    ordering: ResponseOrdering,
    theme: &'a DexTheme,
    message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(
        phase: Phase,
        current_id: u32,
        max_id: u32,
        ordering: ResponseOrdering,
        theme: &'a DexTheme,
    ) -> Self {
        Self {
            phase,
            current_id,
            max_id,
            ordering,
            theme,
            message: None,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "IDLE",
        Phase::Loading => "LOADING",
        Phase::Rendered => "READY",
        Phase::Failed => "ERROR",
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let phase_style = match self.phase {
            Phase::Loading => Style::default().fg(self.theme.loading),
            Phase::Failed => Style::default().fg(self.theme.error),
            _ => Style::default().fg(self.theme.foreground),
        }
        .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(format!(" {} ", phase_label(self.phase)), phase_style),
            Span::raw("| "),
            Span::raw(format!("{} / {}", self.current_id, self.max_id)),
            Span::raw(" | "),
            Span::styled(self.ordering.as_str(), self.theme.system_style()),
        ];

        if let Some(message) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(message.to_string()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Key reminders along the bottom edge
pub struct HotkeyBarWidget<'a> {
    theme: &'a DexTheme,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(theme: &'a DexTheme) -> Self {
        Self { theme }
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let keys = [
            ("h/←", "prev"),
            ("l/→", "next"),
            ("r", "random"),
            ("?", "help"),
            ("q", "quit"),
        ];

        let key_style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in keys {
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(" {label}  "), self.theme.system_style()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
