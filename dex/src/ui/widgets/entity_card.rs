//! Entity card: name, identifier, badges, portrait and species details

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use dex_core::DisplayState;

use crate::ui::theme::DexTheme;
use crate::ui::widgets::badge_line;

/// Card for the record on display
pub struct EntityCardWidget<'a> {
    display: &'a DisplayState,
    theme: &'a DexTheme,
    spinner: Option<char>,
}

impl<'a> EntityCardWidget<'a> {
    pub fn new(display: &'a DisplayState, theme: &'a DexTheme) -> Self {
        Self {
            display,
            theme,
            spinner: None,
        }
    }

    /// Spinner frame shown next to the loading indicator
    pub fn spinner(mut self, spinner: Option<char>) -> Self {
        self.spinner = spinner;
        self
    }
}

impl Widget for EntityCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.display.identifier.is_empty() {
            " Catalog ".to_string()
        } else {
            format!(" {} ", self.display.identifier)
        };

        let block = Block::default()
            .title(Span::styled(title, self.theme.identifier_style()))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));

        let mut name_spans = vec![Span::styled(
            self.display.name.clone(),
            self.theme
                .name_style(self.display.is_loading(), self.display.is_error()),
        )];
        if let (true, Some(frame)) = (self.display.is_loading(), self.spinner) {
            name_spans.push(Span::raw(format!(" {frame}")));
        }

        let mut lines = vec![
            Line::from(name_spans),
            Line::from(""),
            badge_line(&self.display.badges, self.theme),
            Line::from(""),
        ];

        match &self.display.image {
            Some(image) => {
                lines.push(Line::from(Span::styled(
                    format!("Artwork ({})", image.alt),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                )));
                lines.push(Line::from(Span::styled(
                    image.url.clone(),
                    self.theme.system_style(),
                )));
            }
            None if !self.display.identifier.is_empty() => {
                lines.push(Line::from(Span::styled(
                    "No artwork available",
                    self.theme.system_style(),
                )));
            }
            None => {}
        }

        if let Some(genus) = &self.display.genus {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                genus.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }

        if let Some(flavor) = &self.display.flavor_text {
            lines.push(Line::from(""));
            lines.push(Line::from(flavor.clone()));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
