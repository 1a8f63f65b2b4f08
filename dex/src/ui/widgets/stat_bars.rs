//! Attribute bars

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use dex_core::AttributeBar;

use crate::ui::theme::DexTheme;

/// Six labelled bars, one per attribute
pub struct StatBarsWidget<'a> {
    bars: &'a [AttributeBar],
    theme: &'a DexTheme,
    reference_max: u16,
}

impl<'a> StatBarsWidget<'a> {
    pub fn new(bars: &'a [AttributeBar], theme: &'a DexTheme) -> Self {
        Self {
            bars,
            theme,
            reference_max: dex_core::render::DEFAULT_REFERENCE_MAX,
        }
    }

    pub fn reference_max(mut self, reference_max: u16) -> Self {
        self.reference_max = reference_max;
        self
    }
}

/// Fraction of the track to fill. Widths past 100% fill the whole track.
pub fn gauge_ratio(width_percent: f64) -> f64 {
    (width_percent / 100.0).clamp(0.0, 1.0)
}

impl Widget for StatBarsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Base stats (bar = {}) ", self.reference_max))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        // Two rows per bar when there is room, one otherwise
        let row_height = if inner.height >= (self.bars.len() as u16) * 2 {
            2
        } else {
            1
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                self.bars
                    .iter()
                    .map(|_| Constraint::Length(row_height))
                    .chain(std::iter::once(Constraint::Min(0))),
            )
            .split(inner);

        for (bar, row) in self.bars.iter().zip(rows.iter()) {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(13), Constraint::Min(4)])
                .split(Rect { height: 1, ..*row });

            let label = format!("{:<8}{:>4} ", bar.kind.label(), bar.label);
            Paragraph::new(Span::styled(label, self.theme.attribute_style(bar.kind)))
                .render(cols[0], buf);

            if bar.label.is_empty() {
                continue;
            }

            let gauge_label = if bar.overflows() {
                format!("{} +", bar.width_label())
            } else {
                bar.width_label()
            };

            Gauge::default()
                .gauge_style(
                    Style::default()
                        .fg(self.theme.bar_color(bar.width_percent))
                        .bg(self.theme.bar_track),
                )
                .ratio(gauge_ratio(bar.width_percent))
                .label(gauge_label)
                .render(cols[1], buf);
        }
    }
}
