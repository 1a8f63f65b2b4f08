//! Render orchestration for the catalog TUI

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{
    ControlsWidget, EntityCardWidget, HotkeyBarWidget, StatBarsWidget, StatusBarWidget,
};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);
    let display = app.browser.display();

    render_title_bar(frame, app, layout.title_area);

    let card = EntityCardWidget::new(display, &app.theme).spinner(app.spinner());
    frame.render_widget(card, layout.card_area);

    let bars = StatBarsWidget::new(&display.attributes, &app.theme)
        .reference_max(app.browser.bar_scale().reference_max());
    frame.render_widget(bars, layout.stats_area);

    let controls = ControlsWidget::new(&layout, &app.theme).busy(app.browser.outstanding() > 0);
    frame.render_widget(controls, layout.previous_button.union(layout.next_button));

    let status = StatusBarWidget::new(
        app.browser.phase(),
        app.browser.current_id(),
        app.browser.navigator().max_id(),
        app.browser.ordering(),
        &app.theme,
    )
    .message(app.status_message());
    frame.render_widget(status, layout.status_bar);

    frame.render_widget(HotkeyBarWidget::new(&app.theme), layout.hotkey_bar);

    if app.show_help() {
        render_help_overlay(frame, app, area);
    }
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        " Dex - creature catalog ",
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(46, 16, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let heading = Style::default().add_modifier(Modifier::UNDERLINED);
    let help_text = vec![
        Line::from(Span::styled(
            " Dex - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Navigation:", heading)),
        Line::from("  h / ← / p      Previous entry"),
        Line::from("  l / → / n      Next entry"),
        Line::from("  r / Space      Random entry"),
        Line::from("  Mouse click    Press a button"),
        Line::from(""),
        Line::from(Span::styled("Other:", heading)),
        Line::from("  ? / F1         Toggle this help"),
        Line::from("  q / Esc        Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_core::testing::sample_bulbasaur;
    use dex_core::{BrowserConfig, MockCatalog};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    async fn loaded_app() -> App {
        let catalog = MockCatalog::new().with_entity(sample_bulbasaur());
        let mut app = App::new(&BrowserConfig::new(), Arc::new(catalog))
            .unwrap()
            .without_species();
        app.start();
        app.next_response().await;
        app
    }

    #[tokio::test]
    async fn test_renders_loaded_entry() {
        let app = loaded_app().await;
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();
        let text = screen_text(terminal.backend().buffer());

        assert!(text.contains("Bulbasaur"), "{text}");
        assert!(text.contains("#0001"));
        assert!(text.contains("GRASS"));
        assert!(text.contains("POISON"));
        assert!(text.contains("30.00%"));
        assert!(text.contains("43.33%"));
        assert!(text.contains("Random [r]"));
        assert!(text.contains("READY"));
    }

    #[tokio::test]
    async fn test_help_overlay() {
        let mut app = loaded_app().await;
        app.toggle_help();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();
        let text = screen_text(terminal.backend().buffer());

        assert!(text.contains("Dex - Help"), "{text}");
        assert!(text.contains("Toggle this help"));
    }

    #[test]
    fn test_renders_before_first_load() {
        let app = App::new(&BrowserConfig::new(), Arc::new(MockCatalog::new())).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();
        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains("Catalog"));
        assert!(text.contains("IDLE"));
    }
}
