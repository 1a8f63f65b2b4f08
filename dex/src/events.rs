//! Event handling for the catalog TUI

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use dex_core::Action;

use crate::app::App;
use crate::ui::layout::AppLayout;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
    Navigate(Action),
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(width, height) => {
            app.viewport = Rect::new(0, 0, width, height);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Left clicks on the buttons navigate
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    if app.show_help() {
        return EventResult::Continue;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match AppLayout::calculate(app.viewport).control_at(mouse.column, mouse.row) {
                Some(action) => EventResult::Navigate(action),
                None => EventResult::Continue,
            }
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    if app.show_help() {
        return handle_help_key(app, key);
    }

    match key.code {
        KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left => {
            EventResult::Navigate(Action::Previous)
        }
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => {
            EventResult::Navigate(Action::Next)
        }
        KeyCode::Char('r') | KeyCode::Char(' ') => EventResult::Navigate(Action::Random),

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,

        _ => EventResult::Continue,
    }
}

/// While the help overlay is up, keys only close it
fn handle_help_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
            app.close_help();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}
