//! Main application state and logic

use std::sync::Arc;

use dex_core::render::format_id;
use dex_core::{
    Action, Browser, BrowserConfig, Catalog, ConfigError, FetchErrorKind, Outcome, Phase,
};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::ui::theme::DexTheme;
use crate::worker::{spawn_entity_fetch, spawn_species_fetch, WorkerResponse};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Main application state
pub struct App {
    pub browser: Browser,
    catalog: Arc<dyn Catalog>,

    // Channel the fetch tasks report on
    response_tx: mpsc::UnboundedSender<WorkerResponse>,
    response_rx: mpsc::UnboundedReceiver<WorkerResponse>,

    // UI state
    pub theme: DexTheme,
    show_help: bool,
    load_species: bool,

    // Last drawn area, for mouse hit tests
    pub viewport: Rect,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,

    // Animation
    pub animation_frame: u8,
}

impl App {
    pub fn new(config: &BrowserConfig, catalog: Arc<dyn Catalog>) -> Result<Self, ConfigError> {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        Ok(Self {
            browser: Browser::new(config)?,
            catalog,
            response_tx,
            response_rx,
            theme: DexTheme::default(),
            show_help: false,
            load_species: true,
            viewport: Rect::default(),
            status_message: None,
            should_quit: false,
            animation_frame: 0,
        })
    }

    /// Skip species lookups after each render
    pub fn without_species(mut self) -> Self {
        self.load_species = false;
        self
    }

    /// Kick off the initial load
    pub fn start(&mut self) {
        let ticket = self.browser.start();
        self.set_status(format!("Fetching {}", format_id(ticket.id())));
        spawn_entity_fetch(Arc::clone(&self.catalog), ticket, self.response_tx.clone());
    }

    /// Issue a navigation. The fetch runs in the background.
    pub fn dispatch(&mut self, action: Action) {
        let ticket = self.browser.request(action);
        self.set_status(format!("{}: fetching {}", action.label(), format_id(ticket.id())));
        spawn_entity_fetch(Arc::clone(&self.catalog), ticket, self.response_tx.clone());
    }

    /// Apply every response that has already arrived. Returns true if any did.
    pub fn drain_responses(&mut self) -> bool {
        let mut changed = false;
        while let Ok(response) = self.response_rx.try_recv() {
            self.apply(response);
            changed = true;
        }
        changed
    }

    /// Wait for the next response and apply it.
    #[cfg(test)]
    pub async fn next_response(&mut self) -> Option<()> {
        let response = self.response_rx.recv().await?;
        self.apply(response);
        Some(())
    }

    fn apply(&mut self, response: WorkerResponse) {
        match response {
            WorkerResponse::Entity { ticket, result } => {
                match self.browser.complete(ticket, result) {
                    Outcome::Rendered { id } => {
                        self.set_status(format!("Showing {}", format_id(id)));
                        if self.load_species {
                            spawn_species_fetch(
                                Arc::clone(&self.catalog),
                                id,
                                self.response_tx.clone(),
                            );
                        }
                    }
                    Outcome::Failed { id, kind } => {
                        self.set_status(failure_message(id, kind));
                    }
                    Outcome::Discarded { .. } => {}
                }
            }
            WorkerResponse::Species { id, result } => {
                self.browser.attach_species(id, result);
            }
        }
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Spinner frame while a fetch is outstanding
    pub fn spinner(&self) -> Option<char> {
        (self.browser.phase() == Phase::Loading)
            .then(|| SPINNER[(self.animation_frame as usize / 2) % SPINNER.len()])
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

fn failure_message(id: u32, kind: FetchErrorKind) -> String {
    let what = match kind {
        FetchErrorKind::Network => "network error",
        FetchErrorKind::NotFoundOrService => "not found or service error",
        FetchErrorKind::Malformed => "malformed response",
    };
    format!("{} failed: {what}", format_id(id))
}
