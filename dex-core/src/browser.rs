//! The fetch-and-render cycle.
//!
//! A [`Browser`] owns the navigator and the display. Each navigation issues
//! a [`Ticket`]; the caller performs the fetch however it likes (inline or on
//! a spawned task) and hands the result back to [`Browser::complete`]. The
//! navigator commits a target only when its fetch succeeds.
//!
//! Completions may arrive out of order. [`ResponseOrdering`] decides whether a
//! completion for a superseded ticket is still applied.

use pokeapi::{EntityRecord, SpeciesRecord};
use rand::Rng;

use crate::catalog::Catalog;
use crate::config::{BrowserConfig, ConfigError};
use crate::navigator::{Action, Navigator, START_ID};
use crate::render::{BarScale, DisplayState, Renderer};

/// Which completions reach the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Only the most recently issued ticket may render or commit. Older
    /// completions are dropped.
    #[default]
    LatestIssued,
    /// Every completion renders in arrival order; the last to arrive wins.
    LastArrival,
}

impl ResponseOrdering {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "latest-issued" | "latest" => Some(ResponseOrdering::LatestIssued),
            "last-arrival" | "arrival" => Some(ResponseOrdering::LastArrival),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseOrdering::LatestIssued => "latest-issued",
            ResponseOrdering::LastArrival => "last-arrival",
        }
    }
}

/// Where the current cycle stands.
///
/// `Rendered` and `Failed` are both idle: the cycle is over and the browser
/// waits for the next action. They only record how the last cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Rendered,
    Failed,
}

/// One issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    id: u32,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Coarse failure class. The display shows the same indicator for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    NotFoundOrService,
    Malformed,
}

impl From<&pokeapi::Error> for FetchErrorKind {
    fn from(err: &pokeapi::Error) -> Self {
        match err {
            pokeapi::Error::NotFoundOrService { .. } => FetchErrorKind::NotFoundOrService,
            pokeapi::Error::Malformed(_) => FetchErrorKind::Malformed,
            pokeapi::Error::Network(_) | pokeapi::Error::Config(_) => FetchErrorKind::Network,
        }
    }
}

/// What a completion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered and committed.
    Rendered { id: u32 },
    /// Error indicator shown; current id unchanged.
    Failed { id: u32, kind: FetchErrorKind },
    /// Superseded by a newer ticket; nothing changed.
    Discarded { id: u32 },
}

/// Navigator, renderer and display for one browsing session.
#[derive(Debug, Clone)]
pub struct Browser {
    navigator: Navigator,
    renderer: Renderer,
    display: DisplayState,
    phase: Phase,
    ordering: ResponseOrdering,
    last_issued: u64,
    outstanding: usize,
    shown_id: Option<u32>,
}

impl Browser {
    pub fn new(config: &BrowserConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let navigator = Navigator::new(config.max_id).map_err(|_| ConfigError::Invalid {
            key: crate::config::ENV_MAX_ID,
            value: config.max_id.to_string(),
            reason: "must be at least 1",
        })?;

        Ok(Self {
            navigator,
            renderer: Renderer::new(config.bar_scale()),
            display: DisplayState::new(),
            phase: Phase::Idle,
            ordering: config.ordering,
            last_issued: 0,
            outstanding: 0,
            shown_id: None,
        })
    }

    pub fn navigator(&self) -> Navigator {
        self.navigator
    }

    /// Last committed id.
    pub fn current_id(&self) -> u32 {
        self.navigator.current()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    pub fn bar_scale(&self) -> BarScale {
        self.renderer.scale()
    }

    /// Id of the record currently on display, if any has rendered.
    pub fn shown_id(&self) -> Option<u32> {
        self.shown_id
    }

    /// Tickets issued but not yet completed.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Ticket for the initial load.
    pub fn start(&mut self) -> Ticket {
        self.issue(START_ID)
    }

    pub fn request(&mut self, action: Action) -> Ticket {
        self.request_with_rng(action, &mut rand::thread_rng())
    }

    pub fn request_with_rng<R: Rng>(&mut self, action: Action, rng: &mut R) -> Ticket {
        let id = self.navigator.target_with_rng(action, rng);
        tracing::debug!(
            action = action.label(),
            from = self.navigator.current(),
            to = id,
            "navigate"
        );
        self.issue(id)
    }

    fn issue(&mut self, id: u32) -> Ticket {
        self.last_issued += 1;
        self.outstanding += 1;
        self.phase = Phase::Loading;
        self.renderer.render_loading(&mut self.display);
        Ticket {
            seq: self.last_issued,
            id,
        }
    }

    /// True if no newer ticket has been issued since this one.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.seq == self.last_issued
    }

    /// Apply the result of a ticket's fetch.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<EntityRecord, pokeapi::Error>,
    ) -> Outcome {
        self.outstanding = self.outstanding.saturating_sub(1);

        if self.ordering == ResponseOrdering::LatestIssued && !self.is_latest(ticket) {
            tracing::debug!(
                id = ticket.id,
                seq = ticket.seq,
                latest = self.last_issued,
                "discarding superseded response"
            );
            return Outcome::Discarded { id: ticket.id };
        }

        let record = match result {
            Ok(record) => record,
            Err(err) => return self.fail(ticket, &err),
        };

        match self.navigator.commit(ticket.id) {
            Ok(navigator) => self.navigator = navigator,
            Err(err) => {
                tracing::warn!(id = ticket.id, error = %err, "id outside the catalog");
                self.renderer.render_error(&mut self.display);
                self.phase = Phase::Failed;
                return Outcome::Failed {
                    id: ticket.id,
                    kind: FetchErrorKind::Malformed,
                };
            }
        }

        self.renderer.render(&record, &mut self.display);
        self.shown_id = Some(ticket.id);
        self.phase = Phase::Rendered;
        Outcome::Rendered { id: ticket.id }
    }

    fn fail(&mut self, ticket: Ticket, err: &pokeapi::Error) -> Outcome {
        let kind = FetchErrorKind::from(err);
        tracing::warn!(id = ticket.id, ?kind, error = %err, "fetch failed");
        self.renderer.render_error(&mut self.display);
        self.phase = Phase::Failed;
        Outcome::Failed { id: ticket.id, kind }
    }

    /// Attach species details if `id` is still on display. Returns whether
    /// anything changed. Species failures are logged and otherwise ignored.
    pub fn attach_species(
        &mut self,
        id: u32,
        result: Result<SpeciesRecord, pokeapi::Error>,
    ) -> bool {
        match result {
            Ok(species) if self.shown_id == Some(id) => {
                self.renderer.render_species(&species, &mut self.display);
                true
            }
            Ok(_) => false,
            Err(err) => {
                tracing::debug!(id, error = %err, "species lookup failed");
                false
            }
        }
    }

    /// Run one whole cycle inline: issue, fetch, complete.
    pub async fn navigate<C: Catalog + ?Sized>(
        &mut self,
        catalog: &C,
        action: Action,
    ) -> Outcome {
        let ticket = self.request(action);
        let result = catalog.entity(ticket.id).await;
        self.complete(ticket, result)
    }

    /// Run the initial load inline.
    pub async fn load_start<C: Catalog + ?Sized>(&mut self, catalog: &C) -> Outcome {
        let ticket = self.start();
        let result = catalog.entity(ticket.id).await;
        self.complete(ticket, result)
    }

    /// Fetch species details for whatever is on display.
    pub async fn load_species<C: Catalog + ?Sized>(&mut self, catalog: &C) -> bool {
        let Some(id) = self.shown_id else {
            return false;
        };
        let result = catalog.species(id).await;
        self.attach_species(id, result)
    }
}
