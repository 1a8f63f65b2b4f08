//! Background fetches for the TUI.
//!
//! Each fetch runs on its own tokio task and reports back over an unbounded
//! channel, so the draw loop never waits on the network. Tasks are never
//! cancelled; the browser decides what a late completion means.

use std::sync::Arc;

use dex_core::{Catalog, EntityRecord, SpeciesRecord, Ticket};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A finished fetch
#[derive(Debug)]
pub enum WorkerResponse {
    Entity {
        ticket: Ticket,
        result: Result<EntityRecord, pokeapi::Error>,
    },
    Species {
        id: u32,
        result: Result<SpeciesRecord, pokeapi::Error>,
    },
}

pub fn spawn_entity_fetch(
    catalog: Arc<dyn Catalog>,
    ticket: Ticket,
    tx: mpsc::UnboundedSender<WorkerResponse>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = catalog.entity(ticket.id()).await;
        if tx.send(WorkerResponse::Entity { ticket, result }).is_err() {
            tracing::debug!(id = ticket.id(), "ui gone, dropping entity response");
        }
    })
}

pub fn spawn_species_fetch(
    catalog: Arc<dyn Catalog>,
    id: u32,
    tx: mpsc::UnboundedSender<WorkerResponse>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = catalog.species(id).await;
        if tx.send(WorkerResponse::Species { id, result }).is_err() {
            tracing::debug!(id, "ui gone, dropping species response");
        }
    })
}
