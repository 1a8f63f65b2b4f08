//! Testing utilities for the browser.
//!
//! This module provides:
//! - `MockCatalog` for deterministic tests without network access
//! - Record fixtures shaped like real catalog entries

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use pokeapi::{Attributes, EntityRecord, Error, SpeciesRecord};

use crate::catalog::Catalog;

/// How a scripted lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    NotFound,
    ServiceUnavailable,
    Network,
    Malformed,
}

impl MockFailure {
    fn to_error(self, id: u32) -> Error {
        match self {
            MockFailure::NotFound => Error::NotFoundOrService {
                status: 404,
                message: "Not Found".to_string(),
            },
            MockFailure::ServiceUnavailable => Error::NotFoundOrService {
                status: 503,
                message: "Service Unavailable".to_string(),
            },
            MockFailure::Network => Error::Network(format!("connection reset fetching {id}")),
            MockFailure::Malformed => Error::Malformed("missing field `stats`".to_string()),
        }
    }
}

/// A catalog that answers from scripted records.
///
/// Ids with no script answer 404, like the real service does for ids past
/// the end of the catalog.
#[derive(Default)]
pub struct MockCatalog {
    entities: HashMap<u32, Result<EntityRecord, MockFailure>>,
    species: HashMap<u32, SpeciesRecord>,
    delays: HashMap<u32, Duration>,
    requests: Mutex<Vec<u32>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, record: EntityRecord) -> Self {
        self.entities.insert(record.id, Ok(record));
        self
    }

    pub fn with_failure(mut self, id: u32, failure: MockFailure) -> Self {
        self.entities.insert(id, Err(failure));
        self
    }

    pub fn with_species(mut self, species: SpeciesRecord) -> Self {
        self.species.insert(species.id, species);
        self
    }

    /// Delay entity lookups for `id` to force out-of-order completions.
    pub fn with_delay(mut self, id: u32, delay: Duration) -> Self {
        self.delays.insert(id, delay);
        self
    }

    /// Ids requested from `entity`, in call order.
    pub fn requests(&self) -> Vec<u32> {
        self.requests
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn entity(&self, id: u32) -> Result<EntityRecord, Error> {
        if let Ok(mut log) = self.requests.lock() {
            log.push(id);
        }

        if let Some(delay) = self.delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }

        match self.entities.get(&id) {
            Some(Ok(record)) => Ok(record.clone()),
            Some(Err(failure)) => Err(failure.to_error(id)),
            None => Err(MockFailure::NotFound.to_error(id)),
        }
    }

    async fn species(&self, id: u32) -> Result<SpeciesRecord, Error> {
        self.species
            .get(&id)
            .cloned()
            .ok_or_else(|| MockFailure::NotFound.to_error(id))
    }
}

/// Entry #1 with its real types and base stats.
pub fn sample_bulbasaur() -> EntityRecord {
    EntityRecord {
        id: 1,
        name: "bulbasaur".to_string(),
        artwork_url: Some(artwork_url(1)),
        sprite_url: Some(sprite_url(1)),
        categories: vec!["grass".to_string(), "poison".to_string()],
        attributes: Attributes::new([45, 49, 49, 65, 65, 45]),
    }
}

/// Species details for entry #1.
pub fn sample_bulbasaur_species() -> SpeciesRecord {
    SpeciesRecord {
        id: 1,
        genus: Some("Seed Pokémon".to_string()),
        flavor_text: Some(
            "A strange seed was planted on its back at birth. The plant sprouts and grows with this Pokémon."
                .to_string(),
        ),
    }
}

/// Entry with the given id, name and categories and flat stats of 50.
pub fn sample_record(id: u32, name: &str, categories: &[&str]) -> EntityRecord {
    EntityRecord {
        id,
        name: name.to_string(),
        artwork_url: Some(artwork_url(id)),
        sprite_url: Some(sprite_url(id)),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        attributes: Attributes::new([50; 6]),
    }
}

fn artwork_url(id: u32) -> String {
    format!(
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png"
    )
}

fn sprite_url(id: u32) -> String {
    format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png")
}
