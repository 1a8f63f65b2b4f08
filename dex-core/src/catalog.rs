//! The remote catalog as seen by the browser.

use async_trait::async_trait;
use pokeapi::{EntityRecord, PokeApi, SpeciesRecord};

/// Source of catalog records.
///
/// Implemented by the HTTP client and by [`crate::testing::MockCatalog`].
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn entity(&self, id: u32) -> Result<EntityRecord, pokeapi::Error>;

    async fn species(&self, id: u32) -> Result<SpeciesRecord, pokeapi::Error>;
}

#[async_trait]
impl Catalog for PokeApi {
    async fn entity(&self, id: u32) -> Result<EntityRecord, pokeapi::Error> {
        self.fetch_entity(id).await
    }

    async fn species(&self, id: u32) -> Result<SpeciesRecord, pokeapi::Error> {
        self.fetch_species(id).await
    }
}
