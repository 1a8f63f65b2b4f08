//! Headless browser for programmatic use.
//!
//! This module wraps a [`Browser`] and a [`Catalog`] so a whole cycle runs
//! with one call. It's designed for:
//! - Scripted sessions from the `dex --headless` line mode
//! - Integration tests with a [`crate::testing::MockCatalog`]
//!
//! # Example
//!
//! ```ignore
//! use dex_core::headless::HeadlessBrowser;
//! use dex_core::{Action, BrowserConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut dex = HeadlessBrowser::new(BrowserConfig::from_env()?)?;
//!     dex.start().await;
//!     dex.send(Action::Next).await;
//!     println!("{}", dex.display().to_text());
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use thiserror::Error;

use crate::browser::{Browser, Outcome, Phase};
use crate::catalog::Catalog;
use crate::config::{BrowserConfig, ConfigError};
use crate::navigator::Action;
use crate::render::DisplayState;

/// Errors from setting up a headless browser.
#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("client error: {0}")]
    Client(#[from] pokeapi::Error),
}

/// A browser that runs each cycle to completion before returning.
pub struct HeadlessBrowser {
    browser: Browser,
    catalog: Arc<dyn Catalog>,
    load_species: bool,
}

impl HeadlessBrowser {
    /// Browser backed by the HTTP client the config describes.
    pub fn new(config: BrowserConfig) -> Result<Self, HeadlessError> {
        let catalog = Arc::new(config.build_client()?);
        Self::with_catalog(config, catalog)
    }

    /// Browser backed by any catalog.
    pub fn with_catalog(
        config: BrowserConfig,
        catalog: Arc<dyn Catalog>,
    ) -> Result<Self, HeadlessError> {
        Ok(Self {
            browser: Browser::new(&config)?,
            catalog,
            load_species: true,
        })
    }

    /// Skip the species lookup after each successful cycle.
    pub fn without_species(mut self) -> Self {
        self.load_species = false;
        self
    }

    /// Initial load of the first entry.
    pub async fn start(&mut self) -> Outcome {
        let outcome = self.browser.load_start(self.catalog.as_ref()).await;
        self.after(outcome).await
    }

    /// One navigation cycle.
    pub async fn send(&mut self, action: Action) -> Outcome {
        let outcome = self.browser.navigate(self.catalog.as_ref(), action).await;
        self.after(outcome).await
    }

    async fn after(&mut self, outcome: Outcome) -> Outcome {
        if self.load_species && matches!(outcome, Outcome::Rendered { .. }) {
            self.browser.load_species(self.catalog.as_ref()).await;
        }
        outcome
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn display(&self) -> &DisplayState {
        self.browser.display()
    }

    pub fn current_id(&self) -> u32 {
        self.browser.current_id()
    }

    pub fn max_id(&self) -> u32 {
        self.browser.navigator().max_id()
    }

    pub fn phase(&self) -> Phase {
        self.browser.phase()
    }

    /// One-line summary for status output.
    pub fn status(&self) -> String {
        let phase = match self.phase() {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Rendered => "rendered",
            Phase::Failed => "error",
        };
        format!(
            "current {} of {}, last cycle {}, ordering {}",
            self.current_id(),
            self.max_id(),
            phase,
            self.browser.ordering().as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_bulbasaur, sample_bulbasaur_species, MockCatalog};

    #[tokio::test]
    async fn test_start_loads_species() {
        let catalog = MockCatalog::new()
            .with_entity(sample_bulbasaur())
            .with_species(sample_bulbasaur_species());
        let mut dex =
            HeadlessBrowser::with_catalog(BrowserConfig::new(), Arc::new(catalog)).unwrap();

        assert_eq!(dex.start().await, Outcome::Rendered { id: 1 });
        assert_eq!(dex.display().genus.as_deref(), Some("Seed Pokémon"));
        assert_eq!(
            dex.status(),
            "current 1 of 1025, last cycle rendered, ordering latest-issued"
        );
    }

    #[tokio::test]
    async fn test_without_species() {
        let catalog = MockCatalog::new()
            .with_entity(sample_bulbasaur())
            .with_species(sample_bulbasaur_species());
        let mut dex = HeadlessBrowser::with_catalog(BrowserConfig::new(), Arc::new(catalog))
            .unwrap()
            .without_species();

        dex.start().await;
        assert_eq!(dex.display().genus, None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = HeadlessBrowser::with_catalog(
            BrowserConfig::new().with_max_id(0),
            Arc::new(MockCatalog::new()),
        );
        assert!(matches!(result, Err(HeadlessError::Config(_))));
    }
}
