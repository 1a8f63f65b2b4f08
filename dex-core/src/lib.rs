//! Creature catalog browser.
//!
//! This crate provides:
//! - A wrap-around [`Navigator`] over catalog identifiers
//! - A pure [`Renderer`] that fills named display slots
//! - The fetch-and-render cycle ([`Browser`]) with configurable handling of
//!   out-of-order responses
//! - A headless driver and test doubles
//!
//! # Quick Start
//!
//! ```ignore
//! use dex_core::{Action, Browser, BrowserConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BrowserConfig::from_env()?;
//!     let catalog = config.build_client()?;
//!     let mut browser = Browser::new(&config)?;
//!
//!     browser.load_start(&catalog).await;
//!     browser.navigate(&catalog, Action::Random).await;
//!     println!("{}", browser.display().to_text());
//!     Ok(())
//! }
//! ```

pub mod browser;
pub mod catalog;
pub mod config;
pub mod headless;
pub mod navigator;
pub mod render;
pub mod testing;

// Primary public API
pub use browser::{Browser, FetchErrorKind, Outcome, Phase, ResponseOrdering, Ticket};
pub use catalog::Catalog;
pub use config::{BrowserConfig, ConfigError};
pub use headless::{HeadlessBrowser, HeadlessError};
pub use navigator::{Action, Navigator, NavigatorError, DEFAULT_MAX_ID, START_ID};
pub use render::{
    AttributeBar, Badge, BarScale, DisplayState, DisplaySurface, Image, Renderer,
    ERROR_INDICATOR, LOADING_INDICATOR,
};
pub use testing::{MockCatalog, MockFailure};

// Re-export the record types so callers need not depend on the client crate
pub use pokeapi::{AttributeKind, Attributes, EntityRecord, SpeciesRecord};
