//! Browser configuration.
//!
//! Defaults reproduce the public PokeAPI setup. Every field can be overridden
//! through the `with_*` builders or through `DEX_*` environment variables.

use std::time::Duration;

use pokeapi::{PokeApi, DEFAULT_ENTITY_URL, DEFAULT_SPECIES_URL};
use thiserror::Error;

use crate::browser::ResponseOrdering;
use crate::navigator::DEFAULT_MAX_ID;
use crate::render::{BarScale, DEFAULT_REFERENCE_MAX};

pub const ENV_ENTITY_URL: &str = "DEX_ENTITY_URL";
pub const ENV_SPECIES_URL: &str = "DEX_SPECIES_URL";
pub const ENV_MAX_ID: &str = "DEX_MAX_ID";
pub const ENV_BAR_REFERENCE: &str = "DEX_BAR_REFERENCE";
pub const ENV_CLAMP_BARS: &str = "DEX_CLAMP_BARS";
pub const ENV_ORDERING: &str = "DEX_ORDERING";
pub const ENV_TIMEOUT_SECS: &str = "DEX_TIMEOUT_SECS";

/// Errors from reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Configuration for a [`crate::Browser`] and its catalog client.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Base URL for entity lookups.
    pub entity_url: String,

    /// Base URL for species lookups.
    pub species_url: String,

    /// Highest identifier the navigator will produce.
    pub max_id: u32,

    /// Attribute value that fills a bar.
    pub bar_reference: u16,

    /// Cap bar widths at 100%.
    pub clamp_bars: bool,

    /// Which completions reach the display.
    pub ordering: ResponseOrdering,

    /// Request timeout. `None` waits forever.
    pub request_timeout: Option<Duration>,
}

impl BrowserConfig {
    pub fn new() -> Self {
        Self {
            entity_url: DEFAULT_ENTITY_URL.to_string(),
            species_url: DEFAULT_SPECIES_URL.to_string(),
            max_id: DEFAULT_MAX_ID,
            bar_reference: DEFAULT_REFERENCE_MAX,
            clamp_bars: false,
            ordering: ResponseOrdering::default(),
            request_timeout: None,
        }
    }

    pub fn with_entity_url(mut self, url: impl Into<String>) -> Self {
        self.entity_url = url.into();
        self
    }

    pub fn with_species_url(mut self, url: impl Into<String>) -> Self {
        self.species_url = url.into();
        self
    }

    pub fn with_max_id(mut self, max_id: u32) -> Self {
        self.max_id = max_id;
        self
    }

    pub fn with_bar_reference(mut self, reference: u16) -> Self {
        self.bar_reference = reference;
        self
    }

    pub fn with_clamped_bars(mut self, clamp: bool) -> Self {
        self.clamp_bars = clamp;
        self
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Defaults overridden by `DEX_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `DEX_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(url) = lookup(ENV_ENTITY_URL) {
            config.entity_url = url;
        }
        if let Some(url) = lookup(ENV_SPECIES_URL) {
            config.species_url = url;
        }
        if let Some(value) = lookup(ENV_MAX_ID) {
            config.max_id = parse_positive(ENV_MAX_ID, &value)?;
        }
        if let Some(value) = lookup(ENV_BAR_REFERENCE) {
            let reference: u32 = parse_positive(ENV_BAR_REFERENCE, &value)?;
            config.bar_reference = u16::try_from(reference).map_err(|_| ConfigError::Invalid {
                key: ENV_BAR_REFERENCE,
                value: value.clone(),
                reason: "must fit in 16 bits",
            })?;
        }
        if let Some(value) = lookup(ENV_CLAMP_BARS) {
            config.clamp_bars = parse_bool(ENV_CLAMP_BARS, &value)?;
        }
        if let Some(value) = lookup(ENV_ORDERING) {
            config.ordering =
                ResponseOrdering::parse(&value).ok_or_else(|| ConfigError::Invalid {
                    key: ENV_ORDERING,
                    value: value.clone(),
                    reason: "expected `latest-issued` or `last-arrival`",
                })?;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            let secs = parse_positive(ENV_TIMEOUT_SECS, &value)?;
            config.request_timeout = Some(Duration::from_secs(u64::from(secs)));
        }

        Ok(config)
    }

    /// Check values that builders accept unchecked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_id == 0 {
            return Err(ConfigError::Invalid {
                key: ENV_MAX_ID,
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }
        if self.bar_reference == 0 {
            return Err(ConfigError::Invalid {
                key: ENV_BAR_REFERENCE,
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    pub fn bar_scale(&self) -> BarScale {
        BarScale::new(self.bar_reference).clamped(self.clamp_bars)
    }

    /// HTTP client for the configured endpoints.
    pub fn build_client(&self) -> Result<PokeApi, pokeapi::Error> {
        let api = PokeApi::new()?
            .with_entity_url(&self.entity_url)
            .with_species_url(&self.species_url);
        match self.request_timeout {
            Some(timeout) => api.with_timeout(timeout),
            None => Ok(api),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "expected a positive integer",
        }),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "expected true or false",
        }),
    }
}
