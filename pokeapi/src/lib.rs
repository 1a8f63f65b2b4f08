//! Minimal PokeAPI client.
//!
//! This crate provides a focused client for the two catalog endpoints the
//! browser needs:
//! - `GET <entity-url>/{id}` for a creature's name, sprites, types and stats
//! - `GET <species-url>/{id}` for the English genus and flavor text
//!
//! Responses are validated up front: a body that is missing a field the
//! browser renders is rejected with [`Error::Malformed`] instead of failing
//! later when the field is read.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENTITY_URL: &str = "https://pokeapi.co/api/v2/pokemon";
pub const DEFAULT_SPECIES_URL: &str = "https://pokeapi.co/api/v2/pokemon-species";

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found or service error (status {status}): {message}")]
    NotFoundOrService { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// True when the service answered with 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFoundOrService { status: 404, .. })
    }
}

/// PokeAPI client.
#[derive(Clone)]
pub struct PokeApi {
    client: reqwest::Client,
    entity_url: String,
    species_url: String,
}

impl PokeApi {
    /// Create a client pointed at the public PokeAPI, with no request timeout.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            client: build_client(None)?,
            entity_url: DEFAULT_ENTITY_URL.to_string(),
            species_url: DEFAULT_SPECIES_URL.to_string(),
        })
    }

    /// Set the base URL for entity lookups.
    pub fn with_entity_url(mut self, url: impl Into<String>) -> Self {
        self.entity_url = url.into();
        self
    }

    /// Set the base URL for species lookups.
    pub fn with_species_url(mut self, url: impl Into<String>) -> Self {
        self.species_url = url.into();
        self
    }

    /// Bound every request by `timeout`. Without this a request can wait forever.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, Error> {
        self.client = build_client(Some(timeout))?;
        Ok(self)
    }

    /// URL for the entity with the given id.
    pub fn entity_url(&self, id: u32) -> String {
        join_url(&self.entity_url, id)
    }

    /// URL for the species with the given id.
    pub fn species_url(&self, id: u32) -> String {
        join_url(&self.species_url, id)
    }

    /// Fetch and validate one entity.
    pub async fn fetch_entity(&self, id: u32) -> Result<EntityRecord, Error> {
        let body = self.get(&self.entity_url(id)).await?;
        parse_entity(&body)
    }

    /// Fetch the English genus and flavor text for one species.
    pub async fn fetch_species(&self, id: u32) -> Result<SpeciesRecord, Error> {
        let body = self.get(&self.species_url(id)).await?;
        parse_species(&body)
    }

    async fn get(&self, url: &str) -> Result<String, Error> {
        tracing::debug!(%url, "catalog request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%url, status = status.as_u16(), "catalog request rejected");
            return Err(Error::NotFoundOrService {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        tracing::debug!(%url, bytes = body.len(), "catalog response");
        Ok(body)
    }
}

fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))
}

fn join_url(base: &str, id: u32) -> String {
    format!("{}/{id}", base.trim_end_matches('/'))
}

// ============================================================================
// Public types
// ============================================================================

/// The six fixed attributes every creature carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl AttributeKind {
    /// All attributes in display order.
    pub const ALL: [AttributeKind; 6] = [
        AttributeKind::Hp,
        AttributeKind::Attack,
        AttributeKind::Defense,
        AttributeKind::SpecialAttack,
        AttributeKind::SpecialDefense,
        AttributeKind::Speed,
    ];

    /// Name used by the service in `stats[].stat.name`.
    pub fn api_name(self) -> &'static str {
        match self {
            AttributeKind::Hp => "hp",
            AttributeKind::Attack => "attack",
            AttributeKind::Defense => "defense",
            AttributeKind::SpecialAttack => "special-attack",
            AttributeKind::SpecialDefense => "special-defense",
            AttributeKind::Speed => "speed",
        }
    }

    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            AttributeKind::Hp => "HP",
            AttributeKind::Attack => "Attack",
            AttributeKind::Defense => "Defense",
            AttributeKind::SpecialAttack => "Sp. Atk",
            AttributeKind::SpecialDefense => "Sp. Def",
            AttributeKind::Speed => "Speed",
        }
    }

    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.api_name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Values for all six attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attributes {
    values: [u16; 6],
}

impl Attributes {
    /// Build from values in [`AttributeKind::ALL`] order.
    pub fn new(values: [u16; 6]) -> Self {
        Self { values }
    }

    pub fn get(&self, kind: AttributeKind) -> u16 {
        self.values[kind.index()]
    }

    pub fn set(&mut self, kind: AttributeKind, value: u16) {
        self.values[kind.index()] = value;
    }

    /// Iterate in display order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKind, u16)> + '_ {
        AttributeKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

/// A validated creature record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub id: u32,
    pub name: String,
    /// `sprites.other.official-artwork.front_default`
    pub artwork_url: Option<String>,
    /// `sprites.front_default`
    pub sprite_url: Option<String>,
    /// Category labels in the order the service lists them.
    pub categories: Vec<String>,
    pub attributes: Attributes,
}

impl EntityRecord {
    /// Official artwork when present, otherwise the default sprite.
    pub fn portrait_url(&self) -> Option<&str> {
        self.artwork_url.as_deref().or(self.sprite_url.as_deref())
    }
}

/// English species details.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpeciesRecord {
    pub id: u32,
    pub genus: Option<String>,
    pub flavor_text: Option<String>,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse and validate an entity body.
pub fn parse_entity(body: &str) -> Result<EntityRecord, Error> {
    let api: ApiEntity =
        serde_json::from_str(body).map_err(|e| Error::Malformed(e.to_string()))?;

    if api.id == 0 {
        return Err(Error::Malformed("id must be positive".to_string()));
    }
    if api.name.is_empty() {
        return Err(Error::Malformed("name is empty".to_string()));
    }

    let mut attributes = Attributes::default();
    let mut seen = [false; 6];
    for stat in &api.stats {
        // Unknown stat names are ignored
        if let Some(kind) = AttributeKind::from_api_name(&stat.stat.name) {
            attributes.set(kind, stat.base_stat);
            seen[kind.index()] = true;
        }
    }
    if let Some(kind) = AttributeKind::ALL.into_iter().find(|k| !seen[k.index()]) {
        return Err(Error::Malformed(format!(
            "missing attribute `{}`",
            kind.api_name()
        )));
    }

    let artwork_url = api
        .sprites
        .other
        .and_then(|other| other.official_artwork)
        .and_then(|artwork| artwork.front_default);

    Ok(EntityRecord {
        id: api.id,
        name: api.name,
        artwork_url,
        sprite_url: api.sprites.front_default,
        categories: api.types.into_iter().map(|t| t.kind.name).collect(),
        attributes,
    })
}

/// Parse a species body, keeping only English entries.
pub fn parse_species(body: &str) -> Result<SpeciesRecord, Error> {
    let api: ApiSpecies =
        serde_json::from_str(body).map_err(|e| Error::Malformed(e.to_string()))?;

    let genus = api
        .genera
        .into_iter()
        .find(|g| g.language.name == "en")
        .map(|g| g.genus);

    let flavor_text = api
        .flavor_text_entries
        .into_iter()
        .find(|entry| entry.language.name == "en")
        .map(|entry| normalize_whitespace(&entry.flavor_text));

    Ok(SpeciesRecord {
        id: api.id,
        genus,
        flavor_text,
    })
}

/// Flavor text carries hard line breaks and form feeds from the games.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Internal API types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiEntity {
    id: u32,
    name: String,
    sprites: ApiSprites,
    types: Vec<ApiTypeSlot>,
    stats: Vec<ApiStat>,
}

#[derive(Debug, Deserialize)]
struct ApiSprites {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    other: Option<ApiOtherSprites>,
}

#[derive(Debug, Deserialize)]
struct ApiOtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<ApiArtwork>,
}

#[derive(Debug, Deserialize)]
struct ApiArtwork {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiTypeSlot {
    #[serde(rename = "type")]
    kind: ApiNamed,
}

#[derive(Debug, Deserialize)]
struct ApiStat {
    base_stat: u16,
    stat: ApiNamed,
}

#[derive(Debug, Deserialize)]
struct ApiNamed {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiSpecies {
    id: u32,
    #[serde(default)]
    genera: Vec<ApiGenus>,
    #[serde(default)]
    flavor_text_entries: Vec<ApiFlavorText>,
}

#[derive(Debug, Deserialize)]
struct ApiGenus {
    genus: String,
    language: ApiNamed,
}

#[derive(Debug, Deserialize)]
struct ApiFlavorText {
    flavor_text: String,
    language: ApiNamed,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "sprites": {
            "front_default": "https://img.example/sprites/1.png",
            "other": {
                "official-artwork": { "front_default": "https://img.example/artwork/1.png" }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "" } },
            { "slot": 2, "type": { "name": "poison", "url": "" } }
        ],
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "defense" } },
            { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack" } },
            { "base_stat": 65, "effort": 0, "stat": { "name": "special-defense" } },
            { "base_stat": 45, "effort": 0, "stat": { "name": "speed" } }
        ]
    }"#;

    #[test]
    fn test_parse_entity() {
        let record = parse_entity(BULBASAUR).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "bulbasaur");
        assert_eq!(record.categories, vec!["grass", "poison"]);
        assert_eq!(record.attributes.get(AttributeKind::Hp), 45);
        assert_eq!(record.attributes.get(AttributeKind::SpecialAttack), 65);
        assert_eq!(record.attributes.get(AttributeKind::Speed), 45);
        assert_eq!(
            record.portrait_url(),
            Some("https://img.example/artwork/1.png")
        );
    }

    #[test]
    fn test_portrait_falls_back_to_sprite() {
        let body = BULBASAUR.replace(
            r#"{ "front_default": "https://img.example/artwork/1.png" }"#,
            r#"{ "front_default": null }"#,
        );
        let record = parse_entity(&body).unwrap();
        assert_eq!(record.artwork_url, None);
        assert_eq!(record.portrait_url(), Some("https://img.example/sprites/1.png"));
    }

    #[test]
    fn test_missing_attribute_is_malformed() {
        let body = BULBASAUR.replace(r#""name": "speed""#, r#""name": "evasion""#);
        let err = parse_entity(&body).unwrap_err();
        assert!(matches!(err, Error::Malformed(ref msg) if msg.contains("speed")));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = parse_entity(r#"{ "id": 1, "name": "bulbasaur" }"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn test_negative_stat_is_malformed() {
        let body = BULBASAUR.replace(
            r#""base_stat": 45, "effort": 0, "stat": { "name": "hp" }"#,
            r#""base_stat": -1, "effort": 0, "stat": { "name": "hp" }"#,
        );
        assert!(matches!(parse_entity(&body), Err(Error::Malformed(_))));
    }

    #[test]
    fn test_zero_id_is_malformed() {
        let body = BULBASAUR.replacen(r#""id": 1"#, r#""id": 0"#, 1);
        assert!(matches!(parse_entity(&body), Err(Error::Malformed(_))));
    }

    #[test]
    fn test_parse_species_english_only() {
        let body = r#"{
            "id": 1,
            "genera": [
                { "genus": "Pokémon Graine", "language": { "name": "fr" } },
                { "genus": "Seed Pokémon", "language": { "name": "en" } }
            ],
            "flavor_text_entries": [
                { "flavor_text": "Una rara semilla", "language": { "name": "es" } },
                { "flavor_text": "A strange seed was\nplanted on its\u000cback at birth.", "language": { "name": "en" } }
            ]
        }"#;
        let species = parse_species(body).unwrap();
        assert_eq!(species.genus.as_deref(), Some("Seed Pokémon"));
        assert_eq!(
            species.flavor_text.as_deref(),
            Some("A strange seed was planted on its back at birth.")
        );
    }

    #[test]
    fn test_urls_tolerate_trailing_slash() {
        let api = PokeApi::new()
            .unwrap()
            .with_entity_url("http://localhost:9/pokemon/")
            .with_species_url("http://localhost:9/species");
        assert_eq!(api.entity_url(7), "http://localhost:9/pokemon/7");
        assert_eq!(api.species_url(7), "http://localhost:9/species/7");
    }

    #[test]
    fn test_attribute_names_round_trip() {
        for kind in AttributeKind::ALL {
            assert_eq!(AttributeKind::from_api_name(kind.api_name()), Some(kind));
        }
        assert_eq!(AttributeKind::from_api_name("accuracy"), None);
    }

    #[test]
    fn test_not_found_helper() {
        let err = Error::NotFoundOrService {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!Error::Network("refused".to_string()).is_not_found());
    }
}
