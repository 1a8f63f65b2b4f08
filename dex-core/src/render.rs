//! Mapping a fetched record onto display slots.
//!
//! The [`Renderer`] is pure: it writes into any [`DisplaySurface`]. The TUI
//! and the headless driver both read back from [`DisplayState`], the
//! in-memory surface owned by the browser.

use pokeapi::{AttributeKind, EntityRecord, SpeciesRecord};

/// Shown in the name slot while a fetch is outstanding.
pub const LOADING_INDICATOR: &str = "Loading...";

/// Shown in the name slot after a failed fetch.
pub const ERROR_INDICATOR: &str = "Error";

/// Visual reference for bar widths. The true attribute maximum is 255.
pub const DEFAULT_REFERENCE_MAX: u16 = 150;

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `#` followed by the id zero-padded to four digits.
pub fn format_id(id: u32) -> String {
    format!("#{id:04}")
}

/// Style key used to color a category badge.
pub fn badge_style_key(category: &str) -> String {
    format!("type-{category}")
}

/// Scale for attribute bars.
///
/// Widths are `value / reference_max * 100`. Unless `clamp` is set, values
/// above the reference produce widths above 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarScale {
    reference_max: u16,
    clamp: bool,
}

impl BarScale {
    /// A zero reference is bumped to 1.
    pub fn new(reference_max: u16) -> Self {
        Self {
            reference_max: reference_max.max(1),
            clamp: false,
        }
    }

    pub fn clamped(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn reference_max(&self) -> u16 {
        self.reference_max
    }

    pub fn is_clamped(&self) -> bool {
        self.clamp
    }

    pub fn width_percent(&self, value: u16) -> f64 {
        let width = f64::from(value) / f64::from(self.reference_max) * 100.0;
        if self.clamp {
            width.min(100.0)
        } else {
            width
        }
    }
}

impl Default for BarScale {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_MAX)
    }
}

/// Portrait slot contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    pub alt: String,
}

/// One category badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub style_key: String,
}

impl Badge {
    pub fn new(category: &str) -> Self {
        Self {
            label: category.to_string(),
            style_key: badge_style_key(category),
        }
    }

    /// Category name without the `type-` prefix.
    pub fn category(&self) -> &str {
        self.style_key
            .strip_prefix("type-")
            .unwrap_or(&self.style_key)
    }
}

/// One attribute slot: numeric label plus bar width.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeBar {
    pub kind: AttributeKind,
    pub value: u16,
    pub label: String,
    pub width_percent: f64,
}

impl AttributeBar {
    /// A slot that has never been rendered.
    pub fn empty(kind: AttributeKind) -> Self {
        Self {
            kind,
            value: 0,
            label: String::new(),
            width_percent: 0.0,
        }
    }

    /// Width as a CSS-style percentage with two decimals, e.g. `32.67%`.
    pub fn width_label(&self) -> String {
        format!("{:.2}%", self.width_percent)
    }

    pub fn overflows(&self) -> bool {
        self.width_percent > 100.0
    }
}

/// Named slots a renderer writes into.
pub trait DisplaySurface {
    fn set_name(&mut self, text: &str);
    fn set_identifier(&mut self, text: &str);
    fn set_image(&mut self, image: Option<Image>);
    fn set_badges(&mut self, badges: Vec<Badge>);
    fn set_attribute(&mut self, bar: AttributeBar);

    /// Genus and flavor text. Surfaces without room for them can ignore it.
    fn set_details(&mut self, _genus: Option<&str>, _flavor_text: Option<&str>) {}
}

/// In-memory display surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub name: String,
    pub identifier: String,
    pub image: Option<Image>,
    pub badges: Vec<Badge>,
    pub attributes: Vec<AttributeBar>,
    pub genus: Option<String>,
    pub flavor_text: Option<String>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            identifier: String::new(),
            image: None,
            badges: Vec::new(),
            attributes: AttributeKind::ALL
                .into_iter()
                .map(AttributeBar::empty)
                .collect(),
            genus: None,
            flavor_text: None,
        }
    }

    pub fn attribute(&self, kind: AttributeKind) -> Option<&AttributeBar> {
        self.attributes.iter().find(|bar| bar.kind == kind)
    }

    pub fn is_loading(&self) -> bool {
        self.name == LOADING_INDICATOR
    }

    pub fn is_error(&self) -> bool {
        self.name == ERROR_INDICATOR
    }

    /// Plain-text rendering, one slot per line.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        let mut title = format!("{} {}", self.name, self.identifier);
        if let Some(genus) = &self.genus {
            title.push_str(&format!(" ({genus})"));
        }
        lines.push(title.trim_end().to_string());

        if let Some(image) = &self.image {
            lines.push(format!("Image: {}", image.url));
        }

        if !self.badges.is_empty() {
            let labels: Vec<&str> = self.badges.iter().map(|b| b.label.as_str()).collect();
            lines.push(format!("Types: {}", labels.join(", ")));
        }

        for bar in &self.attributes {
            if bar.label.is_empty() {
                continue;
            }
            lines.push(format!(
                "{:<8} {:>3} {}",
                bar.kind.label(),
                bar.label,
                bar.width_label()
            ));
        }

        if let Some(flavor) = &self.flavor_text {
            lines.push(String::new());
            lines.push(flavor.clone());
        }

        lines.join("\n")
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for DisplayState {
    fn set_name(&mut self, text: &str) {
        self.name = text.to_string();
    }

    fn set_identifier(&mut self, text: &str) {
        self.identifier = text.to_string();
    }

    fn set_image(&mut self, image: Option<Image>) {
        self.image = image;
    }

    fn set_badges(&mut self, badges: Vec<Badge>) {
        self.badges = badges;
    }

    fn set_attribute(&mut self, bar: AttributeBar) {
        match self.attributes.iter_mut().find(|slot| slot.kind == bar.kind) {
            Some(slot) => *slot = bar,
            None => self.attributes.push(bar),
        }
    }

    fn set_details(&mut self, genus: Option<&str>, flavor_text: Option<&str>) {
        self.genus = genus.map(str::to_string);
        self.flavor_text = flavor_text.map(str::to_string);
    }
}

/// Writes records and indicators into a surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    scale: BarScale,
}

impl Renderer {
    pub fn new(scale: BarScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> BarScale {
        self.scale
    }

    pub fn render<S: DisplaySurface + ?Sized>(&self, record: &EntityRecord, surface: &mut S) {
        surface.set_name(&capitalize_first(&record.name));
        surface.set_identifier(&format_id(record.id));
        surface.set_image(record.portrait_url().map(|url| Image {
            url: url.to_string(),
            alt: record.name.clone(),
        }));
        surface.set_badges(record.categories.iter().map(|c| Badge::new(c)).collect());

        for (kind, value) in record.attributes.iter() {
            surface.set_attribute(AttributeBar {
                kind,
                value,
                label: value.to_string(),
                width_percent: self.scale.width_percent(value),
            });
        }

        // Details belong to the previous record until the species lookup lands
        surface.set_details(None, None);
    }

    pub fn render_species<S: DisplaySurface + ?Sized>(
        &self,
        species: &SpeciesRecord,
        surface: &mut S,
    ) {
        surface.set_details(species.genus.as_deref(), species.flavor_text.as_deref());
    }

    pub fn render_loading<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        surface.set_name(LOADING_INDICATOR);
    }

    pub fn render_error<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        surface.set_name(ERROR_INDICATOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_bulbasaur, sample_record};

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("mr-mime"), "Mr-mime");
        assert_eq!(capitalize_first("éevee"), "Éevee");
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(7), "#0007");
        assert_eq!(format_id(42), "#0042");
        assert_eq!(format_id(1025), "#1025");
        assert_eq!(format_id(10_001), "#10001");
    }

    #[test]
    fn test_bar_width() {
        let scale = BarScale::default();
        assert!((scale.width_percent(45) - 30.0).abs() < 1e-9);
        assert!((scale.width_percent(255) - 170.0).abs() < 1e-9);
        assert_eq!(scale.width_percent(0), 0.0);
    }

    #[test]
    fn test_bar_width_clamped() {
        let scale = BarScale::default().clamped(true);
        assert_eq!(scale.width_percent(255), 100.0);
        assert!((scale.width_percent(45) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_reference_is_bumped() {
        assert_eq!(BarScale::new(0).reference_max(), 1);
    }

    #[test]
    fn test_render_bulbasaur() {
        let mut display = DisplayState::new();
        Renderer::default().render(&sample_bulbasaur(), &mut display);

        assert_eq!(display.name, "Bulbasaur");
        assert_eq!(display.identifier, "#0001");
        assert_eq!(display.image.as_ref().unwrap().alt, "bulbasaur");

        let keys: Vec<&str> = display.badges.iter().map(|b| b.style_key.as_str()).collect();
        assert_eq!(keys, vec!["type-grass", "type-poison"]);

        let widths: Vec<String> = display.attributes.iter().map(|b| b.width_label()).collect();
        assert_eq!(
            widths,
            vec!["30.00%", "32.67%", "32.67%", "43.33%", "43.33%", "30.00%"]
        );
        assert_eq!(display.attribute(AttributeKind::Attack).unwrap().label, "49");
    }

    #[test]
    fn test_image_prefers_artwork() {
        let mut record = sample_record(4, "charmander", &["fire"]);
        record.artwork_url = Some("https://img.example/artwork/4.png".to_string());
        record.sprite_url = Some("https://img.example/sprites/4.png".to_string());

        let mut display = DisplayState::new();
        Renderer::default().render(&record, &mut display);
        assert_eq!(
            display.image.unwrap().url,
            "https://img.example/artwork/4.png"
        );
    }

    #[test]
    fn test_image_falls_back_to_sprite() {
        let mut record = sample_record(4, "charmander", &["fire"]);
        record.artwork_url = None;
        record.sprite_url = Some("https://img.example/sprites/4.png".to_string());

        let mut display = DisplayState::new();
        Renderer::default().render(&record, &mut display);
        assert_eq!(display.image.unwrap().url, "https://img.example/sprites/4.png");
    }

    #[test]
    fn test_image_cleared_when_absent() {
        let renderer = Renderer::default();
        let mut display = DisplayState::new();
        renderer.render(&sample_bulbasaur(), &mut display);
        assert!(display.image.is_some());

        let mut record = sample_record(4, "charmander", &["fire"]);
        record.artwork_url = None;
        record.sprite_url = None;
        renderer.render(&record, &mut display);

        assert_eq!(display.image, None);
        assert_eq!(display.name, "Charmander");
    }

    #[test]
    fn test_error_keeps_stale_content() {
        let renderer = Renderer::default();
        let mut display = DisplayState::new();
        renderer.render(&sample_bulbasaur(), &mut display);

        renderer.render_loading(&mut display);
        assert!(display.is_loading());
        assert_eq!(display.identifier, "#0001");

        renderer.render_error(&mut display);
        assert!(display.is_error());
        assert_eq!(display.identifier, "#0001");
        assert_eq!(display.badges.len(), 2);
    }

    #[test]
    fn test_render_clears_previous_details() {
        let renderer = Renderer::default();
        let mut display = DisplayState::new();
        display.set_details(Some("Seed Pokémon"), Some("A strange seed."));

        renderer.render(&sample_record(4, "charmander", &["fire"]), &mut display);
        assert_eq!(display.genus, None);
        assert_eq!(display.flavor_text, None);
    }

    #[test]
    fn test_to_text() {
        let mut display = DisplayState::new();
        Renderer::default().render(&sample_bulbasaur(), &mut display);
        display.set_details(Some("Seed Pokémon"), None);

        let text = display.to_text();
        assert!(text.starts_with("Bulbasaur #0001 (Seed Pokémon)"));
        assert!(text.contains("Types: grass, poison"));
        assert!(text.contains("Sp. Atk   65 43.33%"));
    }

    #[test]
    fn test_badge_category() {
        let badge = Badge::new("grass");
        assert_eq!(badge.category(), "grass");
        assert_eq!(badge.label, "grass");
    }
}
